//! Ordered rewrite-rule machinery shared by both pipelines.
//!
//! A pipeline is an explicit, fixed-order list of [`Rule`]s. Each rule is a
//! named global rewrite over the whole text; later rules operate on the
//! output of earlier ones, so the list order is part of the COON format
//! contract and must not be rearranged.

use regex::{Captures, Regex};
use std::borrow::Cow;

/// How a matched pattern is rewritten.
pub(crate) enum Rewrite {
    /// Fixed replacement template; `${n}` refers to capture groups.
    Template(Cow<'static, str>),
    /// Capture-inspecting rewrite. Returning the full match unchanged lets a
    /// rule decline (used where the regex crate's lack of backreferences
    /// would otherwise over-match).
    Inspect(fn(&Captures) -> String),
}

/// One named step of a pipeline: pattern + rewrite.
pub(crate) struct Rule {
    name: Cow<'static, str>,
    pattern: Regex,
    rewrite: Rewrite,
}

impl Rule {
    /// A rule with a fixed replacement template.
    pub(crate) fn text(
        name: impl Into<Cow<'static, str>>,
        pattern: impl AsRef<str>,
        replacement: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: compile(pattern.as_ref()),
            rewrite: Rewrite::Template(replacement.into()),
        }
    }

    /// A rule whose replacement inspects the captures.
    pub(crate) fn inspect(
        name: impl Into<Cow<'static, str>>,
        pattern: impl AsRef<str>,
        rewrite: fn(&Captures) -> String,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: compile(pattern.as_ref()),
            rewrite: Rewrite::Inspect(rewrite),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Apply this rule as a global rewrite over `input`.
    pub(crate) fn apply(&self, input: &str) -> String {
        match &self.rewrite {
            Rewrite::Template(template) => self
                .pattern
                .replace_all(input, template.as_ref())
                .into_owned(),
            Rewrite::Inspect(rewrite) => self
                .pattern
                .replace_all(input, |caps: &Captures| rewrite(caps))
                .into_owned(),
        }
    }
}

/// Run `rules` front to back, feeding each rule the previous rule's output.
pub(crate) fn apply_all(rules: &[Rule], input: &str) -> String {
    let mut text = input.to_string();
    for rule in rules {
        text = rule.apply(&text);
    }
    text
}

// Rule patterns are fixed strings; a failure to compile is a programmer
// error caught by the test suite, not a runtime condition.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("rule pattern must compile")
}
