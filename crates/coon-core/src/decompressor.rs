//! Decompress pipeline — COON → approximate Dart source.
//!
//! The inverse rewrites run in the reverse order of the compress pipeline:
//!
//! 1. `pd:N` → `EdgeInsets.all(N)`
//! 2. whole-word `ctx` → `context`
//! 3. property tokens → `name:` (last table entry owning a shared token wins)
//! 4. widget tokens → canonical names (identity entries skipped)
//! 5. whole-word `ret` → `return`
//! 6. `m:build(ctx)->Widget` → the override + signature form
//! 7. `f:n=T` → `final T n = T();`
//! 8. `c:X<Y>` → `class X extends Y {`
//! 9. line-local statement-terminator reinsertion
//!
//! This is a best-effort reconstruction, not a proven inverse. Two
//! approximations are inherent: shared tokens expand to a single canonical
//! name, and structural markers can be consumed by an earlier expansion that
//! shares their token (step 2 rewrites the `ctx` inside `m:build(ctx)`, and
//! the property token `c:` overlaps the class marker), leaving the later
//! marker rules unmatched. Fidelity depends on how closely the input matched
//! the patterns the compress side recognizes.

use std::sync::LazyLock;

use crate::rules::{apply_all, Rule};
use crate::tables;

static DECOMPRESS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(build_rules);

fn build_rules() -> Vec<Rule> {
    let mut rules = vec![
        Rule::text("edge-insets", r"pd:(\d+(?:\.\d+)?)", "EdgeInsets.all(${1})"),
        Rule::text("context-ident", r"\bctx\b", "context"),
    ];
    // Property tokens are plain literals (no word boundary — they end in a
    // colon), deduplicated so each shared token expands exactly once.
    for abbrev in tables::property_expansions() {
        rules.push(Rule::text(
            format!("property-{}", abbrev.term),
            regex::escape(abbrev.token),
            format!("{}:", abbrev.term),
        ));
    }
    for abbrev in tables::WIDGETS.iter().filter(|a| !a.is_identity()) {
        rules.push(Rule::text(
            format!("widget-{}", abbrev.term),
            format!(r"\b{}\b", abbrev.token),
            abbrev.term,
        ));
    }
    rules.push(Rule::text("return-keyword", r"\bret\b", "return"));
    rules.push(Rule::text(
        "build-method",
        r"m:build\(ctx\)->Widget",
        "@override\nWidget build(BuildContext context) {",
    ));
    rules.push(Rule::text("field-decl", r"f:(\w+)=(\w+)", "final ${2} ${1} = ${2}();"));
    rules.push(Rule::text("class-decl", r"c:(\w+)<(\w+)>", "class ${1} extends ${2} {"));
    rules
}

/// Decision of the per-line statement-terminator classifier.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineDecision {
    AppendSeparator,
    LeaveAsIs,
}

/// Suffix characters after which a line needs no separator.
const NO_SEPARATOR_SUFFIXES: &[char] = &['{', '}', ';', ','];

/// Prefixes marking structural or annotation lines that take no separator.
const STRUCTURAL_PREFIXES: &[&str] = &["c:", "f:", "m:", "@", "//"];

/// Classify one line in isolation. The heuristic is deliberately line-local
/// with no lookahead or lookbehind across lines, so an expression that
/// legitimately spans multiple lines without a trailing marker character
/// picks up a spurious separator. Accepted approximation.
pub(crate) fn classify_line(line: &str) -> LineDecision {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineDecision::LeaveAsIs;
    }
    if trimmed.ends_with(NO_SEPARATOR_SUFFIXES) {
        return LineDecision::LeaveAsIs;
    }
    if STRUCTURAL_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        return LineDecision::LeaveAsIs;
    }
    LineDecision::AppendSeparator
}

fn reinsert_separators(text: &str) -> String {
    let lines: Vec<String> = text
        .split('\n')
        .map(|line| match classify_line(line) {
            LineDecision::AppendSeparator => format!("{};", line.trim_end()),
            LineDecision::LeaveAsIs => line.to_string(),
        })
        .collect();
    lines.join("\n")
}

/// Reconstruct approximate Dart source from COON text.
///
/// Never fails: input that matches no token flows through the rewrite rules
/// unchanged (the separator heuristic may still append a trailing `;`).
pub fn decompress(coon: &str) -> String {
    reinsert_separators(&apply_all(&DECOMPRESS_RULES, coon))
}
