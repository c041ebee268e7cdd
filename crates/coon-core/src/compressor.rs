//! Compress pipeline — Dart/Flutter source → COON.
//!
//! Eleven ordered steps, each a global rewrite over the whole text. Later
//! steps operate on earlier output, so the order below is part of the format
//! contract:
//!
//! 1. collapse runs of blanks/tabs, trim space around newlines
//! 2. strip `@override` annotation lines
//! 3. `class X extends Y {` → `c:X<Y>`
//! 4. `final T n = T();` → `f:n=T` (initializer must repeat the type)
//! 5. `Widget build(BuildContext context) {` → `m:build(ctx)->Widget`
//! 6. whole-word `return` → `ret`
//! 7. widget abbreviations (table order, identity entries skipped)
//! 8. property abbreviations (`name:` → token, table order)
//! 9. `BuildContext context` → `ctx`, then whole-word `context` → `ctx`
//! 10. semicolon elision at line end only
//! 11. `EdgeInsets.all(N)` → `pd:N`
//!
//! The property step runs after the structural steps 3–5 so the markers they
//! emit are not corrupted by token collisions.

use std::sync::LazyLock;

use regex::Captures;

use crate::error::Result;
use crate::estimator::estimate_tokens;
use crate::rules::{apply_all, Rule};
use crate::tables;
use crate::types::{CompressionResult, Strategy};

static COMPRESS_RULES: LazyLock<Vec<Rule>> = LazyLock::new(build_rules);

fn build_rules() -> Vec<Rule> {
    let mut rules = vec![
        // 1. Whitespace normalization.
        Rule::text("collapse-blanks", r"[ \t]+", " "),
        Rule::text("trim-line-edges", r" *\n *", "\n"),
        // 2. Override annotations carry no information in COON form.
        Rule::text("strip-override", r"@override\s*\n", ""),
        // 3. The opening brace is dropped; `<Base>` denotes inheritance.
        Rule::text("class-decl", r"class (\w+) extends (\w+) \{", "c:${1}<${2}>"),
        // 4. The regex crate has no backreferences, so the type/initializer
        //    equality is checked on the captures.
        Rule::inspect("field-decl", r"final (\w+) (\w+) = (\w+)\(\);", rewrite_field_decl),
        // 5.
        Rule::text(
            "build-method",
            r"Widget build\(BuildContext context\) \{",
            "m:build(ctx)->Widget",
        ),
        // 6.
        Rule::text("return-keyword", r"\breturn\b", "ret"),
    ];
    // 7. Widget abbreviations, whole-word, in table order.
    for abbrev in tables::WIDGETS.iter().filter(|a| !a.is_identity()) {
        rules.push(Rule::text(
            format!("widget-{}", abbrev.term),
            format!(r"\b{}\b", abbrev.term),
            abbrev.token,
        ));
    }
    // 8. Property abbreviations: the name immediately followed by a colon.
    for abbrev in tables::PROPERTIES {
        rules.push(Rule::text(
            format!("property-{}", abbrev.term),
            format!(r"\b{}:", abbrev.term),
            abbrev.token,
        ));
    }
    // 9.
    rules.push(Rule::text("build-context-param", "BuildContext context", "ctx"));
    rules.push(Rule::text("context-ident", r"\bcontext\b", "ctx"));
    // 10. Mid-line semicolons are untouched.
    rules.push(Rule::text("line-end-semicolon", r";\s*\n", "\n"));
    // 11. The numeric literal may carry a decimal point.
    rules.push(Rule::text(
        "edge-insets",
        r"EdgeInsets\.all\((\d+(?:\.\d+)?)\)",
        "pd:${1}",
    ));
    rules
}

/// Step 4 fires only when the initializer repeats the declared type with
/// empty-argument construction; anything else passes through unchanged.
fn rewrite_field_decl(caps: &Captures) -> String {
    let (ty, name, init) = (&caps[1], &caps[2], &caps[3]);
    if ty == init {
        format!("f:{}={}", name, init)
    } else {
        caps[0].to_string()
    }
}

/// Compress Dart/Flutter source into COON form.
///
/// Pure and synchronous; the same input always yields the same result. Every
/// declared strategy currently executes the `basic` pipeline (`auto` resolves
/// to it, the others fall back to it while keeping their tag), so this
/// function cannot fail. Use [`compress_named`] when the strategy arrives as
/// untrusted text.
pub fn compress(source: &str, strategy: Strategy) -> CompressionResult {
    let original_tokens = estimate_tokens(source);
    let compressed = apply_all(&COMPRESS_RULES, source);
    let compressed_tokens = estimate_tokens(&compressed);
    // Empty input would divide by zero; the ratio is defined as 0.0 there.
    let ratio = if original_tokens == 0 {
        0.0
    } else {
        1.0 - compressed_tokens as f64 / original_tokens as f64
    };
    CompressionResult {
        compressed,
        original_tokens,
        compressed_tokens,
        ratio,
        strategy_used: strategy.resolve(),
    }
}

/// String-keyed entry point for callers that receive the strategy by name
/// (CLI, conformance harnesses). Unknown names fail with
/// [`crate::CoonError::UnsupportedStrategy`].
pub fn compress_named(source: &str, strategy: &str) -> Result<CompressionResult> {
    Ok(compress(source, strategy.parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The rule order is the format contract; this pins all of it.
    #[test]
    fn rule_order_is_fixed() {
        let names: Vec<String> = COMPRESS_RULES.iter().map(|r| r.name().to_string()).collect();

        let mut expected: Vec<String> = [
            "collapse-blanks",
            "trim-line-edges",
            "strip-override",
            "class-decl",
            "field-decl",
            "build-method",
            "return-keyword",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        for abbrev in tables::WIDGETS.iter().filter(|a| !a.is_identity()) {
            expected.push(format!("widget-{}", abbrev.term));
        }
        for abbrev in tables::PROPERTIES {
            expected.push(format!("property-{}", abbrev.term));
        }
        for name in ["build-context-param", "context-ident", "line-end-semicolon", "edge-insets"] {
            expected.push(name.to_string());
        }

        assert_eq!(names, expected);
    }

    #[test]
    fn identity_widgets_produce_no_rules() {
        assert!(COMPRESS_RULES
            .iter()
            .all(|r| r.name() != "widget-Row" && r.name() != "widget-AppBar"));
    }
}
