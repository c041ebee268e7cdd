use coon_core::decompress;

// ============================================================================
// Token expansion
// ============================================================================

#[test]
fn pd_token_expands_to_edge_insets() {
    assert_eq!(decompress("pd:16.0"), "EdgeInsets.all(16.0);");
    assert_eq!(decompress("pd:12"), "EdgeInsets.all(12);");
}

#[test]
fn ctx_expands_whole_word_only() {
    assert_eq!(decompress("ctx"), "context;");
    // not a whole-word `ctx`; only the separator heuristic applies
    assert_eq!(decompress("ctxt"), "ctxt;");
}

#[test]
fn widget_tokens_expand_to_canonical_names() {
    assert_eq!(decompress("Scf(bd: Txt('Hi'))"), "Scaffold(body: Text('Hi'));");
}

#[test]
fn ret_expands_to_return() {
    assert_eq!(decompress("ret Txt('a')"), "return Text('a');");
}

#[test]
fn field_marker_expands_to_full_declaration() {
    assert_eq!(
        decompress("f:email=TextEditingController"),
        "final TextEditingController email = TextEditingController();"
    );
}

// ============================================================================
// Shared tokens — accepted ambiguity
// ============================================================================

#[test]
fn shared_property_tokens_expand_to_the_last_table_entry() {
    // children/child both compress to `ch:`; child is the canonical expansion
    assert_eq!(decompress("ch: [Txt('a')]"), "child: [Text('a')];");
    // text/title both compress to `t:`; title wins
    assert_eq!(decompress("t: 'x'"), "title: 'x';");
}

#[test]
fn class_marker_is_consumed_by_the_controller_token() {
    // The property token `c:` overlaps the class marker and runs first, so
    // the class-decl rule never sees its pattern. Names survive either way.
    assert_eq!(decompress("c:MyWidget<StatelessWidget>"), "controller:MyWidget<StatelessWidget>;");
}

#[test]
fn build_marker_is_shadowed_by_ctx_expansion() {
    // `ctx` expands before the build-method rule looks for `m:build(ctx)`,
    // so the marker survives with its argument spelled out.
    assert_eq!(decompress("m:build(ctx)->Widget"), "m:build(context)->Widget");
}

// ============================================================================
// Statement-terminator reinsertion
// ============================================================================

#[test]
fn terminated_lines_are_left_alone() {
    assert_eq!(decompress("a;\nb}\nc{\nd,"), "a;\nb}\nc{\nd,");
}

#[test]
fn comment_and_annotation_lines_are_left_alone() {
    assert_eq!(decompress("// note\n@deprecated"), "// note\n@deprecated");
}

#[test]
fn bare_expression_lines_gain_a_separator() {
    assert_eq!(decompress("foo(bar)"), "foo(bar);");
}

#[test]
fn multi_line_expressions_misfire_by_design() {
    // Line-local classifier, no cross-line lookahead: a call split over
    // several lines picks up spurious separators.
    assert_eq!(decompress("foo(\n1\n)"), "foo(;\n1;\n);");
}

// ============================================================================
// Totality
// ============================================================================

#[test]
fn empty_input_stays_empty() {
    assert_eq!(decompress(""), "");
}

#[test]
fn tokenless_text_passes_through_the_rewrites() {
    assert_eq!(decompress("hello world"), "hello world;");
    assert_eq!(decompress("int main() {\n}"), "int main() {\n}");
}
