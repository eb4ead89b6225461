use super::*;

#[test]
fn invalid_json_reports_parse_error() {
    let err = JsonPreview::parse("{bad}").expect_err("should fail");
    assert_eq!(err.to_string(), "JSON inválido.");
    assert!(!err.detail.is_empty());
}

#[test]
fn default_view_mode_is_tree() {
    assert_eq!(JsonViewMode::default(), JsonViewMode::Tree);
}

#[test]
fn raw_view_is_two_space_pretty_print_in_source_order() {
    let preview = JsonPreview::parse(r#"{"z":1,"a":[true,null]}"#).expect("valid");
    assert_eq!(preview.raw(), "{\n  \"z\": 1,\n  \"a\": [\n    true,\n    null\n  ]\n}");
}

#[test]
fn tree_rows_flatten_nested_values() {
    let preview = JsonPreview::parse(r#"{"nome":"Jack","tags":["a"],"vazio":{}}"#).expect("valid");
    let rows = preview.rows();

    let summary: Vec<_> = rows
        .iter()
        .map(|r| (r.depth, r.key.as_deref(), r.text.as_str(), r.trailing_comma))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, None, "{", false),
            (1, Some("nome"), "\"Jack\"", true),
            (1, Some("tags"), "[", false),
            (2, None, "\"a\"", false),
            (1, None, "]", true),
            (1, Some("vazio"), "{}", false),
            (0, None, "}", false),
        ]
    );
    assert_eq!(rows[1].token, JsonToken::String);
}

#[test]
fn scalar_document_is_a_single_row() {
    let rows = JsonPreview::parse("42").expect("valid").rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].token, JsonToken::Number);
    assert_eq!(rows[0].text, "42");
}
