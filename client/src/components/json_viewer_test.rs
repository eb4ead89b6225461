use super::*;

#[test]
fn token_class_groups_punctuation() {
    for token in [JsonToken::ObjectOpen, JsonToken::ObjectClose, JsonToken::ArrayOpen, JsonToken::ArrayClose] {
        assert_eq!(token_class(token), "json-row__punct");
    }
    assert_eq!(token_class(JsonToken::String), "json-row__string");
    assert_eq!(token_class(JsonToken::Null), "json-row__null");
}

#[test]
fn row_indent_scales_with_depth() {
    assert_eq!(row_indent(0), "padding-left: 0em");
    assert_eq!(row_indent(3), "padding-left: 6em");
}
