use super::*;
use transcript::{GroundingSource, Sender};

fn rendered(id: &str, text: &str) -> (Message, RenderedMessage) {
    let message = Message::text(id, Sender::Ai, text);
    let rendered = RenderedMessage::from_message(&message);
    (message, rendered)
}

// =============================================================================
// format_body
// =============================================================================

#[test]
fn body_fences_code_with_language() {
    let (_, r) = rendered("m", "Veja:\n```python\nprint(1)\n```\nPronto.");
    assert_eq!(format_body(&r), "Veja:\n--- python ---\nprint(1)\n---\nPronto.");
}

#[test]
fn body_skips_empty_code_blocks() {
    let (_, r) = rendered("m", "a\n```js\n\n```");
    assert_eq!(format_body(&r), "a");
}

// =============================================================================
// describe_units
// =============================================================================

#[test]
fn units_list_web_then_json_then_python() {
    let (_, r) = rendered(
        "m1",
        "```html\n<p>x</p>\n```\n```json\n{}\n```\n```python\nprint(2)\n```",
    );
    assert_eq!(
        describe_units(&r.units),
        vec![
            "web: html 8B, css 0B, js 0B".to_owned(),
            "json-m1-0: 2B".to_owned(),
            "python-m1-0: 8B".to_owned(),
        ]
    );
}

#[test]
fn units_empty_for_plain_text() {
    let (_, r) = rendered("m", "só texto");
    assert!(describe_units(&r.units).is_empty());
}

// =============================================================================
// format_reply
// =============================================================================

#[test]
fn reply_lists_sources_with_labels() {
    let (mut message, r) = rendered("m", "Resposta");
    message.sources = vec![
        GroundingSource { uri: "https://a.test".into(), title: "A".into() },
        GroundingSource { uri: "https://b.test".into(), title: String::new() },
    ];
    assert_eq!(
        format_reply(&message, &r),
        "Resposta\nFontes:\n  - A <https://a.test>\n  - https://b.test <https://b.test>"
    );
}

#[test]
fn reply_notes_image_mime_type() {
    let (mut message, r) = rendered("m", "Legenda");
    message.image_url = Some("data:image/jpeg;base64,AAAA".into());
    assert_eq!(format_reply(&message, &r), "Legenda\n[imagem image/jpeg, 27 bytes]");
}

// =============================================================================
// json_tree
// =============================================================================

#[test]
fn json_tree_indents_nested_values() {
    let preview = JsonPreview::parse(r#"{"a":[1,true],"b":null}"#).unwrap();
    assert_eq!(json_tree(&preview), "{\n  \"a\": [\n    1,\n    true\n  ],\n  \"b\": null\n}");
}
