use super::*;

// =========================================================================
// InlineData data URIs
// =========================================================================

#[test]
fn data_uri_round_trip() {
    let image = InlineData { mime_type: "image/png".into(), data: "iVBOR".into() };
    let uri = image.data_uri();
    assert_eq!(uri, "data:image/png;base64,iVBOR");
    assert_eq!(InlineData::from_data_uri(&uri), Some(image));
}

#[test]
fn from_data_uri_accepts_dotted_subtypes() {
    let parsed = InlineData::from_data_uri("data:image/vnd.microsoft-icon;base64,AAA").unwrap();
    assert_eq!(parsed.mime_type, "image/vnd.microsoft-icon");
    assert_eq!(parsed.data, "AAA");
}

#[test]
fn from_data_uri_rejects_non_images() {
    assert!(InlineData::from_data_uri("data:text/plain;base64,AAA").is_none());
}

#[test]
fn from_data_uri_rejects_plain_urls() {
    assert!(InlineData::from_data_uri("https://example.test/cat.jpg").is_none());
    assert!(InlineData::from_data_uri("data:image/png,AAA").is_none());
    assert!(InlineData::from_data_uri("data:image/;base64,AAA").is_none());
}

// =========================================================================
// Wire serialization
// =========================================================================

#[test]
fn content_serializes_camel_case_and_skips_empty_fields() {
    let content = Content {
        role: Some("user".into()),
        parts: vec![
            Part::inline(InlineData { mime_type: "image/jpeg".into(), data: "AA".into() }),
            Part::text("mais azul"),
        ],
    };
    let value = serde_json::to_value(&content).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "role": "user",
            "parts": [
                { "inlineData": { "mimeType": "image/jpeg", "data": "AA" } },
                { "text": "mais azul" }
            ]
        })
    );
}

#[test]
fn content_text_helper_sets_role() {
    let content = Content::text("model", "oi");
    assert_eq!(content.role.as_deref(), Some("model"));
    assert_eq!(content.parts[0].text.as_deref(), Some("oi"));
}

#[test]
fn api_response_error_display_includes_message() {
    let err = GeminiError::ApiResponse { status: 404, message: "Requested entity was not found.".into() };
    assert_eq!(err.to_string(), "API response error: status 404: Requested entity was not found.");
}
