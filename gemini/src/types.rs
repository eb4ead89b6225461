//! Provider types shared by the HTTP client and the assistant.

use serde::{Deserialize, Serialize};
use transcript::GroundingSource;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by Gemini client operations.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request could not be sent or its body not read.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The API answered with a non-success status.
    #[error("API response error: status {status}: {message}")]
    ApiResponse { status: u16, message: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CONTENT
// =============================================================================

/// One turn of a conversation as the API sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: &str, text: impl Into<String>) -> Self {
        Self { role: Some(role.to_owned()), parts: vec![Part::text(text)] }
    }
}

/// A piece of a turn: text, inline binary data, or both absent for parts we
/// do not use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    /// Set on model reasoning parts, which are never shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), ..Self::default() }
    }

    #[must_use]
    pub fn inline(data: InlineData) -> Self {
        Self { inline_data: Some(data), ..Self::default() }
    }
}

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl InlineData {
    /// Encode as a `data:` URI suitable for an `<img src>`.
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Split an image `data:` URI back into MIME type and payload.
    ///
    /// Only `data:image/<subtype>;base64,<payload>` is accepted, where the
    /// subtype is ASCII alphanumerics, `-` or `.`.
    #[must_use]
    pub fn from_data_uri(uri: &str) -> Option<Self> {
        let rest = uri.strip_prefix("data:")?;
        let (mime_type, data) = rest.split_once(";base64,")?;
        let subtype = mime_type.strip_prefix("image/")?;
        let valid_subtype = !subtype.is_empty()
            && subtype
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.');
        valid_subtype.then(|| Self { mime_type: mime_type.to_owned(), data: data.to_owned() })
    }
}

/// Text reply from a chat turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub sources: Vec<GroundingSource>,
}

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// The three remote operations the assistant needs. Enables mocking in tests.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait GenAi {
    /// Continue a chat whose full history, newest user turn last, is `history`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeminiError`] if the request fails or the reply is malformed.
    async fn chat(&self, history: &[Content]) -> Result<ChatReply, GeminiError>;

    /// Generate one image for `prompt`. `Ok(None)` when the API returned no image.
    ///
    /// # Errors
    ///
    /// Returns a [`GeminiError`] if the request fails or the reply is malformed.
    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineData>, GeminiError>;

    /// Apply `instruction` to `image`. `Ok(None)` when the API returned no image.
    ///
    /// # Errors
    ///
    /// Returns a [`GeminiError`] if the request fails or the reply is malformed.
    async fn edit_image(&self, image: &InlineData, instruction: &str) -> Result<Option<InlineData>, GeminiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
