//! Conversation message model and the tagged remote response.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// A web citation attached to a grounded AI reply.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

impl GroundingSource {
    /// Link text shown for the source: the title, or the URI when untitled.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.title.is_empty() { &self.uri } else { &self.title }
    }
}

/// A single entry in the conversation.
///
/// Messages are immutable once appended to a [`crate::Conversation`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub sender: Sender,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<GroundingSource>,
}

impl Message {
    /// Build a plain text message.
    #[must_use]
    pub fn text(id: impl Into<String>, sender: Sender, text: impl Into<String>) -> Self {
        Self { id: id.into(), text: Some(text.into()), image_url: None, sender, sources: Vec::new() }
    }

    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Outcome of one call to the remote chat/image service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AiResponse {
    /// A chat reply, possibly grounded in web sources.
    Text {
        text: String,
        #[serde(default)]
        sources: Vec<GroundingSource>,
    },
    /// A generated or edited image as a data URI, with an optional caption.
    Image {
        image_url: String,
        #[serde(default)]
        text: Option<String>,
    },
    /// A user-facing failure message.
    Error { message: String },
}

impl AiResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
