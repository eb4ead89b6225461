//! Memoized parse + derive for conversation messages.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::message::Message;
use crate::segment::{Segment, parse_segments};
use crate::unit::{RenderUnits, derive_units};

/// Segments and units for one message, ready for display.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub segments: Vec<Segment>,
    pub units: RenderUnits,
}

impl RenderedMessage {
    /// Parse and derive `message` from scratch. Messages without text render empty.
    #[must_use]
    pub fn from_message(message: &Message) -> Self {
        let Some(text) = message.text.as_deref() else {
            return Self::default();
        };
        let segments = parse_segments(text);
        let units = derive_units(&message.id, &segments);
        Self { segments, units }
    }
}

#[derive(Clone, Debug)]
struct CacheEntry {
    text: Option<String>,
    rendered: Arc<RenderedMessage>,
}

/// Cache of [`RenderedMessage`] keyed by `(message id, message text)`.
///
/// A lookup for a known id with different text re-renders and replaces the
/// entry.
#[derive(Clone, Debug, Default)]
pub struct RenderCache {
    entries: HashMap<String, CacheEntry>,
}

impl RenderCache {
    pub fn get_or_render(&mut self, message: &Message) -> Arc<RenderedMessage> {
        if let Some(entry) = self.entries.get(&message.id) {
            if entry.text == message.text {
                return Arc::clone(&entry.rendered);
            }
        }

        let rendered = Arc::new(RenderedMessage::from_message(message));
        self.entries.insert(
            message.id.clone(),
            CacheEntry { text: message.text.clone(), rendered: Arc::clone(&rendered) },
        );
        rendered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
