//! Chat window state: conversation log, open render panels, render cache,
//! and the image slot that routes follow-ups to edits.
//!
//! DESIGN
//! ======
//! One struct behind one `RwSignal` so a send, its reply, and the scroll
//! trigger change together. The render cache is updated untracked from
//! views; it never changes what a message renders to, only how often it is
//! parsed.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::sync::Arc;

use gemini::Exchange;
use transcript::{Conversation, Message, RenderCache, RenderedMessage, SendRejected, ToggleState};

#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversation: Conversation,
    pub toggles: ToggleState,
    /// Data URI of the last generated or edited image.
    pub last_image: Option<String>,
    /// Inline error under the input box.
    pub input_error: Option<SendRejected>,
    renders: RenderCache,
}

impl ChatState {
    /// Validate and append a user message.
    ///
    /// Returns the text to send and the image the request should edit, if any.
    /// A rejection is stored in `input_error` for display.
    pub fn submit(&mut self, text: &str) -> Option<(String, Option<String>)> {
        match self.conversation.begin_send(text) {
            Ok(text) => {
                self.input_error = None;
                Some((text, self.last_image.clone()))
            }
            Err(SendRejected::Busy) => None,
            Err(rejected) => {
                self.input_error = Some(rejected);
                None
            }
        }
    }

    /// Fold the assistant's answer for `user_text` into the log.
    pub fn receive(&mut self, exchange: Exchange, user_text: &str) {
        self.conversation.append_ai(&exchange.response, user_text);
        self.last_image = exchange.last_image;
    }

    /// Typing non-blank text clears a stale validation error.
    pub fn edit_input(&mut self, text: &str) {
        if self.input_error.is_some() && !text.trim().is_empty() {
            self.input_error = None;
        }
    }

    /// Ids of the logged messages, oldest first. Drives the keyed list.
    #[must_use]
    pub fn message_ids(&self) -> Vec<String> {
        self.conversation.messages().iter().map(|m| m.id.clone()).collect()
    }

    #[must_use]
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.conversation.messages().iter().find(|m| m.id == id)
    }

    pub fn toggle(&mut self, message_id: &str, unit_id: &str) -> bool {
        self.toggles.toggle(message_id, unit_id)
    }

    #[must_use]
    pub fn is_open(&self, message_id: &str, unit_id: &str) -> bool {
        self.toggles.is_open(message_id, unit_id)
    }

    pub fn rendered(&mut self, message: &Message) -> Arc<RenderedMessage> {
        self.renders.get_or_render(message)
    }
}
