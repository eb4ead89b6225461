//! Ordered conversation history plus the in-flight flag.
//!
//! DESIGN
//! ======
//! The store is plain data so the Leptos client can keep it in a signal and
//! the CLI can own it directly. `loading` doubles as the send gate: while a
//! request is outstanding [`Conversation::begin_send`] refuses new input.
//! `scroll_seq` increments on every change the view should scroll to.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::IMAGE_COMMAND;
use crate::message::{AiResponse, Message, Sender};

/// Id of the greeting message every conversation starts with.
pub const GREETING_ID: &str = "initial";
pub const GREETING_TEXT: &str = "Olá! Eu sou a Jack Brito GPT. Como posso te ajudar hoje?";

pub const EMPTY_REPLY_TEXT: &str = "Não recebi uma resposta válida.";
pub const UNEXPECTED_ERROR_TEXT: &str =
    "Desculpe, ocorreu um erro inesperado ao processar sua solicitação. Tente novamente.";
pub const EDITED_IMAGE_CAPTION: &str = "Aqui está a imagem que editei para você!";

/// Why a send was refused before reaching the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendRejected {
    #[error("A mensagem não pode estar vazia.")]
    Empty,
    #[error("Aguarde a resposta anterior.")]
    Busy,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
    loading: bool,
    scroll_seq: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Start a conversation holding only the greeting.
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: vec![Message::text(GREETING_ID, Sender::Ai, GREETING_TEXT)],
            loading: false,
            scroll_seq: 0,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn scroll_seq(&self) -> u64 {
        self.scroll_seq
    }

    /// Validate `text`, append it as a user message and mark a request in flight.
    ///
    /// Returns the text to send.
    ///
    /// # Errors
    ///
    /// [`SendRejected::Busy`] while a previous request is outstanding,
    /// [`SendRejected::Empty`] for blank input.
    pub fn begin_send(&mut self, text: &str) -> Result<String, SendRejected> {
        if self.loading {
            return Err(SendRejected::Busy);
        }
        if text.trim().is_empty() {
            return Err(SendRejected::Empty);
        }
        self.append_user(text);
        self.set_loading(true);
        Ok(text.to_owned())
    }

    pub fn append_user(&mut self, text: &str) -> &Message {
        self.push(Message::text(new_id(), Sender::User, text))
    }

    /// Map a remote response into exactly one AI message and clear `loading`.
    ///
    /// `user_text` is the message that triggered the request; it picks the
    /// default caption for images that arrive without one.
    pub fn append_ai(&mut self, response: &AiResponse, user_text: &str) -> &Message {
        let message = match response {
            AiResponse::Error { message } => Message::text(new_id(), Sender::Ai, message.clone()),
            AiResponse::Image { image_url, text } => {
                let caption = text
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| default_image_caption(user_text));
                Message {
                    id: new_id(),
                    text: Some(caption),
                    image_url: Some(image_url.clone()),
                    sender: Sender::Ai,
                    sources: Vec::new(),
                }
            }
            AiResponse::Text { text, sources } => {
                let text = if text.is_empty() { EMPTY_REPLY_TEXT.to_owned() } else { text.clone() };
                Message { id: new_id(), text: Some(text), image_url: None, sender: Sender::Ai, sources: sources.clone() }
            }
        };
        self.loading = false;
        self.push(message)
    }

    /// Append the generic failure reply for errors that escaped the remote client.
    pub fn fail_unexpected(&mut self) -> &Message {
        self.loading = false;
        self.push(Message::text(new_id(), Sender::Ai, UNEXPECTED_ERROR_TEXT))
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.scroll_seq += 1;
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        self.scroll_seq += 1;
        let last = self.messages.len() - 1;
        &self.messages[last]
    }
}

/// Caption used when an image reply carries no text of its own.
#[must_use]
pub fn default_image_caption(user_text: &str) -> String {
    match user_text.strip_prefix(IMAGE_COMMAND) {
        Some(prompt) => format!("Aqui está a imagem que criei para você com o prompt: \"{}\"", prompt.trim()),
        None => EDITED_IMAGE_CAPTION.to_owned(),
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
