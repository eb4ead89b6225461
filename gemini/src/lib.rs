//! Gemini: hosted chat and image client for the assistant.
//!
//! DESIGN
//! ======
//! [`GeminiClient`] is a thin HTTP wrapper over the `generateContent` and
//! Imagen `predict` endpoints. [`Assistant`] sits on top of any [`GenAi`]
//! backend and owns the product behavior: routing `/imagem` commands and
//! follow-up edits, keeping the chat session, and turning every failure
//! into one user-facing message. The last generated image is passed in
//! and handed back on each call instead of living in a global.

pub mod assistant;
pub mod config;
pub mod http;
pub mod prompt;
pub mod types;

pub use assistant::{Assistant, Exchange, FailureKind, Route, route};
pub use config::GeminiConfig;
pub use http::GeminiClient;
pub use types::{ChatReply, Content, GeminiError, GenAi, InlineData, Part};
