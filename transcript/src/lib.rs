//! Chat transcript model and render pipeline shared by `client` and `cli`.
//!
//! This crate owns everything about a conversation that does not touch the
//! network or the browser: the message model, splitting AI replies into
//! text and fenced code, grouping code into runnable units, per-message
//! toggle state, and the inputs handed to the preview sandboxes.

pub mod conversation;
pub mod message;
pub mod render;
pub mod sandbox;
pub mod segment;
pub mod theme;
pub mod toggle;
pub mod unit;

pub use conversation::{Conversation, SendRejected};
pub use message::{AiResponse, GroundingSource, Message, Sender};
pub use render::{RenderCache, RenderedMessage};
pub use segment::{Segment, parse_segments};
pub use theme::Theme;
pub use toggle::ToggleState;
pub use unit::{JsUnit, JsonUnit, PythonUnit, RenderUnits, WebUnit, derive_units};

/// Command prefix that turns a message into an image-generation request.
pub const IMAGE_COMMAND: &str = "/imagem";
