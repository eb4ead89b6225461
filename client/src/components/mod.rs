//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface and sandbox panels while reading and
//! writing shared state from Leptos context providers.

pub mod chat_window;
pub mod code_block;
pub mod code_preview;
pub mod json_viewer;
pub mod message_bubble;
pub mod python_panel;
pub mod theme_selector;
pub mod user_input;
