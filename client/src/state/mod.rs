//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `ui`) so components depend on small
//! focused models provided as `RwSignal` contexts by [`crate::app::App`].

pub mod chat;
pub mod ui;
