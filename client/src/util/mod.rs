//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clipboard, fullscreen,
//! the Pyodide runtime) from component logic. Each helper no-ops outside the
//! `csr` build.

pub mod clipboard;
pub mod fullscreen;
pub mod pyodide;
pub mod theme_storage;
