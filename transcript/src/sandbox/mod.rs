//! Inputs and state for the preview sandboxes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser does the actual executing: an iframe for web units and
//! Pyodide for Python. This module builds what those hosts consume and
//! tracks what they report back, so it stays testable without a browser.

pub mod json;
pub mod python;
pub mod web;

pub use json::{JsonPreview, JsonPreviewError, JsonRow, JsonViewMode};
pub use python::{PythonOutput, PythonPhase, PythonRun};
pub use web::{IFRAME_SANDBOX, preview_document};
