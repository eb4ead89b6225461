//! # client
//!
//! Leptos + WASM front end for the Jack Brito GPT chat.
//!
//! Pages are a single chat window under a themed header. Message parsing,
//! render units, and sandbox documents come from `transcript`; remote calls
//! go through `gemini`. Everything that touches the browser is gated behind
//! the `csr` feature so state and helpers stay testable natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
