//! Clipboard writes for the code block copy button.

/// How long the "Copiado!" confirmation stays up.
pub const COPIED_RESET_MS: u32 = 2_000;

/// Write `text` to the system clipboard.
///
/// Resolves to `true` once the browser accepted the write.
pub async fn write_text(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text)).await {
            Ok(_) => true,
            Err(e) => {
                log::error!("failed to copy text: {e:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}
