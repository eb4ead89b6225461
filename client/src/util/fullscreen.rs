//! Fullscreen toggling for preview panels.

use leptos::prelude::*;

pub const ENTER_TITLE: &str = "Tela Inteira";
pub const EXIT_TITLE: &str = "Sair da Tela Inteira";

/// Enter fullscreen on `target`, or leave it when something is already
/// fullscreen.
pub fn toggle(target: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if doc.fullscreen_element().is_some() {
            doc.exit_fullscreen();
        } else if let Some(el) = target.get_untracked() {
            if let Err(e) = el.request_fullscreen() {
                log::error!("error attempting to enable full-screen mode: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
    }
}

/// Whether any element is currently fullscreen.
pub fn is_active() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.fullscreen_element())
            .is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Tooltip for the fullscreen button.
pub fn button_title(active: bool) -> &'static str {
    if active { EXIT_TITLE } else { ENTER_TITLE }
}
