//! Theme persistence and application.
//!
//! Reads the saved theme id from `localStorage`, applies it as the
//! `theme-<id>` class on `<html>`, and writes changes back. Unknown or
//! missing values fall back to the default theme.

#[cfg(test)]
#[path = "theme_storage_test.rs"]
mod theme_storage_test;

use transcript::Theme;
#[cfg(feature = "csr")]
use transcript::theme::STORAGE_KEY;

/// Read the saved theme, defaulting when nothing usable is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        Theme::from_stored(stored.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Set the theme class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            el.set_class_name(&theme.css_class());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` and persist it.
pub fn save(theme: Theme) {
    apply(theme);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, theme.id()).is_err() {
                log::warn!("failed to persist theme {}", theme.id());
            }
        }
    }
}
