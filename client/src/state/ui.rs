//! Local UI chrome state: active theme and the theme picker modal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use transcript::Theme;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub theme_modal_open: bool,
}

impl UiState {
    #[must_use]
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, theme_modal_open: false }
    }

    /// Switch theme and close the picker.
    pub fn select_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.theme_modal_open = false;
    }

    /// Header shadow variant. The comic theme uses a hard ink outline
    /// instead of a glow.
    #[must_use]
    pub fn header_class(&self) -> &'static str {
        if self.theme.uses_ink_outline() { "app-header app-header--ink" } else { "app-header app-header--glow" }
    }
}
