use super::*;

// =============================================================
// UiState
// =============================================================

#[test]
fn default_theme_is_cyberpunk_with_modal_closed() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Cyberpunk);
    assert!(!state.theme_modal_open);
}

#[test]
fn select_theme_closes_modal() {
    let mut state = UiState { theme_modal_open: true, ..UiState::default() };
    state.select_theme(Theme::Matrix);
    assert_eq!(state.theme, Theme::Matrix);
    assert!(!state.theme_modal_open);
}

#[test]
fn header_class_uses_ink_outline_only_for_hq() {
    assert_eq!(UiState::with_theme(Theme::Hq).header_class(), "app-header app-header--ink");
    for theme in Theme::ALL.into_iter().filter(|t| *t != Theme::Hq) {
        assert_eq!(UiState::with_theme(theme).header_class(), "app-header app-header--glow");
    }
}
