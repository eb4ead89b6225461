#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_default_outside_browser() {
    assert_eq!(read_preference(), Theme::Cyberpunk);
}

#[test]
fn apply_and_save_are_callable() {
    for theme in Theme::ALL {
        apply(theme);
        save(theme);
    }
}
