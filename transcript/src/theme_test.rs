use super::*;

#[test]
fn default_theme_is_cyberpunk() {
    assert_eq!(Theme::default(), Theme::Cyberpunk);
}

#[test]
fn ids_round_trip_through_from_id() {
    for theme in Theme::ALL {
        assert_eq!(Theme::from_id(theme.id()), Some(theme));
    }
}

#[test]
fn from_stored_falls_back_on_unknown_or_missing() {
    assert_eq!(Theme::from_stored(Some("matrix")), Theme::Matrix);
    assert_eq!(Theme::from_stored(Some("vaporwave")), Theme::Cyberpunk);
    assert_eq!(Theme::from_stored(None), Theme::Cyberpunk);
}

#[test]
fn css_class_prefixes_id() {
    assert_eq!(Theme::Natal.css_class(), "theme-natal");
}

#[test]
fn only_comic_theme_uses_ink_outline() {
    let outlined: Vec<_> = Theme::ALL.into_iter().filter(|t| t.uses_ink_outline()).collect();
    assert_eq!(outlined, vec![Theme::Hq]);
}

#[test]
fn every_theme_has_copy() {
    for theme in Theme::ALL {
        assert!(!theme.name().is_empty());
        assert!(!theme.description().is_empty());
        assert!(!theme.visual_elements().is_empty());
        assert!(!theme.applications().is_empty());
    }
}
