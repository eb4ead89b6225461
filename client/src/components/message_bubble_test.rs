use super::*;

#[test]
fn web_and_js_labels_ignore_index() {
    assert_eq!(toggle_label(ToggleKind::Web, 3, false), "Renderizar Web");
    assert_eq!(toggle_label(ToggleKind::Web, 0, true), "Fechar Web");
    assert_eq!(toggle_label(ToggleKind::Js, 0, false), "Executar JS");
    assert_eq!(toggle_label(ToggleKind::Js, 0, true), "Fechar JS");
}

#[test]
fn json_and_python_labels_are_one_based() {
    assert_eq!(toggle_label(ToggleKind::Json, 0, false), "Renderizar JSON 1");
    assert_eq!(toggle_label(ToggleKind::Json, 1, true), "Fechar JSON 2");
    assert_eq!(toggle_label(ToggleKind::Python, 0, false), "Executar Python 1");
    assert_eq!(toggle_label(ToggleKind::Python, 2, true), "Fechar Python 3");
}
