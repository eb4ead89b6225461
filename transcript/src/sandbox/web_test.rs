use super::*;

#[test]
fn web_document_embeds_all_three_parts() {
    let unit = WebUnit { html: "<p id=x>oi</p>".to_owned(), css: "p { color: red; }".to_owned(), js: "go()".to_owned() };
    let doc = unit.preview_document();
    assert!(doc.contains("<p id=x>oi</p>"));
    assert!(doc.contains("p { color: red; }"));
    assert!(doc.contains("go()"));
}

#[test]
fn web_document_does_not_capture_console() {
    let doc = preview_document("<b>x</b>", "", "console.log(1)");
    assert!(!doc.contains("originalConsole"));
    assert!(doc.contains("var(--font-secondary)"));
}

#[test]
fn script_only_document_captures_console() {
    let doc = JsUnit { js: "console.log(1)".to_owned() }.preview_document();
    assert!(doc.contains("originalConsole"));
    assert!(doc.contains("window.console.warn"));
    assert!(doc.contains("var(--font-code)"));
}

#[test]
fn css_only_document_is_not_script_only() {
    let doc = preview_document("", "body{}", "");
    assert!(!doc.contains("originalConsole"));
}

#[test]
fn user_script_is_wrapped_in_try_catch() {
    let doc = preview_document("", "", "throw new Error('x')");
    let try_at = doc.find("try {").expect("try block");
    let script_at = doc.find("throw new Error('x')").expect("user script");
    assert!(try_at < script_at);
    assert!(doc.contains("console.error(e);"));
}

#[test]
fn iframe_sandbox_withholds_same_origin() {
    assert!(IFRAME_SANDBOX.contains("allow-scripts"));
    assert!(!IFRAME_SANDBOX.contains("allow-same-origin"));
}
