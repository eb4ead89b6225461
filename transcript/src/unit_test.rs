use super::*;
use crate::segment::parse_segments;

fn units(message_id: &str, text: &str) -> RenderUnits {
    derive_units(message_id, &parse_segments(text))
}

// =============================================================
// Web family
// =============================================================

#[test]
fn html_fence_builds_web_unit() {
    let derived = units("m1", "```html\n<p>hi</p>```");
    assert_eq!(
        derived.web,
        Some(WebUnit { html: "<p>hi</p>".to_owned(), css: String::new(), js: String::new() })
    );
    assert!(derived.js.is_none());
}

#[test]
fn js_only_builds_script_unit() {
    let derived = units("m1", "hello ```js\nconsole.log(1)```");
    assert_eq!(derived.js, Some(JsUnit { js: "console.log(1)".to_owned() }));
    assert!(derived.web.is_none());
}

#[test]
fn html_and_javascript_never_yield_both_units() {
    let derived = units("m1", "```html\n<div id=a></div>\n```\n```javascript\nfoo()\n```");
    assert!(derived.js.is_none());
    let web = derived.web.expect("web unit");
    assert_eq!(web.js, "foo()");
}

#[test]
fn css_alone_still_builds_web_unit() {
    let derived = units("m1", "```css\nbody{}\n```");
    let web = derived.web.expect("web unit");
    assert_eq!(web.css, "body{}");
    assert!(web.html.is_empty());
}

#[test]
fn same_language_blocks_are_joined_with_blank_line() {
    let derived = units("m1", "```js\na()\n```\n```javascript\nb()\n```");
    assert_eq!(derived.js, Some(JsUnit { js: "a()\n\nb()".to_owned() }));
}

#[test]
fn empty_bodies_do_not_create_web_unit() {
    let derived = units("m1", "```html\n   \n```");
    assert!(derived.web.is_none());
    assert!(derived.is_empty());
}

// =============================================================
// JSON / Python
// =============================================================

#[test]
fn json_ids_use_per_language_occurrence_index() {
    let derived = units("abc", "```python\nprint(1)\n```\n```json\n{}\n```\ntexto\n```json\n[1]\n```");
    let ids: Vec<_> = derived.json.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["json-abc-0", "json-abc-1"]);
    assert_eq!(derived.json[1].json, "[1]");
}

#[test]
fn python_units_are_independent_of_web_units() {
    let derived = units("m9", "```html\n<p/>\n```\n```python\nx = 1\n```");
    assert!(derived.web.is_some());
    assert_eq!(derived.python, vec![PythonUnit { python: "x = 1".to_owned(), id: "python-m9-0".to_owned() }]);
}

#[test]
fn other_languages_yield_no_units() {
    let derived = units("m1", "```rust\nfn main() {}\n```\n```\nplain\n```");
    assert!(derived.is_empty());
    assert!(derived.ids().is_empty());
}

#[test]
fn no_code_yields_empty_units() {
    assert_eq!(units("m1", "só texto"), RenderUnits::default());
}

// =============================================================
// Stability
// =============================================================

#[test]
fn derivation_is_stable_across_runs() {
    let segments = parse_segments("```json\n{}\n```\n```python\nprint()\n```\n```json\n1\n```");
    assert_eq!(derive_units("m1", &segments), derive_units("m1", &segments));
}

#[test]
fn ids_follow_button_order() {
    let derived = units("m", "```js\nx()\n```\n```python\np\n```\n```json\n{}\n```");
    assert_eq!(derived.ids(), vec!["js", "json-m-0", "python-m-0"]);
}
