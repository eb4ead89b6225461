use super::*;

fn text(content: &str) -> Segment {
    Segment::Text { content: content.to_owned() }
}

fn code(lang: &str, content: &str) -> Segment {
    Segment::Code { content: content.to_owned(), lang: lang.to_owned() }
}

// =============================================================
// Basic shapes
// =============================================================

#[test]
fn empty_input_has_no_segments() {
    assert!(parse_segments("").is_empty());
}

#[test]
fn plain_text_is_kept_untrimmed() {
    assert_eq!(parse_segments("  olá mundo \n"), vec![text("  olá mundo \n")]);
}

#[test]
fn single_html_fence() {
    assert_eq!(parse_segments("```html\n<p>hi</p>```"), vec![code("html", "<p>hi</p>")]);
}

#[test]
fn leading_text_then_js_fence() {
    assert_eq!(
        parse_segments("hello ```js\nconsole.log(1)```"),
        vec![text("hello"), code("js", "console.log(1)")]
    );
}

#[test]
fn trailing_text_is_trimmed() {
    assert_eq!(
        parse_segments("```css\np { color: red; }\n```\n\n  tchau  "),
        vec![code("css", "p { color: red; }"), text("tchau")]
    );
}

#[test]
fn text_between_fences_is_kept_in_order() {
    let input = "Veja:\n```html\n<b>x</b>\n```\ne também\n```css\nb{}\n```";
    assert_eq!(
        parse_segments(input),
        vec![text("Veja:"), code("html", "<b>x</b>"), text("e também"), code("css", "b{}")]
    );
}

#[test]
fn blank_gaps_are_dropped() {
    let input = "```json\n{}\n```\n   \n```json\n[]\n```";
    assert_eq!(parse_segments(input), vec![code("json", "{}"), code("json", "[]")]);
}

// =============================================================
// Tags
// =============================================================

#[test]
fn untagged_fence_defaults_to_plaintext() {
    assert_eq!(parse_segments("```\nls -la\n```"), vec![code(DEFAULT_LANG, "ls -la")]);
}

#[test]
fn tag_is_lower_cased() {
    assert_eq!(parse_segments("```Python\nprint(1)\n```"), vec![code("python", "print(1)")]);
}

#[test]
fn tag_followed_by_space_is_not_a_fence() {
    let input = "```js code\nx\n```";
    assert_eq!(parse_segments(input), vec![text(input)]);
}

// =============================================================
// Unterminated and pathological fences
// =============================================================

#[test]
fn unterminated_fence_stays_plain_text() {
    let input = "antes ```python\nprint('x')";
    assert_eq!(parse_segments(input), vec![text(input)]);
}

#[test]
fn unterminated_fence_pairs_with_next_backticks() {
    let input = "```js\nlet a = 1;\nfim ``` resto";
    assert_eq!(parse_segments(input), vec![code("js", "let a = 1;\nfim"), text("resto")]);
}

#[test]
fn body_stops_at_first_closing_fence() {
    let input = "```txt\na```b```";
    assert_eq!(parse_segments(input), vec![code("txt", "a"), text("b```")]);
}

// =============================================================
// Properties
// =============================================================

#[test]
fn parsing_is_idempotent() {
    let input = "a\n```html\n<i>1</i>\n```\nb\n```\nraw\n```";
    assert_eq!(parse_segments(input), parse_segments(input));
}

#[test]
fn contents_reconstruct_balanced_input() {
    let input = "intro\n```html\n<p>x</p>\n```\nmeio\n```\nplain\n```\nfim";
    let rebuilt: String = parse_segments(input)
        .iter()
        .map(|segment| match segment {
            Segment::Text { content } => format!("{content}\n"),
            Segment::Code { content, lang } if lang == DEFAULT_LANG => format!("```\n{content}\n```\n"),
            Segment::Code { content, lang } => format!("```{lang}\n{content}\n```\n"),
        })
        .collect();
    assert_eq!(rebuilt.trim_end(), input);
}

#[test]
fn segment_accessors() {
    let segment = code("json", "{}");
    assert_eq!(segment.content(), "{}");
    assert_eq!(segment.lang(), Some("json"));
    assert_eq!(text("x").lang(), None);
}
