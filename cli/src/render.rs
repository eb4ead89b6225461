//! Plain-text rendering of messages, render units, and JSON trees for the
//! terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use transcript::sandbox::JsonPreview;
use transcript::{Message, RenderUnits, RenderedMessage, Segment};

/// Body of a message as the terminal shows it: text segments verbatim, code
/// segments fenced with their language.
pub fn format_body(rendered: &RenderedMessage) -> String {
    let mut out = String::new();
    for segment in &rendered.segments {
        if segment.content().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        match segment {
            Segment::Text { content } => out.push_str(content),
            Segment::Code { content, lang } => {
                let _ = write!(out, "--- {lang} ---\n{content}\n---");
            }
        }
    }
    out
}

/// One line per renderable unit, in toggle order.
pub fn describe_units(units: &RenderUnits) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(web) = &units.web {
        lines.push(format!(
            "web: html {}B, css {}B, js {}B",
            web.html.len(),
            web.css.len(),
            web.js.len()
        ));
    }
    if let Some(js) = &units.js {
        lines.push(format!("js: {}B", js.js.len()));
    }
    lines.extend(units.json.iter().map(|u| format!("{}: {}B", u.id, u.json.len())));
    lines.extend(units.python.iter().map(|u| format!("{}: {}B", u.id, u.python.len())));
    lines
}

/// Full reply block: body, image note, sources, and units.
pub fn format_reply(message: &Message, rendered: &RenderedMessage) -> String {
    let mut out = format_body(rendered);

    if let Some(url) = &message.image_url {
        let mime = url
            .strip_prefix("data:")
            .and_then(|rest| rest.split(';').next())
            .unwrap_or("image");
        let _ = write!(out, "\n[imagem {mime}, {} bytes]", url.len());
    }

    if !message.sources.is_empty() {
        out.push_str("\nFontes:");
        for source in &message.sources {
            let _ = write!(out, "\n  - {} <{}>", source.label(), source.uri);
        }
    }

    let units = describe_units(&rendered.units);
    if !units.is_empty() {
        out.push_str("\nUnidades:");
        for line in units {
            let _ = write!(out, "\n  - {line}");
        }
    }
    out
}

/// Indented tree view of a parsed JSON unit.
pub fn json_tree(preview: &JsonPreview) -> String {
    preview
        .rows()
        .iter()
        .map(|row| {
            let indent = "  ".repeat(row.depth);
            let key = row.key.as_ref().map(|k| format!("\"{k}\": ")).unwrap_or_default();
            let comma = if row.trailing_comma { "," } else { "" };
            format!("{indent}{key}{}{comma}", row.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
