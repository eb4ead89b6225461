//! Group a message's code segments into runnable units.
//!
//! `html`/`css`/`js` fences merge into one web preview, or a script-only
//! unit when there is no markup or styling. Every `json` and `python`
//! fence becomes its own unit with an id that stays the same across
//! re-renders of the same message, so toggle state keyed by id survives.

#[cfg(test)]
#[path = "unit_test.rs"]
mod unit_test;

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Toggle id of the combined web unit.
pub const WEB_UNIT_ID: &str = "web";
/// Toggle id of the script-only unit.
pub const JS_UNIT_ID: &str = "js";

const BLOCK_SEPARATOR: &str = "\n\n";

/// HTML, CSS and JS rendered together in one preview document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebUnit {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// JavaScript with no markup, run with console capture.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsUnit {
    pub js: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonUnit {
    pub json: String,
    pub id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PythonUnit {
    pub python: String,
    pub id: String,
}

/// Every unit derived from one message.
///
/// `web` and `js` are never both present.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderUnits {
    pub web: Option<WebUnit>,
    pub js: Option<JsUnit>,
    pub json: Vec<JsonUnit>,
    pub python: Vec<PythonUnit>,
}

impl RenderUnits {
    /// `true` when the message offers nothing to run or preview.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.web.is_none() && self.js.is_none() && self.json.is_empty() && self.python.is_empty()
    }

    /// All toggle ids in button order: web or js first, then json, then python.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        if self.web.is_some() {
            ids.push(WEB_UNIT_ID);
        }
        if self.js.is_some() {
            ids.push(JS_UNIT_ID);
        }
        ids.extend(self.json.iter().map(|unit| unit.id.as_str()));
        ids.extend(self.python.iter().map(|unit| unit.id.as_str()));
        ids
    }
}

/// Derive the render units of `message_id` from its parsed segments.
#[must_use]
pub fn derive_units(message_id: &str, segments: &[Segment]) -> RenderUnits {
    let html = join_code(segments, |lang| lang == "html");
    let css = join_code(segments, |lang| lang == "css");
    let js = join_code(segments, |lang| lang == "javascript" || lang == "js");

    let (web, js) = if !html.is_empty() || !css.is_empty() {
        (Some(WebUnit { html, css, js }), None)
    } else if !js.is_empty() {
        (None, Some(JsUnit { js }))
    } else {
        (None, None)
    };

    let json = code_with_lang(segments, "json")
        .enumerate()
        .map(|(index, content)| JsonUnit { json: content.to_owned(), id: unit_id("json", message_id, index) })
        .collect();

    let python = code_with_lang(segments, "python")
        .enumerate()
        .map(|(index, content)| PythonUnit { python: content.to_owned(), id: unit_id("python", message_id, index) })
        .collect();

    RenderUnits { web, js, json, python }
}

fn unit_id(kind: &str, message_id: &str, index: usize) -> String {
    format!("{kind}-{message_id}-{index}")
}

fn code_with_lang<'a>(segments: &'a [Segment], wanted: &'a str) -> impl Iterator<Item = &'a str> {
    segments.iter().filter_map(move |segment| match segment {
        Segment::Code { content, lang } if lang == wanted => Some(content.as_str()),
        _ => None,
    })
}

fn join_code(segments: &[Segment], accept: impl Fn(&str) -> bool) -> String {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Code { content, lang } if accept(lang) => Some(content.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
