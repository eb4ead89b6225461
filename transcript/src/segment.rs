//! Split a message into free text and fenced code blocks.
//!
//! A fence is three backticks, an optional word tag, a newline, and a body
//! that runs up to the *next* three backticks. Only complete pairs count: an
//! opening fence with no closing one stays in the surrounding text.

#[cfg(test)]
#[path = "segment_test.rs"]
mod segment_test;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Language assigned to fences that carry no tag.
pub const DEFAULT_LANG: &str = "plaintext";

static FENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([A-Za-z0-9_]*)\n((?s:.*?))```").expect("fence pattern is valid"));

/// One renderable piece of a message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    Text { content: String },
    Code { content: String, lang: String },
}

impl Segment {
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text { content } | Self::Code { content, .. } => content,
        }
    }

    /// Language tag for code segments, `None` for text.
    #[must_use]
    pub fn lang(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::Code { lang, .. } => Some(lang),
        }
    }
}

/// Parse raw message text into ordered segments.
///
/// Gaps around fences are trimmed and dropped when blank; code bodies are
/// trimmed and tags lower-cased. Text without any complete fence comes back
/// as a single untouched [`Segment::Text`]. Empty input yields no segments.
#[must_use]
pub fn parse_segments(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut last_end = 0;
    let mut matched = false;

    for caps in FENCE_PATTERN.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        matched = true;
        push_text(&mut segments, &text[last_end..whole.start()]);

        let tag = caps.get(1).map_or("", |m| m.as_str());
        let lang = if tag.is_empty() { DEFAULT_LANG.to_owned() } else { tag.to_lowercase() };
        let body = caps.get(2).map_or("", |m| m.as_str());
        segments.push(Segment::Code { content: body.trim().to_owned(), lang });

        last_end = whole.end();
    }

    if !matched {
        return vec![Segment::Text { content: text.to_owned() }];
    }

    push_text(&mut segments, &text[last_end..]);
    segments
}

fn push_text(segments: &mut Vec<Segment>, gap: &str) {
    let trimmed = gap.trim();
    if !trimmed.is_empty() {
        segments.push(Segment::Text { content: trimmed.to_owned() });
    }
}
