//! JSON unit viewer: parse once, show as a colored tree or pretty text.

#[cfg(test)]
#[path = "json_test.rs"]
mod json_test;

use serde_json::Value;

/// Heading shown above a parse failure inside the JSON panel.
pub const PARSE_ERROR_HEADING: &str = "Could not parse JSON";

/// A JSON unit whose body is not valid JSON. Only ever shown in its panel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JSON inválido.")]
pub struct JsonPreviewError {
    /// Parser detail, kept for logs.
    pub detail: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JsonViewMode {
    #[default]
    Tree,
    Raw,
}

/// Syntax class of one tree row, used for coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonToken {
    ObjectOpen,
    ObjectClose,
    ArrayOpen,
    ArrayClose,
    String,
    Number,
    Boolean,
    Null,
}

/// One line of the tree view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonRow {
    pub depth: usize,
    pub key: Option<String>,
    pub text: String,
    pub token: JsonToken,
    pub trailing_comma: bool,
}

/// A successfully parsed JSON unit.
#[derive(Clone, Debug, PartialEq)]
pub struct JsonPreview {
    value: Value,
}

impl JsonPreview {
    /// # Errors
    ///
    /// Returns [`JsonPreviewError`] when `raw` is not valid JSON.
    pub fn parse(raw: &str) -> Result<Self, JsonPreviewError> {
        serde_json::from_str(raw)
            .map(|value| Self { value })
            .map_err(|e| JsonPreviewError { detail: e.to_string() })
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Two-space indented text, keys in source order.
    #[must_use]
    pub fn raw(&self) -> String {
        serde_json::to_string_pretty(&self.value).unwrap_or_default()
    }

    /// Flatten the value into display rows.
    #[must_use]
    pub fn rows(&self) -> Vec<JsonRow> {
        let mut rows = Vec::new();
        push_rows(&mut rows, &self.value, None, 0, false);
        rows
    }
}

fn push_rows(rows: &mut Vec<JsonRow>, value: &Value, key: Option<&str>, depth: usize, comma: bool) {
    let key = key.map(str::to_owned);
    match value {
        Value::Object(map) if !map.is_empty() => {
            rows.push(row(depth, key, "{", JsonToken::ObjectOpen, false));
            let last = map.len() - 1;
            for (i, (k, v)) in map.iter().enumerate() {
                push_rows(rows, v, Some(k.as_str()), depth + 1, i != last);
            }
            rows.push(row(depth, None, "}", JsonToken::ObjectClose, comma));
        }
        Value::Array(items) if !items.is_empty() => {
            rows.push(row(depth, key, "[", JsonToken::ArrayOpen, false));
            let last = items.len() - 1;
            for (i, v) in items.iter().enumerate() {
                push_rows(rows, v, None, depth + 1, i != last);
            }
            rows.push(row(depth, None, "]", JsonToken::ArrayClose, comma));
        }
        Value::Object(_) => rows.push(row(depth, key, "{}", JsonToken::ObjectOpen, comma)),
        Value::Array(_) => rows.push(row(depth, key, "[]", JsonToken::ArrayOpen, comma)),
        Value::String(_) => rows.push(row(depth, key, &value.to_string(), JsonToken::String, comma)),
        Value::Number(n) => rows.push(row(depth, key, &n.to_string(), JsonToken::Number, comma)),
        Value::Bool(b) => rows.push(row(depth, key, &b.to_string(), JsonToken::Boolean, comma)),
        Value::Null => rows.push(row(depth, key, "null", JsonToken::Null, comma)),
    }
}

fn row(depth: usize, key: Option<String>, text: &str, token: JsonToken, trailing_comma: bool) -> JsonRow {
    JsonRow { depth, key, text: text.to_owned(), token, trailing_comma }
}
