//! JSON unit panel with tree and raw views.

#[cfg(test)]
#[path = "json_viewer_test.rs"]
mod json_viewer_test;

use leptos::prelude::*;
use transcript::sandbox::json::{JsonRow, JsonToken, PARSE_ERROR_HEADING};
use transcript::sandbox::{JsonPreview, JsonViewMode};

use crate::util::fullscreen;

/// CSS modifier for a tree row's value.
pub fn token_class(token: JsonToken) -> &'static str {
    match token {
        JsonToken::ObjectOpen | JsonToken::ObjectClose | JsonToken::ArrayOpen | JsonToken::ArrayClose => {
            "json-row__punct"
        }
        JsonToken::String => "json-row__string",
        JsonToken::Number => "json-row__number",
        JsonToken::Boolean => "json-row__boolean",
        JsonToken::Null => "json-row__null",
    }
}

/// Left indent of a row.
pub fn row_indent(depth: usize) -> String {
    format!("padding-left: {}em", depth * 2)
}

#[component]
pub fn JsonViewer(json: String) -> impl IntoView {
    match JsonPreview::parse(&json) {
        Ok(preview) => view! { <JsonPanel preview/> }.into_any(),
        Err(e) => {
            #[cfg(feature = "csr")]
            log::warn!("json unit failed to parse: {}", e.detail);
            view! {
                <div class="json-panel json-panel--error">
                    <p class="json-panel__error-heading">{PARSE_ERROR_HEADING}</p>
                    <code>{e.to_string()}</code>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn JsonPanel(preview: JsonPreview) -> impl IntoView {
    let mode = RwSignal::new(JsonViewMode::default());
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let is_fullscreen = RwSignal::new(false);
    let rows = preview.rows();
    let raw = preview.raw();

    let on_fullscreen = move |_| {
        is_fullscreen.set(!fullscreen::is_active());
        fullscreen::toggle(panel_ref);
    };

    view! {
        <div class="json-panel" node_ref=panel_ref>
            <div class="json-panel__toolbar">
                <button
                    class="json-panel__mode"
                    class:json-panel__mode--active=move || mode.get() == JsonViewMode::Tree
                    on:click=move |_| mode.set(JsonViewMode::Tree)
                >
                    "Tree View"
                </button>
                <button
                    class="json-panel__mode"
                    class:json-panel__mode--active=move || mode.get() == JsonViewMode::Raw
                    on:click=move |_| mode.set(JsonViewMode::Raw)
                >
                    "Raw Text"
                </button>
                <button
                    class="json-panel__fullscreen"
                    on:click=on_fullscreen
                    title=move || fullscreen::button_title(is_fullscreen.get())
                >
                    {move || if is_fullscreen.get() { "⤡" } else { "⤢" }}
                </button>
            </div>
            <div class="json-panel__body">
                {move || match mode.get() {
                    JsonViewMode::Tree => view! { <div class="json-tree">{rows.iter().map(tree_row).collect::<Vec<_>>()}</div> }.into_any(),
                    JsonViewMode::Raw => view! { <pre class="json-raw"><code>{raw.clone()}</code></pre> }.into_any(),
                }}
            </div>
        </div>
    }
}

fn tree_row(row: &JsonRow) -> impl IntoView {
    let key = row.key.as_ref().map(|k| view! { <span class="json-row__key">{format!("\"{k}\": ")}</span> });
    let comma = row.trailing_comma.then_some(",");
    view! {
        <div class="json-row" style=row_indent(row.depth)>
            {key}
            <span class=token_class(row.token)>{row.text.clone()}</span>
            {comma}
        </div>
    }
}
