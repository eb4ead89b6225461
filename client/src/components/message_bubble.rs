//! One chat message: avatar, parsed body, optional image, render toggles,
//! sources, and the open sandbox panels.
//!
//! SYSTEM CONTEXT
//! ==============
//! Parsing goes through the render cache in [`ChatState`]; open/closed
//! panel state lives in its toggle set keyed by `(message id, unit id)`, so
//! panels survive re-renders of the message list.

#[cfg(test)]
#[path = "message_bubble_test.rs"]
mod message_bubble_test;

use std::sync::Arc;

use leptos::prelude::*;
use transcript::unit::{JS_UNIT_ID, WEB_UNIT_ID};
use transcript::{GroundingSource, Message, RenderedMessage, Segment};

use crate::components::code_block::CodeBlock;
use crate::components::code_preview::CodePreview;
use crate::components::json_viewer::JsonViewer;
use crate::components::python_panel::PythonPanel;
use crate::state::chat::ChatState;

/// Kind of render toggle, for button labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleKind {
    Web,
    Js,
    Json,
    Python,
}

/// Button text for a render toggle. `index` is the zero-based position among
/// units of the same kind and is ignored for web and script units.
pub fn toggle_label(kind: ToggleKind, index: usize, open: bool) -> String {
    let n = index + 1;
    match (kind, open) {
        (ToggleKind::Web, false) => "Renderizar Web".to_owned(),
        (ToggleKind::Web, true) => "Fechar Web".to_owned(),
        (ToggleKind::Js, false) => "Executar JS".to_owned(),
        (ToggleKind::Js, true) => "Fechar JS".to_owned(),
        (ToggleKind::Json, false) => format!("Renderizar JSON {n}"),
        (ToggleKind::Json, true) => format!("Fechar JSON {n}"),
        (ToggleKind::Python, false) => format!("Executar Python {n}"),
        (ToggleKind::Python, true) => format!("Fechar Python {n}"),
    }
}

#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let rendered = chat
        .try_update_untracked(|c| c.rendered(&message))
        .unwrap_or_else(|| Arc::new(RenderedMessage::from_message(&message)));

    let is_user = message.is_user();
    let body = rendered.segments.iter().filter_map(segment_view).collect::<Vec<_>>();
    let image = message.image_url.clone().map(|src| {
        let alt = message.text.clone().unwrap_or_else(|| "Generated image".to_owned());
        view! { <MessageImage src alt/> }
    });
    let toggles = (!is_user && !rendered.units.is_empty()).then(|| view! { <RenderToggles message_id=message.id.clone() rendered=Arc::clone(&rendered)/> });
    let sources = (!is_user && !message.sources.is_empty()).then(|| sources_view(&message.sources));
    let panels = (!is_user).then(|| view! { <RenderPanels message_id=message.id.clone() rendered/> });

    view! {
        <div class="message" class:message--user=is_user class:message--ai=!is_user>
            {(!is_user).then(|| view! { <Avatar is_user=false/> })}
            <div class="message__column">
                <div class="message__bubble">{body} {image}</div>
                {(toggles.is_some() || sources.is_some()).then(|| view! { <div class="message__extras">{toggles} {sources}</div> })}
                {panels}
            </div>
            {is_user.then(|| view! { <Avatar is_user=true/> })}
        </div>
    }
}

/// Placeholder bubble shown while a reply is pending.
#[component]
pub fn LoadingBubble() -> impl IntoView {
    view! {
        <div class="message message--ai">
            <Avatar is_user=false/>
            <div class="message__column">
                <div class="message__bubble">
                    <div class="loading-dots">
                        <span class="loading-dots__dot"></span>
                        <span class="loading-dots__dot"></span>
                        <span class="loading-dots__dot"></span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Avatar(is_user: bool) -> impl IntoView {
    view! {
        <div class="avatar" class:avatar--user=is_user>
            {if is_user { "U" } else { "J" }}
        </div>
    }
}

fn segment_view(segment: &Segment) -> Option<AnyView> {
    if segment.content().is_empty() {
        return None;
    }
    Some(match segment {
        Segment::Text { content } => view! { <p class="message__text">{content.clone()}</p> }.into_any(),
        Segment::Code { content, lang } => view! { <CodeBlock lang=lang.clone() code=content.clone()/> }.into_any(),
    })
}

#[component]
fn MessageImage(src: String, alt: String) -> impl IntoView {
    let loading = RwSignal::new(true);
    view! {
        <div class="message__image">
            {move || loading.get().then(|| view! {
                <div class="message__image-loading">
                    <span class="spinner"></span>
                    "Carregando imagem..."
                </div>
            })}
            <img
                src=src
                alt=alt
                class:message__image--hidden=move || loading.get()
                on:load=move |_| loading.set(false)
                on:error=move |_| loading.set(false)
            />
        </div>
    }
}

fn sources_view(sources: &[GroundingSource]) -> impl IntoView + use<> {
    let items = sources
        .iter()
        .map(|source| {
            view! {
                <li>
                    <a href=source.uri.clone() target="_blank" rel="noopener noreferrer" title=source.uri.clone()>
                        {source.label().to_owned()}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! {
        <div class="message__sources">
            <h4>"Fontes:"</h4>
            <ul>{items}</ul>
        </div>
    }
}

#[component]
fn RenderToggles(message_id: String, rendered: Arc<RenderedMessage>) -> impl IntoView {
    let units = &rendered.units;
    let mut buttons = Vec::new();
    if units.web.is_some() {
        buttons.push(toggle_button(message_id.clone(), WEB_UNIT_ID.to_owned(), ToggleKind::Web, 0));
    }
    if units.js.is_some() {
        buttons.push(toggle_button(message_id.clone(), JS_UNIT_ID.to_owned(), ToggleKind::Js, 0));
    }
    for (i, unit) in units.json.iter().enumerate() {
        buttons.push(toggle_button(message_id.clone(), unit.id.clone(), ToggleKind::Json, i));
    }
    for (i, unit) in units.python.iter().enumerate() {
        buttons.push(toggle_button(message_id.clone(), unit.id.clone(), ToggleKind::Python, i));
    }
    view! { <div class="message__toggles">{buttons}</div> }
}

fn toggle_button(message_id: String, unit_id: String, kind: ToggleKind, index: usize) -> AnyView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let open = {
        let (message_id, unit_id) = (message_id.clone(), unit_id.clone());
        move || chat.with(|c| c.is_open(&message_id, &unit_id))
    };
    let on_click = move |_| {
        chat.update(|c| {
            c.toggle(&message_id, &unit_id);
        });
    };
    view! {
        <button class="message__toggle" on:click=on_click>
            {move || toggle_label(kind, index, open())}
        </button>
    }
    .into_any()
}

#[component]
fn RenderPanels(message_id: String, rendered: Arc<RenderedMessage>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let units = &rendered.units;
    let mut panels: Vec<AnyView> = Vec::new();

    if let Some(web) = &units.web {
        let document = web.preview_document();
        panels.push(panel(chat, message_id.clone(), WEB_UNIT_ID.to_owned(), move || {
            view! { <CodePreview document=document.clone()/> }.into_any()
        }));
    }
    if let Some(js) = &units.js {
        let document = js.preview_document();
        panels.push(panel(chat, message_id.clone(), JS_UNIT_ID.to_owned(), move || {
            view! { <CodePreview document=document.clone()/> }.into_any()
        }));
    }
    for unit in &units.json {
        let json = unit.json.clone();
        panels.push(panel(chat, message_id.clone(), unit.id.clone(), move || {
            view! { <JsonViewer json=json.clone()/> }.into_any()
        }));
    }
    for unit in &units.python {
        let python = unit.python.clone();
        panels.push(panel(chat, message_id.clone(), unit.id.clone(), move || {
            view! { <PythonPanel code=python.clone()/> }.into_any()
        }));
    }

    panels
}

/// Mount `content` while the toggle for `(message_id, unit_id)` is open.
fn panel(
    chat: RwSignal<ChatState>,
    message_id: String,
    unit_id: String,
    content: impl Fn() -> AnyView + Send + Sync + 'static,
) -> AnyView {
    let open = Memo::new(move |_| chat.with(|c| c.is_open(&message_id, &unit_id)));
    (move || open.get().then(|| view! { <div class="message__panel">{content()}</div> })).into_any()
}
