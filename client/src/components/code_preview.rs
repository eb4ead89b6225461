//! Sandboxed iframe preview for web and script-only units.

use leptos::prelude::*;
use transcript::sandbox::IFRAME_SANDBOX;

use crate::util::fullscreen;

/// Preview panel rendering `document` inside a script-only sandbox.
#[component]
pub fn CodePreview(document: String) -> impl IntoView {
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let is_fullscreen = RwSignal::new(false);

    let on_fullscreen = move |_| {
        is_fullscreen.set(!fullscreen::is_active());
        fullscreen::toggle(panel_ref);
    };

    view! {
        <div class="preview" node_ref=panel_ref>
            <div class="preview__header">
                <span class="preview__title">"Preview"</span>
                <button
                    class="preview__fullscreen"
                    on:click=on_fullscreen
                    title=move || fullscreen::button_title(is_fullscreen.get())
                >
                    {move || if is_fullscreen.get() { "⤡" } else { "⤢" }}
                </button>
            </div>
            <iframe
                class="preview__frame"
                srcdoc=document
                title="Code Preview"
                sandbox=IFRAME_SANDBOX
                width="100%"
                height="100%"
            ></iframe>
        </div>
    }
}
