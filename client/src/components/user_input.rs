//! Single-line message input with send button and inline validation error.

use leptos::prelude::*;

use crate::state::chat::ChatState;

/// Input row. `on_send` returns `true` when the message was accepted, which
/// clears the field.
#[component]
pub fn UserInput(on_send: Callback<String, bool>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let text = RwSignal::new(String::new());

    let loading = move || chat.with(|c| c.conversation.is_loading());
    let error = move || chat.with(|c| c.input_error.as_ref().map(ToString::to_string));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if on_send.run(text.get_untracked()) {
            text.set(String::new());
        }
    };

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        if chat.with_untracked(|c| c.input_error.is_some()) {
            chat.update(|c| c.edit_input(&value));
        }
        text.set(value);
    };

    view! {
        <form class="user-input" on:submit=on_submit>
            <div class="user-input__row">
                <input
                    class="user-input__field"
                    type="text"
                    placeholder="[ INICIAR CONSULTA... ]"
                    autocomplete="off"
                    disabled=loading
                    aria-invalid=move || error().is_some().to_string()
                    prop:value=move || text.get()
                    on:input=on_input
                />
                <button
                    class="user-input__send"
                    type="submit"
                    disabled=move || loading() || text.get().trim().is_empty()
                    aria-label="Send message"
                >
                    {move || {
                        if loading() {
                            view! { <span class="spinner"></span> }.into_any()
                        } else {
                            view! { <span class="user-input__arrow">"→"</span> }.into_any()
                        }
                    }}
                </button>
            </div>
            {move || error().map(|message| view! { <p class="user-input__error" id="input-error-message">{message}</p> })}
        </form>
    }
}
