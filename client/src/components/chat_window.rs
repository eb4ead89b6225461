//! Scrolling message list, pending-reply indicator, and input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sends go through the [`crate::app::AssistantHandle`] context on a local
//! task. The conversation refuses a second send while one is in flight, so
//! at most one request is outstanding.

use leptos::prelude::*;

use crate::app::AssistantHandle;
use crate::components::message_bubble::{LoadingBubble, MessageBubble};
use crate::components::user_input::UserInput;
use crate::state::chat::ChatState;

#[component]
pub fn ChatWindow() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let assistant = expect_context::<AssistantHandle>();
    let end_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.with(|c| c.conversation.scroll_seq());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = end_ref.get_untracked() {
                el.scroll_into_view();
            }
        }
    });

    let on_send = Callback::new(move |text: String| {
        let Some((text, last_image)) = chat.try_update(|c| c.submit(&text)).flatten() else {
            return false;
        };
        let assistant = assistant.get_value();
        leptos::task::spawn_local(async move {
            match assistant {
                Some(assistant) => {
                    let exchange = assistant.send(&text, last_image.as_deref()).await;
                    chat.update(|c| c.receive(exchange, &text));
                }
                None => chat.update(|c| {
                    c.conversation.fail_unexpected();
                }),
            }
        });
        true
    });

    view! {
        <div class="chat-window">
            <div class="chat-window__messages">
                <For
                    each=move || chat.with(ChatState::message_ids)
                    key=|id| id.clone()
                    children=move |id: String| {
                        chat.with_untracked(|c| c.message(&id).cloned()).map(|message| view! { <MessageBubble message/> })
                    }
                />
                {move || chat.with(|c| c.conversation.is_loading()).then(|| view! { <LoadingBubble/> })}
                <div node_ref=end_ref></div>
            </div>
            <div class="chat-window__input">
                <UserInput on_send/>
            </div>
        </div>
    }
}
