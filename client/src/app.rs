//! Root application component and context providers.

use std::sync::Arc;

use gemini::{Assistant, GeminiClient, GeminiConfig};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_window::ChatWindow;
use crate::components::theme_selector::ThemeSelector;
use crate::state::chat::ChatState;
use crate::state::ui::UiState;
use crate::util::theme_storage;

/// Shared handle to the assistant. `None` when the HTTP client could not be
/// built; sends then fail with the generic error reply.
pub type AssistantHandle = StoredValue<Option<Arc<Assistant<GeminiClient>>>, LocalStorage>;

/// Root application component.
///
/// Provides the chat, UI, and assistant contexts and keeps the `<html>`
/// theme class and stored preference in sync with the selected theme.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::with_theme(theme_storage::read_preference()));
    let assistant: AssistantHandle = StoredValue::new_local(build_assistant());

    provide_context(chat);
    provide_context(ui);
    provide_context(assistant);

    Effect::new(move || theme_storage::save(ui.with(|u| u.theme)));

    view! {
        <Title text="Jack Brito GPT"/>

        <div class="app">
            <header class=move || ui.with(UiState::header_class)>
                <div class="app-header__ornament app-header__ornament--left">
                    <div class="app-header__bar"></div>
                    <div class="app-header__rule"></div>
                    <div class="app-header__diamond"></div>
                </div>
                <div class="app-header__titles">
                    <h1 class="app-header__title">"Jack Brito GPT"</h1>
                    <p class="app-header__subtitle">"POWERED BY GEMINI"</p>
                </div>
                <div class="app-header__ornament app-header__ornament--right">
                    <div class="app-header__diamond"></div>
                    <div class="app-header__rule"></div>
                    <div class="app-header__bar"></div>
                    <ThemeSelector/>
                </div>
            </header>
            <main class="app__main">
                <ChatWindow/>
            </main>
        </div>
    }
}

fn build_assistant() -> Option<Arc<Assistant<GeminiClient>>> {
    let config = GeminiConfig::new(option_env!("API_KEY").unwrap_or_default());
    match GeminiClient::new(config) {
        Ok(client) => Some(Arc::new(Assistant::new(client))),
        Err(e) => {
            #[cfg(feature = "csr")]
            log::error!("failed to build gemini client: {e}");
            let _ = e;
            None
        }
    }
}
