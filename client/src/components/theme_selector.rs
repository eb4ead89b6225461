//! Palette button and modal listing the available themes.

#[cfg(test)]
#[path = "theme_selector_test.rs"]
mod theme_selector_test;

use leptos::prelude::*;
use transcript::Theme;

use crate::state::ui::UiState;

/// Keys that dismiss the open theme dialog.
pub fn closes_dialog(key: &str) -> bool {
    key == "Escape"
}

/// Button text for a theme card.
pub fn select_label(is_current: bool) -> &'static str {
    if is_current { "Tema Atual" } else { "Selecionar Tema" }
}

#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let open = move |_| ui.update(|u| u.theme_modal_open = true);
    let close = move || ui.update(|u| u.theme_modal_open = false);
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let is_open = ui.with(|u| u.theme_modal_open);
        let dialog = dialog_ref.get();
        #[cfg(feature = "csr")]
        {
            if let (true, Some(el)) = (is_open, dialog) {
                let _ = el.focus();
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (is_open, dialog);
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if closes_dialog(&ev.key()) {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <div class="theme-selector">
            <button class="theme-selector__open" on:click=open aria-label="Selecionar tema" title="Selecionar Tema">
                "🎨"
            </button>
            {move || {
                ui.get()
                    .theme_modal_open
                    .then(|| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| close()>
                                <div
                                    class="dialog theme-dialog"
                                    on:click=move |ev| ev.stop_propagation()
                                    on:keydown=on_keydown
                                    node_ref=dialog_ref
                                    tabindex="0"
                                >
                                    <div class="theme-dialog__header">
                                        <h2>"Escolha seu Tema"</h2>
                                        <button
                                            class="theme-dialog__close"
                                            on:click=move |_| close()
                                            aria-label="Fechar diálogo de tema"
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                    <div class="theme-dialog__grid">
                                        {Theme::ALL.into_iter().map(|theme| view! { <ThemeCard theme/> }).collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn ThemeCard(theme: Theme) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let is_current = move || ui.get().theme == theme;

    view! {
        <div class="theme-card" class:theme-card--current=is_current>
            <div>
                <h3 class="theme-card__name">{theme.name()}</h3>
                <p class="theme-card__description">{theme.description()}</p>
                <div class="theme-card__details">
                    <p class="theme-card__label">"Elementos Visuais:"</p>
                    <p>{theme.visual_elements()}</p>
                    <p class="theme-card__label">"Aplicações:"</p>
                    <p>{theme.applications()}</p>
                </div>
            </div>
            <button
                class="theme-card__select"
                disabled=is_current
                on:click=move |_| ui.update(|u| u.select_theme(theme))
            >
                {move || select_label(is_current())}
            </button>
        </div>
    }
}
