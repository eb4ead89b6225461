//! Fenced code block with a language label and a copy button.

use leptos::prelude::*;

/// Copy button label for the given state.
pub fn copy_label(copied: bool) -> &'static str {
    if copied { "Copiado!" } else { "Copiar" }
}

#[component]
pub fn CodeBlock(lang: String, code: String) -> impl IntoView {
    let copied = RwSignal::new(false);
    let code_text = code.clone();

    let on_copy = move |_| {
        #[cfg(feature = "csr")]
        {
            let code = code.clone();
            leptos::task::spawn_local(async move {
                if crate::util::clipboard::write_text(&code).await {
                    copied.set(true);
                    gloo_timers::future::TimeoutFuture::new(crate::util::clipboard::COPIED_RESET_MS).await;
                    copied.set(false);
                }
            });
        }
    };

    view! {
        <div class="code-block">
            <div class="code-block__header">
                <span class="code-block__lang">{lang}</span>
                <button
                    class="code-block__copy"
                    class:code-block__copy--done=move || copied.get()
                    on:click=on_copy
                    aria-label="Copiar código para a área de transferência"
                    title="Copiar Código"
                >
                    {move || copy_label(copied.get())}
                </button>
            </div>
            <pre class="code-block__body">
                <code>{code_text}</code>
            </pre>
        </div>
    }
}
