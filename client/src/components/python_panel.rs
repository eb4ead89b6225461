//! Python unit panel: boots Pyodide, runs the block once, and allows reruns.

use leptos::prelude::*;
use transcript::sandbox::{PythonPhase, PythonRun};

use crate::util::fullscreen;
use crate::util::pyodide::Pyodide;

#[component]
pub fn PythonPanel(code: String) -> impl IntoView {
    let run = RwSignal::new(PythonRun::new());
    let runtime = StoredValue::new_local(None::<Pyodide>);
    let source = StoredValue::new(code);
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let is_fullscreen = RwSignal::new(false);

    // Caller has already moved `run` into Executing.
    let spawn_run = move || {
        let Some(py) = runtime.get_value() else {
            return;
        };
        let code = source.get_value();
        leptos::task::spawn_local(async move {
            let result = py.run(&code).await;
            run.update(|r| r.finish(result));
        });
    };

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            match Pyodide::load().await {
                Ok(py) => {
                    runtime.set_value(Some(py));
                    if run.try_update(PythonRun::runtime_loaded).unwrap_or(false) {
                        spawn_run();
                    }
                }
                Err(e) => {
                    log::error!("error loading pyodide: {e}");
                    run.update(PythonRun::runtime_failed);
                }
            }
        });
    }

    let on_run = move |_| {
        if run.try_update(PythonRun::start).unwrap_or(false) {
            spawn_run();
        }
    };

    let on_fullscreen = move |_| {
        is_fullscreen.set(!fullscreen::is_active());
        fullscreen::toggle(panel_ref);
    };

    let executing = move || run.with(|r| r.phase() == PythonPhase::Executing);

    view! {
        <div class="python-panel" node_ref=panel_ref>
            <div class="python-panel__header">
                <span class="python-panel__title">"Python Output"</span>
                <div class="python-panel__actions">
                    <button
                        class="python-panel__run"
                        on:click=on_run
                        disabled=move || !run.with(PythonRun::can_run)
                        title="Executar Código"
                    >
                        {move || executing().then(|| view! { <span class="spinner spinner--small"></span> })}
                        <span>{move || run.with(PythonRun::button_label)}</span>
                    </button>
                    <button
                        class="python-panel__fullscreen"
                        on:click=on_fullscreen
                        title=move || fullscreen::button_title(is_fullscreen.get())
                    >
                        {move || if is_fullscreen.get() { "⤡" } else { "⤢" }}
                    </button>
                </div>
            </div>
            <div class="python-panel__body">
                {move || {
                    run.with(|r| {
                        let status = r.status_text().map(|text| view! { <p class="python-panel__status">{text}</p> });
                        let stdout = r.output().stdout.clone();
                        let stderr = r.output().stderr.clone();
                        view! {
                            {status}
                            {(!stdout.is_empty()).then(|| view! { <pre class="python-panel__stdout">{stdout}</pre> })}
                            {(!stderr.is_empty()).then(|| view! { <pre class="python-panel__stderr">{stderr}</pre> })}
                        }
                    })
                }}
            </div>
        </div>
    }
}
