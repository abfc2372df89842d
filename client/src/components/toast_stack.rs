//! Transient notification stack.

use leptos::prelude::*;

use crate::state::ui::{Toast, ToastVariant, UiState};

/// Renders queued toasts; each one removes itself after `TOAST_TTL_MS` or
/// when its close button is clicked.
#[component]
pub fn ToastStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || ui.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    schedule_dismiss(ui, id);
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    view! {
                        <div class=class>
                            <div class="toast__text">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                type="button"
                                on:click=move |_| ui.update(|u| u.dismiss_toast(id))
                            >
                                "\u{00D7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn schedule_dismiss(ui: RwSignal<UiState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let ttl = std::time::Duration::from_millis(u64::from(crate::state::ui::TOAST_TTL_MS));
        gloo_timers::future::sleep(ttl).await;
        let _ = ui.try_update(|u| u.dismiss_toast(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ui, id);
    }
}
