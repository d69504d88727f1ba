//! Transient notification stack rendered above every page.

use leptos::prelude::*;

use crate::state::notify::{Level, NotifyState};

/// Renders the toast queue; clicking a toast dismisses it early.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-stack">
            {move || {
                notify
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.level {
                            Level::Error => "toast toast--error",
                            Level::Success => "toast toast--success",
                        };
                        view! {
                            <div class=class on:click=move |_| notify.update(|s| s.dismiss(id))>
                                {toast.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
