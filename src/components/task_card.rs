//! Reusable card component for task list items.

use leptos::prelude::*;

use crate::net::types::Task;

/// A clickable card representing a task in list views.
#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let href = format!("/tasks/{}", task.uuid);
    let status = task.status_label();
    let budget = format!(
        "{} {:.2}",
        task.currency.clone().unwrap_or_else(|| "CNY".to_owned()),
        task.budget_amount
    );
    let employer = task
        .employer
        .as_ref()
        .and_then(|e| e.name.clone())
        .unwrap_or_default();
    let is_urgent = task.is_urgent;

    view! {
        <a class="task-card" href=href>
            <div class="task-card__head">
                <span class="task-card__title">{task.title.clone()}</span>
                <Show when=move || is_urgent>
                    <span class="task-card__urgent">"急"</span>
                </Show>
            </div>
            <p class="task-card__description">{task.description.clone()}</p>
            <div class="task-card__meta">
                <span class="task-card__budget">{budget}</span>
                <span class="task-card__status">{status}</span>
                <span class="task-card__employer">{employer}</span>
            </div>
        </a>
    }
}
