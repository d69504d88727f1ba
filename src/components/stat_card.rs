//! Small numeric stat tile used on the dashboards.

use leptos::prelude::*;

/// A labeled number on the dashboard grid.
#[component]
pub fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
