//! Authenticated page chrome: sidebar plus topbar around the page body.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::topbar::Topbar;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar/>
            <div class="app-shell__main">
                <Topbar/>
                <main class="app-shell__content">{children()}</main>
            </div>
        </div>
    }
}
