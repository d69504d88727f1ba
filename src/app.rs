//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, login::LoginPage, payments::PaymentsPage,
    profile::ProfilePage, register::RegisterPage, reviews::ReviewsPage, settings::SettingsPage,
    task_create::TaskCreatePage, task_detail::TaskDetailPage, tasks::TasksPage,
};
use crate::session;
use crate::state::notify::{self, NotifyState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and notification contexts, kicks off the startup
/// auth check, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = session::provide_session();
    let toasts = RwSignal::new(NotifyState::default());
    provide_context(toasts);
    notify::install(toasts);

    session::start(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/worklink-client.css"/>
        <Title text="WorkLink"/>

        <ToastStack/>
        <Router>
            <Routes fallback=|| "页面不存在".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("tasks"), StaticSegment("create")) view=TaskCreatePage/>
                <Route path=(StaticSegment("tasks"), ParamSegment("uuid")) view=TaskDetailPage/>
                <Route path=StaticSegment("tasks") view=TasksPage/>
                <Route path=StaticSegment("payments") view=PaymentsPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
                <Route path=StaticSegment("reviews") view=ReviewsPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
