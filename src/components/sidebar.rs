//! Dashboard navigation sidebar.

use leptos::prelude::*;

use crate::session;
use crate::state::user::UserType;

/// Left navigation. Workers and employers see slightly different entries;
/// admins get the platform dashboard link.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = session::use_session();
    let user_type = move || {
        session
            .get()
            .user
            .map(|u| u.user_type)
            .unwrap_or_default()
    };

    view! {
        <nav class="sidebar">
            <a class="sidebar__brand" href="/">
                "WorkLink"
            </a>
            <a class="sidebar__link" href="/">
                "仪表盘"
            </a>
            <a class="sidebar__link" href="/tasks">
                "任务大厅"
            </a>
            <Show when=move || user_type() == UserType::Employer>
                <a class="sidebar__link" href="/tasks/create">
                    "发布任务"
                </a>
            </Show>
            <a class="sidebar__link" href="/payments">
                "付款"
            </a>
            <a class="sidebar__link" href="/reviews">
                "评价"
            </a>
            <a class="sidebar__link" href="/profile">
                "个人资料"
            </a>
            <a class="sidebar__link" href="/settings">
                "设置"
            </a>
            <Show when=move || user_type() == UserType::Admin>
                <a class="sidebar__link sidebar__link--admin" href="/admin">
                    "平台管理"
                </a>
            </Show>
        </nav>
    }
}
