//! Platform dashboard, admins only.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::net::types::AdminDashboard;
use crate::session;
use crate::state::user::UserType;
use crate::util::auth;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session_signal = session::use_session();
    let navigate = use_navigate();
    auth::install_unauth_redirect(session_signal, navigate.clone());

    // Non-admins get bounced to their own dashboard.
    Effect::new(move || {
        let state = session_signal.get();
        if let Some(user) = state.user {
            if user.user_type != UserType::Admin {
                navigate("/", NavigateOptions::default());
            }
        }
    });

    let data = RwSignal::new(None::<AdminDashboard>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        data.set(crate::net::api::fetch_admin_dashboard().await.into_data());
        loading.set(false);
    });

    let stats = move || data.get().unwrap_or_default().platform_stats;
    let activity = move || data.get().unwrap_or_default().recent_activity;

    view! {
        <AppShell>
            <h1 class="page-title">"平台管理"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"加载中..."</p> }>
                <div class="stat-grid">
                    <StatCard label="注册用户" value=stats().total_users.to_string()/>
                    <StatCard label="活跃用户" value=stats().active_users.to_string()/>
                    <StatCard label="任务总数" value=stats().total_tasks.to_string()/>
                    <StatCard label="进行中任务" value=stats().active_tasks.to_string()/>
                    <StatCard label="已完成任务" value=stats().completed_tasks.to_string()/>
                    <StatCard label="平台流水" value=format!("¥{:.2}", stats().total_revenue)/>
                </div>

                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"平台动态"</h2>
                    <Show
                        when=move || !activity().is_empty()
                        fallback=|| view! { <p class="dashboard-section__empty">"暂无动态"</p> }
                    >
                        <ul class="activity-list">
                            {move || {
                                activity()
                                    .into_iter()
                                    .map(|entry| {
                                        view! {
                                            <li class="activity-list__item">
                                                <span class="activity-list__kind">
                                                    {entry.kind.unwrap_or_default()}
                                                </span>
                                                <span class="activity-list__content">
                                                    {entry.details.unwrap_or_default()}
                                                </span>
                                                <span class="activity-list__date">
                                                    {entry.time.unwrap_or_default()}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </section>
            </Show>
        </AppShell>
    }
}
