//! Authenticated landing page: personal stats and recent activity.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::components::task_card::TaskCard;
use crate::net::types::DashboardData;
use crate::session;
use crate::util::auth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session_signal = session::use_session();
    auth::install_unauth_redirect(session_signal, use_navigate());

    let data = RwSignal::new(None::<DashboardData>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        data.set(crate::net::api::fetch_dashboard().await.into_data());
        loading.set(false);
    });

    let stats = move || data.get().unwrap_or_default();

    view! {
        <AppShell>
            <h1 class="page-title">"仪表盘"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"加载中..."</p> }>
                <div class="stat-grid">
                    <StatCard label="进行中的任务" value=stats().active_tasks.to_string()/>
                    <StatCard label="本月收入" value=format!("¥{:.2}", stats().monthly_income)/>
                    <StatCard label="工作时长" value=format!("{:.1} 小时", stats().work_hours)/>
                    <StatCard
                        label="评分"
                        value=format!("{:.1} ({} 条评价)", stats().rating, stats().review_count)
                    />
                </div>

                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"最近任务"</h2>
                    <Show
                        when=move || !stats().recent_tasks.is_empty()
                        fallback=|| view! { <p class="dashboard-section__empty">"暂无任务"</p> }
                    >
                        <div class="task-list">
                            {move || {
                                stats()
                                    .recent_tasks
                                    .into_iter()
                                    .map(|task| view! { <TaskCard task=task/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>

                <section class="dashboard-section">
                    <h2 class="dashboard-section__title">"最近动态"</h2>
                    <Show
                        when=move || !stats().activities.is_empty()
                        fallback=|| view! { <p class="dashboard-section__empty">"暂无动态"</p> }
                    >
                        <ul class="activity-list">
                            {move || {
                                stats()
                                    .activities
                                    .into_iter()
                                    .map(|activity| {
                                        view! {
                                            <li class="activity-list__item">
                                                <span class="activity-list__content">
                                                    {activity.content}
                                                </span>
                                                <span class="activity-list__date">
                                                    {activity.date.unwrap_or_default()}
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
