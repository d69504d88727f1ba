//! Task hall: filterable, paginated task list.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::AppShell;
use crate::components::task_card::TaskCard;
use crate::net::types::{Pagination, Task};
use crate::session;
use crate::state::user::UserType;
use crate::util::auth;

#[component]
pub fn TasksPage() -> impl IntoView {
    let session_signal = session::use_session();
    auth::install_unauth_redirect(session_signal, use_navigate());

    let tasks = RwSignal::new(Vec::<Task>::new());
    let pagination = RwSignal::new(None::<Pagination>);
    let loading = RwSignal::new(true);
    let status = RwSignal::new(String::new());
    let keyword = RwSignal::new(String::new());
    let page = RwSignal::new(1_u32);

    let reload = move || {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut filters: Vec<(&str, String)> = Vec::new();
            let status_value = status.get_untracked();
            if !status_value.is_empty() {
                filters.push(("status", status_value));
            }
            let keyword_value = keyword.get_untracked().trim().to_owned();
            if !keyword_value.is_empty() {
                filters.push(("keyword", keyword_value));
            }
            filters.push(("page", page.get_untracked().to_string()));
            if let Some(list) = crate::net::api::fetch_tasks(&filters).await.into_data() {
                tasks.set(list.tasks);
                pagination.set(list.pagination);
            }
            loading.set(false);
        });
    };
    reload();

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        page.set(1);
        reload();
    };

    let total_pages = move || pagination.get().map(|p| p.total_pages).unwrap_or(1).max(1);
    let is_employer = move || {
        session_signal
            .get()
            .user
            .map(|u| u.user_type)
            .unwrap_or_default()
            == UserType::Employer
    };

    view! {
        <AppShell>
            <div class="page-head">
                <h1 class="page-title">"任务大厅"</h1>
                <Show when=is_employer>
                    <a class="btn btn--primary" href="/tasks/create">
                        "发布任务"
                    </a>
                </Show>
            </div>

            <form class="task-filters" on:submit=on_search>
                <input
                    class="task-filters__keyword"
                    type="text"
                    placeholder="搜索任务标题或描述"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
                <select
                    class="task-filters__status"
                    on:change=move |ev| {
                        status.set(event_target_value(&ev));
                        page.set(1);
                        reload();
                    }
                >
                    <option value="">"全部状态"</option>
                    <option value="recruiting">"招募中"</option>
                    <option value="in_progress">"进行中"</option>
                    <option value="completed">"已完成"</option>
                    <option value="closed">"已关闭"</option>
                </select>
                <button class="btn" type="submit">
                    "搜索"
                </button>
            </form>

            <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"加载中..."</p> }>
                <Show
                    when=move || !tasks.get().is_empty()
                    fallback=|| view! { <p class="task-list__empty">"没有符合条件的任务"</p> }
                >
                    <div class="task-list">
                        {move || {
                            tasks
                                .get()
                                .into_iter()
                                .map(|task| view! { <TaskCard task=task/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <div class="pagination">
                <button
                    class="btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| {
                        page.update(|p| *p = p.saturating_sub(1).max(1));
                        reload();
                    }
                >
                    "上一页"
                </button>
                <span class="pagination__label">
                    {move || format!("第 {} / {} 页", page.get(), total_pages())}
                </span>
                <button
                    class="btn"
                    disabled=move || page.get() >= total_pages()
                    on:click=move |_| {
                        page.update(|p| *p += 1);
                        reload();
                    }
                >
                    "下一页"
                </button>
            </div>
        </AppShell>
    }
}
