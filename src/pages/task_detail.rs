//! Single-task view with the worker apply flow.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::shell::AppShell;
use crate::net::types::Task;
use crate::session;
use crate::state::user::UserType;
use crate::util::auth;

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let session_signal = session::use_session();
    auth::install_unauth_redirect(session_signal, use_navigate());

    let params = use_params_map();
    let task = RwSignal::new(None::<Task>);
    let loading = RwSignal::new(true);
    let message = RwSignal::new(String::new());
    let applied = RwSignal::new(false);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let uuid = params.read().get("uuid").unwrap_or_default();
        if uuid.is_empty() {
            return;
        }
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            task.set(crate::net::api::fetch_task(&uuid).await.into_data());
            loading.set(false);
        });
    });

    let is_worker = move || {
        session_signal
            .get()
            .user
            .map(|u| u.user_type)
            .unwrap_or_default()
            == UserType::Worker
    };

    let on_apply = move |_| {
        if busy.get() || applied.get() {
            return;
        }
        let Some(uuid) = task.get_untracked().map(|t| t.uuid) else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = serde_json::json!({ "message": message.get_untracked() });
            let response = crate::net::api::apply_to_task(&uuid, &payload).await;
            if response.success {
                crate::state::notify::success("申请已提交");
                applied.set(true);
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = uuid;
        }
    };

    let detail = move || task.get().unwrap_or_default();

    view! {
        <AppShell>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"加载中..."</p> }>
                <Show
                    when=move || task.get().is_some()
                    fallback=|| view! { <p class="task-detail__missing">"任务不存在或已被删除"</p> }
                >
                    <article class="task-detail">
                        <header class="task-detail__head">
                            <h1 class="task-detail__title">{move || detail().title}</h1>
                            <span class="task-detail__status">{move || detail().status_label()}</span>
                            <Show when=move || detail().is_urgent>
                                <span class="task-detail__urgent">"急"</span>
                            </Show>
                        </header>

                        <dl class="task-detail__facts">
                            <dt>"预算"</dt>
                            <dd>
                                {move || {
                                    let t = detail();
                                    format!(
                                        "{} {:.2}",
                                        t.currency.unwrap_or_else(|| "CNY".to_owned()),
                                        t.budget_amount,
                                    )
                                }}
                            </dd>
                            <dt>"结算方式"</dt>
                            <dd>{move || detail().payment_type.unwrap_or_default()}</dd>
                            <dt>"工作地点"</dt>
                            <dd>
                                {move || {
                                    let t = detail();
                                    t.location_details
                                        .or(t.location_type)
                                        .unwrap_or_else(|| "不限".to_owned())
                                }}
                            </dd>
                            <dt>"时间"</dt>
                            <dd>
                                {move || {
                                    let t = detail();
                                    format!(
                                        "{} 至 {}",
                                        t.start_date.unwrap_or_default(),
                                        t.end_date.unwrap_or_default(),
                                    )
                                }}
                            </dd>
                            <dt>"招聘人数"</dt>
                            <dd>{move || detail().headcount.unwrap_or(1).to_string()}</dd>
                            <dt>"发布者"</dt>
                            <dd>
                                {move || {
                                    detail()
                                        .employer
                                        .and_then(|e| e.name.or(e.username))
                                        .unwrap_or_default()
                                }}
                            </dd>
                        </dl>

                        <section class="task-detail__description">
                            <h2>"任务描述"</h2>
                            <p>{move || detail().description}</p>
                        </section>

                        <Show when=is_worker>
                            <section class="task-detail__apply">
                                <h2>"申请这个任务"</h2>
                                <textarea
                                    class="task-detail__apply-message"
                                    placeholder="向雇主介绍一下自己 (可选)"
                                    prop:value=move || message.get()
                                    on:input=move |ev| message.set(event_target_value(&ev))
                                ></textarea>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || busy.get() || applied.get()
                                    on:click=on_apply
                                >
                                    {move || if applied.get() { "已申请" } else { "立即申请" }}
                                </button>
                            </section>
                        </Show>
                    </article>
                </Show>
            </Show>
        </AppShell>
    }
}
