//! Task publishing form, employers only.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::shell::AppShell;
use crate::session;
use crate::state::user::UserType;
use crate::util::auth;

#[component]
pub fn TaskCreatePage() -> impl IntoView {
    let session_signal = session::use_session();
    let navigate = use_navigate();
    auth::install_unauth_redirect(session_signal, navigate.clone());

    // Workers have no business here.
    let navigate_away = navigate.clone();
    Effect::new(move || {
        let state = session_signal.get();
        if let Some(user) = state.user {
            if user.user_type != UserType::Employer {
                navigate_away("/tasks", NavigateOptions::default());
            }
        }
    });

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let location_type = RwSignal::new("onsite".to_owned());
    let location_details = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let payment_type = RwSignal::new("fixed".to_owned());
    let budget = RwSignal::new(String::new());
    let headcount = RwSignal::new("1".to_owned());
    let is_urgent = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = title.get().trim().to_owned();
        if title_value.is_empty() {
            info.set("请填写任务标题".to_owned());
            return;
        }
        let Ok(budget_amount) = budget.get().trim().parse::<f64>() else {
            info.set("请填写有效的预算金额".to_owned());
            return;
        };
        let headcount_value = headcount.get().trim().parse::<u32>().unwrap_or(1);
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = serde_json::json!({
                "title": title_value,
                "description": description.get_untracked(),
                "location_type": location_type.get_untracked(),
                "location_details": location_details.get_untracked(),
                "start_date": start_date.get_untracked(),
                "end_date": end_date.get_untracked(),
                "payment_type": payment_type.get_untracked(),
                "budget_amount": budget_amount,
                "headcount": headcount_value,
                "is_urgent": is_urgent.get_untracked(),
            });
            let response = crate::net::api::create_task(&payload).await;
            match response.data {
                Some(task) if response.success => {
                    crate::state::notify::success("任务已发布");
                    navigate(&format!("/tasks/{}", task.uuid), NavigateOptions::default());
                }
                _ => {
                    info.set(response.error.unwrap_or_else(|| "发布失败".to_owned()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (navigate, budget_amount, headcount_value, title_value);
            busy.set(false);
        }
    };

    view! {
        <AppShell>
            <h1 class="page-title">"发布任务"</h1>
            <form class="task-form" on:submit=on_submit>
                <label class="task-form__field">
                    "任务标题"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="task-form__field">
                    "任务描述"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="task-form__row">
                    <label class="task-form__field">
                        "工作方式"
                        <select on:change=move |ev| location_type.set(event_target_value(&ev))>
                            <option value="onsite">"现场"</option>
                            <option value="remote">"远程"</option>
                        </select>
                    </label>
                    <label class="task-form__field">
                        "地点详情"
                        <input
                            type="text"
                            prop:value=move || location_details.get()
                            on:input=move |ev| location_details.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="task-form__row">
                    <label class="task-form__field">
                        "开始日期"
                        <input
                            type="date"
                            prop:value=move || start_date.get()
                            on:input=move |ev| start_date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="task-form__field">
                        "结束日期"
                        <input
                            type="date"
                            prop:value=move || end_date.get()
                            on:input=move |ev| end_date.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="task-form__row">
                    <label class="task-form__field">
                        "结算方式"
                        <select on:change=move |ev| payment_type.set(event_target_value(&ev))>
                            <option value="fixed">"一口价"</option>
                            <option value="hourly">"按小时"</option>
                            <option value="daily">"按天"</option>
                        </select>
                    </label>
                    <label class="task-form__field">
                        "预算金额"
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || budget.get()
                            on:input=move |ev| budget.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="task-form__field">
                        "招聘人数"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || headcount.get()
                            on:input=move |ev| headcount.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="task-form__urgent">
                    <input
                        type="checkbox"
                        prop:checked=move || is_urgent.get()
                        on:change=move |ev| is_urgent.set(event_target_checked(&ev))
                    />
                    "加急任务"
                </label>
                <Show when=move || !info.get().is_empty()>
                    <p class="task-form__message">{move || info.get()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "发布"
                </button>
            </form>
        </AppShell>
    }
}
