//! Profile page: editable identity fields and avatar upload.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde_json::Value;

use crate::components::shell::AppShell;
use crate::session;
use crate::util::auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session_signal = session::use_session();
    auth::install_unauth_redirect(session_signal, use_navigate());

    let name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let skills = RwSignal::new(String::new());
    let hourly_rate = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Prefill once the session user is available.
    let initialized = RwSignal::new(false);
    Effect::new(move || {
        if initialized.get() {
            return;
        }
        let Some(user) = session_signal.get().user else {
            return;
        };
        name.set(user.name.clone().unwrap_or_default());
        bio.set(
            user.extra
                .get("bio")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned(),
        );
        skills.set(match user.extra.get("skills") {
            Some(Value::String(value)) => value.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            _ => String::new(),
        });
        hourly_rate.set(
            user.extra
                .get("hourly_rate")
                .and_then(Value::as_f64)
                .map(|rate| format!("{rate}"))
                .unwrap_or_default(),
        );
        initialized.set(true);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let mut fields = serde_json::json!({
                "name": name.get_untracked().trim(),
                "bio": bio.get_untracked(),
                "skills": skills.get_untracked(),
            });
            if let Ok(rate) = hourly_rate.get_untracked().trim().parse::<f64>() {
                fields["hourly_rate"] = rate.into();
            }
            let response = crate::net::api::update_profile(&fields).await;
            if response.success {
                crate::state::notify::success("资料已保存");
                // Prefer the server's view of the updated record.
                let updated = response
                    .data
                    .and_then(|body| body.user)
                    .map_or(fields, |raw| raw.0);
                session::update_user(session_signal, &updated);
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        busy.set(false);
    };

    let on_avatar_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Ok(form) = web_sys::FormData::new() else {
                return;
            };
            if form.append_with_blob("avatar", &file).is_err() {
                return;
            }
            leptos::task::spawn_local(async move {
                let response = crate::net::api::upload_avatar(&form).await;
                if let Some(url) = response.data.and_then(|body| body.avatar_url) {
                    crate::state::notify::success("头像已更新");
                    let fields = serde_json::json!({ "avatar": url, "avatar_url": url });
                    session::update_user(session_signal, &fields);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let avatar = move || session_signal.get().user.and_then(|u| u.avatar);

    view! {
        <AppShell>
            <h1 class="page-title">"个人资料"</h1>

            <section class="profile-avatar">
                <Show
                    when=move || avatar().is_some()
                    fallback=|| view! { <div class="profile-avatar__placeholder">"无头像"</div> }
                >
                    <img class="profile-avatar__image" src=move || avatar().unwrap_or_default()/>
                </Show>
                <label class="btn profile-avatar__upload">
                    "更换头像"
                    <input type="file" accept="image/*" on:change=on_avatar_change/>
                </label>
            </section>

            <form class="profile-form" on:submit=on_submit>
                <label class="profile-form__field">
                    "姓名"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__field">
                    "个人简介"
                    <textarea
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="profile-form__field">
                    "技能 (逗号分隔)"
                    <input
                        type="text"
                        prop:value=move || skills.get()
                        on:input=move |ev| skills.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-form__field">
                    "时薪"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || hourly_rate.get()
                        on:input=move |ev| hourly_rate.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "保存"
                </button>
            </form>
        </AppShell>
    }
}
