//! Settings page: notification preferences, privacy toggles, and password
//! change.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use serde_json::Value;

use crate::components::shell::AppShell;
use crate::session;
use crate::util::auth;

fn flag(settings: Option<&Value>, key: &str, default: bool) -> bool {
    settings
        .and_then(|value| value.get(key))
        .and_then(Value::as_bool)
        .unwrap_or(default)
}

/// Client-side password checks, mirroring the server's minimum length.
fn password_change_error(new: &str, confirm: &str) -> Option<&'static str> {
    if new.chars().count() < 6 {
        return Some("新密码至少需要6个字符");
    }
    if new != confirm {
        return Some("两次输入的新密码不一致");
    }
    None
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session_signal = session::use_session();
    auth::install_unauth_redirect(session_signal, use_navigate());

    let task_updates = RwSignal::new(true);
    let payment_alerts = RwSignal::new(true);
    let marketing = RwSignal::new(false);
    let profile_public = RwSignal::new(true);
    let show_contact = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let initialized = RwSignal::new(false);
    Effect::new(move || {
        if initialized.get() {
            return;
        }
        let Some(user) = session_signal.get().user else {
            return;
        };
        let notifications = user.notification_preferences.as_ref();
        task_updates.set(flag(notifications, "task_updates", true));
        payment_alerts.set(flag(notifications, "payment_alerts", true));
        marketing.set(flag(notifications, "marketing", false));
        let privacy = user.privacy_settings.as_ref();
        profile_public.set(flag(privacy, "profile_public", true));
        show_contact.set(flag(privacy, "show_contact", false));
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
            let fields = serde_json::json!({
                "notification_preferences": {
                    "task_updates": task_updates.get_untracked(),
                    "payment_alerts": payment_alerts.get_untracked(),
                    "marketing": marketing.get_untracked(),
                },
                "privacy_settings": {
                    "profile_public": profile_public.get_untracked(),
                    "show_contact": show_contact.get_untracked(),
                },
            });
            let response = crate::net::api::update_settings(&fields).await;
            if response.success {
                crate::state::notify::success("设置已保存");
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

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_busy = RwSignal::new(false);

    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if password_busy.get() {
            return;
        }
        let new_value = new_password.get();
        if let Some(message) = password_change_error(&new_value, &confirm_password.get()) {
            crate::state::notify::error(message);
            return;
        }
        password_busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = serde_json::json!({
                "current_password": current_password.get_untracked(),
                "new_password": new_value,
            });
            let response = crate::net::api::change_password(&payload).await;
            if response.success {
                let message = response
                    .message
                    .unwrap_or_else(|| "密码已成功更新".to_owned());
                crate::state::notify::success(&message);
                current_password.set(String::new());
                new_password.set(String::new());
                confirm_password.set(String::new());
            }
            password_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_value;
            password_busy.set(false);
        }
    };

    view! {
        <AppShell>
            <h1 class="page-title">"设置"</h1>
            <form class="settings-form" on:submit=on_submit>
                <section class="settings-form__group">
                    <h2>"通知"</h2>
                    <label class="settings-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || task_updates.get()
                            on:change=move |ev| task_updates.set(event_target_checked(&ev))
                        />
                        "任务进度通知"
                    </label>
                    <label class="settings-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || payment_alerts.get()
                            on:change=move |ev| payment_alerts.set(event_target_checked(&ev))
                        />
                        "付款提醒"
                    </label>
                    <label class="settings-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || marketing.get()
                            on:change=move |ev| marketing.set(event_target_checked(&ev))
                        />
                        "活动与推广消息"
                    </label>
                </section>
                <section class="settings-form__group">
                    <h2>"隐私"</h2>
                    <label class="settings-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || profile_public.get()
                            on:change=move |ev| profile_public.set(event_target_checked(&ev))
                        />
                        "公开我的个人资料"
                    </label>
                    <label class="settings-form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || show_contact.get()
                            on:change=move |ev| show_contact.set(event_target_checked(&ev))
                        />
                        "向雇主展示联系方式"
                    </label>
                </section>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "保存设置"
                </button>
            </form>

            <form class="settings-form" on:submit=on_change_password>
                <section class="settings-form__group">
                    <h2>"修改密码"</h2>
                    <label class="settings-form__field">
                        "当前密码"
                        <input
                            type="password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__field">
                        "新密码"
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__field">
                        "确认新密码"
                        <input
                            type="password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                </section>
                <button class="btn btn--primary" type="submit" disabled=move || password_busy.get()>
                    "修改密码"
                </button>
            </form>
        </AppShell>
    }
}
