//! Login page supporting username/password and phone + SMS-code auth.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::{self, Credentials};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthMethod {
    Password,
    Phone,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session_signal = session::use_session();
    let navigate = use_navigate();

    // Already signed in (or provisionally so): go straight to the dashboard.
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if session_signal.get().is_authenticated() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let method = RwSignal::new(AuthMethod::Password);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_send_code = move |_| {
        if busy.get() {
            return;
        }
        let phone_value = phone.get().trim().to_owned();
        if phone_value.is_empty() {
            info.set("请先输入手机号".to_owned());
            return;
        }
        busy.set(true);
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let response = crate::net::api::send_verification_code(&phone_value, "login").await;
            if response.success {
                echoed_code.set(response.data.and_then(|sent| sent.code));
                info.set("验证码已发送".to_owned());
            } else {
                info.set(response.error.unwrap_or_else(|| "验证码发送失败".to_owned()));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = phone_value;
            busy.set(false);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match method.get() {
            AuthMethod::Password => Credentials::Password {
                username: username.get().trim().to_owned(),
                password: password.get(),
            },
            AuthMethod::Phone => Credentials::Phone {
                phone_number: phone.get().trim().to_owned(),
                verification_code: code.get().trim().to_owned(),
            },
        };
        busy.set(true);
        info.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session::login(session_signal, &credentials).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"WorkLink"</h1>
                <div class="auth-card__tabs">
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || method.get() == AuthMethod::Password
                        on:click=move |_| method.set(AuthMethod::Password)
                    >
                        "账号密码登录"
                    </button>
                    <button
                        class="auth-card__tab"
                        class:auth-card__tab--active=move || method.get() == AuthMethod::Phone
                        on:click=move |_| method.set(AuthMethod::Phone)
                    >
                        "手机验证码登录"
                    </button>
                </div>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || method.get() == AuthMethod::Password>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="用户名"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="密码"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </Show>
                    <Show when=move || method.get() == AuthMethod::Phone>
                        <input
                            class="auth-input"
                            type="tel"
                            placeholder="手机号"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                        <div class="auth-form__code-row">
                            <input
                                class="auth-input auth-input--code"
                                type="text"
                                maxlength="6"
                                placeholder="验证码"
                                prop:value=move || code.get()
                                on:input=move |ev| code.set(event_target_value(&ev))
                            />
                            <button
                                class="auth-button auth-button--secondary"
                                type="button"
                                disabled=move || busy.get()
                                on:click=on_send_code
                            >
                                "发送验证码"
                            </button>
                        </div>
                    </Show>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "登录"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_code.get().is_some()>
                    <p class="auth-message auth-message--code">
                        "验证码: "
                        <span>{move || echoed_code.get().unwrap_or_default()}</span>
                    </p>
                </Show>
                <p class="auth-card__switch">
                    "还没有账号? "
                    <a href="/register">"立即注册"</a>
                </p>
            </div>
        </div>
    }
}
