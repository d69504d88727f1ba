//! Top bar with the signed-in identity and the sign-out control.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::session;

#[component]
pub fn Topbar() -> impl IntoView {
    let session_signal = session::use_session();
    let navigate = use_navigate();

    let display_name = move || {
        session_signal
            .get()
            .user
            .map(|u| u.display_name().to_owned())
            .unwrap_or_default()
    };
    let avatar = move || session_signal.get().user.and_then(|u| u.avatar);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session::logout(session_signal).await;
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <header class="topbar">
            <div class="topbar__identity">
                <Show when=move || avatar().is_some()>
                    <img class="topbar__avatar" src=move || avatar().unwrap_or_default() />
                </Show>
                <span class="topbar__name">{display_name}</span>
            </div>
            <button class="topbar__logout" on:click=on_logout>
                "退出登录"
            </button>
        </header>
    }
}
