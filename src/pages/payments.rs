//! Wallet page: balance, withdrawal accounts, and the withdraw flow.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::AppShell;
use crate::net::types::Wallet;
use crate::session;
use crate::util::auth;

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let session_signal = session::use_session();
    auth::install_unauth_redirect(session_signal, use_navigate());

    let wallet = RwSignal::new(None::<Wallet>);
    let loading = RwSignal::new(true);

    let reload = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            wallet.set(crate::net::api::fetch_payments().await.into_data());
            loading.set(false);
        });
    };
    reload();

    let amount = RwSignal::new(String::new());
    let account_uuid = RwSignal::new(String::new());
    let withdraw_busy = RwSignal::new(false);

    let new_account_kind = RwSignal::new("alipay".to_owned());
    let new_account_value = RwSignal::new(String::new());
    let account_busy = RwSignal::new(false);

    let summary = move || wallet.get().unwrap_or_default();

    let on_withdraw = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if withdraw_busy.get() {
            return;
        }
        let Ok(amount_value) = amount.get().trim().parse::<f64>() else {
            crate::state::notify::error("请输入有效的提现金额");
            return;
        };
        let account = account_uuid.get();
        if account.is_empty() {
            crate::state::notify::error("请选择提现账户");
            return;
        }
        withdraw_busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = serde_json::json!({
                "amount": amount_value,
                "account_uuid": account,
            });
            let response = crate::net::api::request_withdrawal(&payload).await;
            if response.success {
                crate::state::notify::success("提现申请已提交");
                amount.set(String::new());
                reload();
            }
            withdraw_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (amount_value, account);
            withdraw_busy.set(false);
        }
    };

    let on_add_account = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if account_busy.get() {
            return;
        }
        let account_value = new_account_value.get().trim().to_owned();
        if account_value.is_empty() {
            crate::state::notify::error("请填写账号");
            return;
        }
        account_busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = serde_json::json!({
                "type": new_account_kind.get_untracked(),
                "account": account_value,
            });
            let response = crate::net::api::add_withdrawal_account(&payload).await;
            if response.success {
                crate::state::notify::success("提现账户已添加");
                new_account_value.set(String::new());
                reload();
            }
            account_busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = account_value;
            account_busy.set(false);
        }
    };

    view! {
        <AppShell>
            <h1 class="page-title">"付款"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"加载中..."</p> }>
                <div class="wallet-balance">
                    <span class="wallet-balance__label">"可用余额"</span>
                    <span class="wallet-balance__amount">
                        {move || {
                            let w = summary();
                            format!("{} {:.2}", w.currency.unwrap_or_else(|| "CNY".to_owned()), w.balance)
                        }}
                    </span>
                </div>

                <section class="wallet-section">
                    <h2 class="wallet-section__title">"提现"</h2>
                    <form class="wallet-withdraw" on:submit=on_withdraw>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            placeholder="提现金额"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                        <select on:change=move |ev| account_uuid.set(event_target_value(&ev))>
                            <option value="">"选择提现账户"</option>
                            {move || {
                                summary()
                                    .accounts
                                    .into_iter()
                                    .map(|account| {
                                        let label = format!("{} {}", account.kind, account.account);
                                        view! { <option value=account.uuid>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <button class="btn btn--primary" type="submit" disabled=move || withdraw_busy.get()>
                            "申请提现"
                        </button>
                    </form>
                </section>

                <section class="wallet-section">
                    <h2 class="wallet-section__title">"提现账户"</h2>
                    <ul class="wallet-accounts">
                        {move || {
                            summary()
                                .accounts
                                .into_iter()
                                .map(|account| {
                                    let is_default = account.is_default;
                                    view! {
                                        <li class="wallet-accounts__item">
                                            <span class="wallet-accounts__kind">{account.kind}</span>
                                            <span class="wallet-accounts__number">{account.account}</span>
                                            <Show when=move || is_default>
                                                <span class="wallet-accounts__default">"默认"</span>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <form class="wallet-add-account" on:submit=on_add_account>
                        <select on:change=move |ev| new_account_kind.set(event_target_value(&ev))>
                            <option value="alipay">"支付宝"</option>
                            <option value="wechat">"微信"</option>
                            <option value="bank">"银行卡"</option>
                        </select>
                        <input
                            type="text"
                            placeholder="账号"
                            prop:value=move || new_account_value.get()
                            on:input=move |ev| new_account_value.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || account_busy.get()>
                            "添加账户"
                        </button>
                    </form>
                </section>

                <section class="wallet-section">
                    <h2 class="wallet-section__title">"交易记录"</h2>
                    <Show
                        when=move || !summary().transactions.is_empty()
                        fallback=|| view! { <p class="wallet-section__empty">"暂无交易记录"</p> }
                    >
                        <ul class="wallet-transactions">
                            {move || {
                                summary()
                                    .transactions
                                    .into_iter()
                                    .map(|tx| {
                                        view! {
                                            <li class="wallet-transactions__item">
                                                <span class="wallet-transactions__desc">
                                                    {tx.description.unwrap_or_else(|| tx.kind.clone())}
                                                </span>
                                                <span class="wallet-transactions__amount">
                                                    {format!("{:+.2}", tx.amount)}
                                                </span>
                                                <span class="wallet-transactions__date">
                                                    {tx.created_at.unwrap_or_default()}
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
