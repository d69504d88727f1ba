//! Reviews: received reviews with the aggregate rating, plus completed
//! tasks still waiting for this user's review.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::shell::AppShell;
use crate::net::types::{PendingReview, ReviewList};
use crate::session;
use crate::util::auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Received,
    Pending,
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let session_signal = session::use_session();
    auth::install_unauth_redirect(session_signal, use_navigate());

    let tab = RwSignal::new(Tab::Received);
    let data = RwSignal::new(None::<ReviewList>);
    let loading = RwSignal::new(true);
    let pending = RwSignal::new(Vec::<PendingReview>::new());
    let pending_loading = RwSignal::new(true);

    // The user uuid may arrive after mount (provisional restore), so fetch
    // from an effect keyed on it.
    let fetched_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(user) = session_signal.get().user else {
            return;
        };
        if fetched_for.get_untracked().as_deref() == Some(user.uuid.as_str()) {
            return;
        }
        fetched_for.set(Some(user.uuid.clone()));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            data.set(
                crate::net::api::fetch_user_reviews(&user.uuid)
                    .await
                    .into_data(),
            );
            loading.set(false);
        });
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(list) = crate::net::api::fetch_pending_reviews().await.into_data() {
            pending.set(list.pending_reviews);
        }
        pending_loading.set(false);
    });

    // A submitted review leaves the pending list immediately.
    let on_submitted = Callback::new(move |task_uuid: String| {
        pending.update(|items| items.retain(|item| item.task.uuid != task_uuid));
    });

    let list = move || data.get().unwrap_or_default();
    let stats = move || list().stats.unwrap_or_default();

    view! {
        <AppShell>
            <h1 class="page-title">"我的评价"</h1>
            <div class="review-tabs">
                <button
                    class="review-tabs__tab"
                    class:review-tabs__tab--active=move || tab.get() == Tab::Received
                    on:click=move |_| tab.set(Tab::Received)
                >
                    "收到的评价"
                </button>
                <button
                    class="review-tabs__tab"
                    class:review-tabs__tab--active=move || tab.get() == Tab::Pending
                    on:click=move |_| tab.set(Tab::Pending)
                >
                    {move || format!("待评价 ({})", pending.get().len())}
                </button>
            </div>

            <Show when=move || tab.get() == Tab::Received>
                <Show when=move || !loading.get() fallback=|| view! { <p class="page-loading">"加载中..."</p> }>
                    <div class="review-summary">
                        <span class="review-summary__rating">
                            {move || format!("{:.1}", stats().average_rating)}
                        </span>
                        <span class="review-summary__count">
                            {move || format!("共 {} 条评价", stats().total)}
                        </span>
                    </div>
                    <Show
                        when=move || !list().reviews.is_empty()
                        fallback=|| view! { <p class="review-list__empty">"还没有收到评价"</p> }
                    >
                        <ul class="review-list">
                            {move || {
                                list()
                                    .reviews
                                    .into_iter()
                                    .map(|review| {
                                        let stars = "★".repeat(usize::from(review.rating.min(5)));
                                        let reviewer = review
                                            .reviewer
                                            .and_then(|r| r.name.or(r.username))
                                            .unwrap_or_else(|| "匿名用户".to_owned());
                                        view! {
                                            <li class="review-list__item">
                                                <div class="review-list__head">
                                                    <span class="review-list__stars">{stars}</span>
                                                    <span class="review-list__reviewer">{reviewer}</span>
                                                    <span class="review-list__date">
                                                        {review.created_at.unwrap_or_default()}
                                                    </span>
                                                </div>
                                                <p class="review-list__comment">
                                                    {review.comment.unwrap_or_default()}
                                                </p>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>
            </Show>

            <Show when=move || tab.get() == Tab::Pending>
                <Show
                    when=move || !pending_loading.get()
                    fallback=|| view! { <p class="page-loading">"加载中..."</p> }
                >
                    <Show
                        when=move || !pending.get().is_empty()
                        fallback=|| view! { <p class="review-list__empty">"没有待评价的任务"</p> }
                    >
                        <div class="pending-reviews">
                            {move || {
                                pending
                                    .get()
                                    .into_iter()
                                    .map(|item| {
                                        view! { <PendingReviewCard item=item on_submitted=on_submitted/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </Show>
        </AppShell>
    }
}

/// One completed task awaiting a review, with its submit form.
#[component]
fn PendingReviewCard(item: PendingReview, on_submitted: Callback<String>) -> impl IntoView {
    let rating = RwSignal::new(5_u8);
    let comment = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let task_uuid = item.task.uuid.clone();
    let reviewee_uuid = item.user.uuid.clone();
    let counterpart = item
        .user
        .name
        .clone()
        .or_else(|| item.user.username.clone())
        .unwrap_or_default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let comment_value = comment.get().trim().to_owned();
        if comment_value.is_empty() {
            crate::state::notify::error("请填写评价内容");
            return;
        }
        busy.set(true);
        let task_uuid = task_uuid.clone();
        let reviewee_uuid = reviewee_uuid.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let payload = crate::net::api::review_payload(
                &task_uuid,
                &reviewee_uuid,
                rating.get_untracked(),
                &comment_value,
            );
            let response = crate::net::api::create_review(&payload).await;
            if response.success {
                crate::state::notify::success("评价提交成功");
                on_submitted.run(task_uuid);
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (task_uuid, reviewee_uuid, comment_value);
            busy.set(false);
        }
    };

    view! {
        <form class="pending-review" on:submit=on_submit>
            <div class="pending-review__head">
                <span class="pending-review__task">{item.task.title.clone()}</span>
                <span class="pending-review__counterpart">{counterpart}</span>
                <span class="pending-review__date">
                    {item.completed_at.clone().unwrap_or_default()}
                </span>
            </div>
            <div class="pending-review__rating">
                <select on:change=move |ev| {
                    rating.set(event_target_value(&ev).parse().unwrap_or(5));
                }>
                    <option value="5">"5 星"</option>
                    <option value="4">"4 星"</option>
                    <option value="3">"3 星"</option>
                    <option value="2">"2 星"</option>
                    <option value="1">"1 星"</option>
                </select>
            </div>
            <textarea
                class="pending-review__comment"
                placeholder="这次合作怎么样?"
                prop:value=move || comment.get()
                on:input=move |ev| comment.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "提交评价"
            </button>
        </form>
    }
}
