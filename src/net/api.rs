//! REST API surface, grouped by backend resource.
//!
//! Thin wrappers over [`super::http`]: each function knows its endpoint
//! path, which side of the flat-vs-nested payload convention that endpoint
//! uses, and the DTO to decode into. Token persistence on login/register
//! lives here, at the transport boundary, so the session controller only
//! deals in users.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::envelope::Envelope;
use super::http::{self, Method, OnError};
use super::types::{
    AccountCreated, AdminDashboard, AuthPayload, DashboardData, PendingReviewList, RawUser,
    ReviewCreated, ReviewList, Task, TaskDetail, TaskList, UpdatedUser, VerificationCodeSent,
    Wallet, WithdrawalCreated,
};
#[cfg(feature = "hydrate")]
use crate::util::token_store;

#[cfg(any(test, feature = "hydrate"))]
fn task_endpoint(uuid: &str) -> String {
    format!("/tasks/{uuid}")
}

#[cfg(any(test, feature = "hydrate"))]
fn task_apply_endpoint(uuid: &str) -> String {
    format!("/tasks/{uuid}/apply")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_reviews_endpoint(user_uuid: &str) -> String {
    format!("/reviews/user/{user_uuid}")
}

#[cfg(any(test, feature = "hydrate"))]
fn tasks_endpoint(filters: &[(&str, String)]) -> String {
    if filters.is_empty() {
        return "/tasks".to_owned();
    }
    let query = filters
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("/tasks?{query}")
}

// =============================================================
// Auth
// =============================================================

/// Request an SMS verification code for login or register.
pub async fn send_verification_code(
    phone_number: &str,
    method: &str,
) -> Envelope<VerificationCodeSent> {
    let payload = serde_json::json!({ "phone_number": phone_number, "method": method });
    http::request(Method::Post, "/auth/send-verification-code", Some(&payload))
        .await
        .decode()
}

/// `POST /auth/login`. A token in a successful response is persisted here.
pub async fn login(payload: &Value) -> Envelope<AuthPayload> {
    auth_call("/auth/login", payload).await
}

/// `POST /auth/register`. Same token handling as login.
pub async fn register(payload: &Value) -> Envelope<AuthPayload> {
    auth_call("/auth/register", payload).await
}

async fn auth_call(path: &str, payload: &Value) -> Envelope<AuthPayload> {
    let envelope = http::request(Method::Post, path, Some(payload))
        .await
        .decode::<AuthPayload>();
    #[cfg(feature = "hydrate")]
    if let Some(token) = envelope
        .data
        .as_ref()
        .and_then(|auth| auth.token.as_deref())
    {
        token_store::save(token);
    }
    envelope
}

/// `POST /auth/logout`. The local token is dropped regardless of what the
/// server answers.
pub async fn logout() -> Envelope<Value> {
    let envelope = http::request_with(Method::Post, "/auth/logout", None, OnError::Quiet).await;
    #[cfg(feature = "hydrate")]
    token_store::remove();
    envelope
}

// =============================================================
// Users
// =============================================================

/// `GET /users/profile` — the startup/revalidation probe. Quiet: an
/// expired session must not toast at the user.
pub async fn fetch_profile() -> Envelope<RawUser> {
    http::request_with(Method::Get, "/users/profile", None, OnError::Quiet)
        .await
        .decode()
}

/// `PUT /users/profile`. The updated user comes back nested.
pub async fn update_profile(fields: &Value) -> Envelope<UpdatedUser> {
    http::request(Method::Put, "/users/profile", Some(fields))
        .await
        .decode()
}

/// `PUT /users/settings` for notification preferences and privacy.
pub async fn update_settings(fields: &Value) -> Envelope<UpdatedUser> {
    http::request(Method::Put, "/users/settings", Some(fields))
        .await
        .decode()
}

/// `POST /users/change-password` with the current and new password.
pub async fn change_password(payload: &Value) -> Envelope<Value> {
    http::request(Method::Post, "/users/change-password", Some(payload)).await
}

/// `POST /users/profile/avatar`, multipart.
#[cfg(feature = "hydrate")]
pub async fn upload_avatar(form: &web_sys::FormData) -> Envelope<super::types::AvatarUploaded> {
    http::request_multipart("/users/profile/avatar", form)
        .await
        .decode()
}

// =============================================================
// Tasks
// =============================================================

/// `GET /tasks` with optional query filters (status, keyword, page, ...).
pub async fn fetch_tasks(filters: &[(&str, String)]) -> Envelope<TaskList> {
    #[cfg(feature = "hydrate")]
    {
        http::request(Method::Get, &tasks_endpoint(filters), None)
            .await
            .decode()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filters;
        Envelope::fail("not available on server")
    }
}

/// `GET /tasks/:uuid`.
pub async fn fetch_task(uuid: &str) -> Envelope<Task> {
    #[cfg(feature = "hydrate")]
    {
        unwrap_task(http::request(Method::Get, &task_endpoint(uuid), None).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = uuid;
        Envelope::fail("not available on server")
    }
}

/// `POST /tasks` (employers only).
pub async fn create_task(payload: &Value) -> Envelope<Task> {
    unwrap_task(http::request(Method::Post, "/tasks", Some(payload)).await)
}

/// `POST /tasks/:uuid/apply` (workers only).
pub async fn apply_to_task(uuid: &str, payload: &Value) -> Envelope<Value> {
    #[cfg(feature = "hydrate")]
    {
        http::request(Method::Post, &task_apply_endpoint(uuid), Some(payload)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (uuid, payload);
        Envelope::fail("not available on server")
    }
}

/// Task endpoints nest their payload under `task`.
fn unwrap_task(envelope: Envelope<Value>) -> Envelope<Task> {
    let detail = envelope.decode::<TaskDetail>();
    Envelope {
        success: detail.success,
        data: detail.data.map(|d| d.task),
        error: detail.error,
        message: detail.message,
    }
}

// =============================================================
// Dashboard / payments / reviews / admin
// =============================================================

/// `GET /dashboard` — the worker/employer landing numbers.
pub async fn fetch_dashboard() -> Envelope<DashboardData> {
    http::request(Method::Get, "/dashboard", None).await.decode()
}

/// `GET /payments` — wallet summary and withdrawal accounts.
pub async fn fetch_payments() -> Envelope<Wallet> {
    http::request(Method::Get, "/payments", None).await.decode()
}

/// `POST /payments/withdraw`.
pub async fn request_withdrawal(payload: &Value) -> Envelope<WithdrawalCreated> {
    http::request(Method::Post, "/payments/withdraw", Some(payload))
        .await
        .decode()
}

/// `POST /payments/withdrawal-accounts`.
pub async fn add_withdrawal_account(payload: &Value) -> Envelope<AccountCreated> {
    http::request(Method::Post, "/payments/withdrawal-accounts", Some(payload))
        .await
        .decode()
}

/// Body for `POST /reviews`.
pub fn review_payload(task_uuid: &str, reviewee_uuid: &str, rating: u8, comment: &str) -> Value {
    serde_json::json!({
        "rating": rating,
        "comment": comment,
        "task_uuid": task_uuid,
        "reviewee_uuid": reviewee_uuid,
    })
}

/// `GET /reviews/pending` — completed tasks this user has not reviewed yet.
pub async fn fetch_pending_reviews() -> Envelope<PendingReviewList> {
    http::request(Method::Get, "/reviews/pending", None)
        .await
        .decode()
}

/// `POST /reviews`.
pub async fn create_review(payload: &Value) -> Envelope<ReviewCreated> {
    http::request(Method::Post, "/reviews", Some(payload))
        .await
        .decode()
}

/// `GET /reviews/user/:uuid`.
pub async fn fetch_user_reviews(user_uuid: &str) -> Envelope<ReviewList> {
    #[cfg(feature = "hydrate")]
    {
        http::request(Method::Get, &user_reviews_endpoint(user_uuid), None)
            .await
            .decode()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_uuid;
        Envelope::fail("not available on server")
    }
}

/// `GET /admin/dashboard`.
pub async fn fetch_admin_dashboard() -> Envelope<AdminDashboard> {
    http::request(Method::Get, "/admin/dashboard", None)
        .await
        .decode()
}
