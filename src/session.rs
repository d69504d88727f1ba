//! Auth session controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that owns the live user record and token lifecycle.
//! `App` provides the session signal as context; pages read the
//! `(user, is_authenticated, is_loading)` projection from it and mutate
//! only through the entry points here. The pure transition rules live in
//! [`crate::state::session`]; this module adds the network and storage
//! side effects around them.
//!
//! Startup and the periodic revalidation may overlap in flight; both
//! converge on the same profile-fetch result, and a result landing after a
//! local sign-out is discarded (token check here, phase check in the
//! machine), so the race is tolerated by design.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::state::session::SessionState;
use crate::state::user::UserType;
#[cfg(feature = "hydrate")]
use crate::state::user::{self, User};
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::util::{storage, token_store};

/// localStorage key for the last-known user snapshot.
const SNAPSHOT_KEY: &str = "worklink_user";

/// Seconds between background profile revalidations.
#[cfg(feature = "hydrate")]
const REVALIDATE_INTERVAL_SECS: u64 = 300;

/// Credentials accepted by login and register.
///
/// The wire `method` discriminator is fixed by the variant, so callers
/// cannot dispatch a payload whose method disagrees with its fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    Password { username: String, password: String },
    Phone { phone_number: String, verification_code: String },
}

impl Credentials {
    fn method(&self) -> &'static str {
        match self {
            Self::Password { .. } => "username",
            Self::Phone { .. } => "phone",
        }
    }

    /// Body for `POST /auth/login`.
    pub fn login_payload(&self) -> Value {
        let mut payload = self.fields();
        payload["method"] = Value::String(self.method().to_owned());
        payload
    }

    /// Body for `POST /auth/register`.
    pub fn register_payload(&self, user_type: UserType) -> Value {
        let mut payload = self.login_payload();
        payload["user_type"] = Value::String(user_type.as_str().to_owned());
        payload
    }

    fn fields(&self) -> Value {
        match self {
            Self::Password { username, password } => serde_json::json!({
                "username": username,
                "password": password,
            }),
            Self::Phone {
                phone_number,
                verification_code,
            } => serde_json::json!({
                "phone_number": phone_number,
                "verification_code": verification_code,
            }),
        }
    }
}

/// Create the session signal and provide it as context. Called once from
/// `App`.
pub fn provide_session() -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    session
}

/// The session context, for pages and components.
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Startup check: restore the cached snapshot optimistically when either a
/// token or a snapshot exists, then verify in the background and start the
/// periodic revalidation loop. With neither stored, settle unauthenticated
/// immediately.
pub fn start(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        session.update(SessionState::begin_check);

        // The loop must outlive the startup check: a session established
        // later by login or register still needs periodic revalidation.
        // Each tick re-checks token presence, so running it from page load
        // is free while signed out.
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(
                    REVALIDATE_INTERVAL_SECS,
                ))
                .await;
                if token_store::get().is_some() {
                    verify(session).await;
                }
            }
        });

        let token = token_store::get();
        let snapshot = storage::load_json::<User>(SNAPSHOT_KEY);
        if token.is_none() && snapshot.is_none() {
            session.update(SessionState::verify_failed);
            return;
        }
        if let Some(cached) = snapshot {
            log::debug!("restoring provisional session for {}", cached.uuid);
            session.update(|state| state.restore_snapshot(cached));
        }

        leptos::task::spawn_local(async move {
            verify(session).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Fetch the profile and settle the session one way or the other.
///
/// Any failure — transport, server, or normalization — demotes the session
/// silently and purges the stored credential and snapshot, so a
/// provisional state never outlives a failed verification.
#[cfg(feature = "hydrate")]
async fn verify(session: RwSignal<SessionState>) {
    let response = api::fetch_profile().await;
    let verified = response
        .into_data()
        .as_ref()
        .and_then(|raw| user::normalize(raw));

    let Some(verified) = verified else {
        log::debug!("session verification failed, signing out locally");
        purge(session);
        return;
    };
    // Discard results that land after a local sign-out.
    if token_store::get().is_none() {
        log::debug!("dropping verification result that arrived after sign-out");
        return;
    }
    let mut applied = false;
    session.update(|state| applied = state.verify_ok(verified.clone()));
    if applied {
        storage::save_json(SNAPSHOT_KEY, &verified);
    }
}

#[cfg(feature = "hydrate")]
fn purge(session: RwSignal<SessionState>) {
    token_store::remove();
    storage::remove(SNAPSHOT_KEY);
    session.update(SessionState::verify_failed);
}

/// Log in. On success the session becomes authenticated and the snapshot
/// is persisted; the token was already stored by the transport. Errors are
/// returned for the invoking screen to present.
///
/// # Errors
///
/// Returns the server-provided message when the backend rejects the
/// credentials, or a transport message when the call never got through.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: &Credentials,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let response = api::login(&credentials.login_payload()).await;
        if !response.success {
            return Err(response.error.unwrap_or_else(|| "登录失败".to_owned()));
        }
        let user = resolve_user(response.into_data().and_then(|auth| auth.user)).await?;
        finish_sign_in(session, user);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, credentials);
        Err("not available on server".to_owned())
    }
}

/// Register a new worker or employer account. Same contract as [`login`].
///
/// # Errors
///
/// Returns the server-provided message on rejection (duplicate username,
/// bad verification code, ...).
pub async fn register(
    session: RwSignal<SessionState>,
    user_type: UserType,
    credentials: &Credentials,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let response = api::register(&credentials.register_payload(user_type)).await;
        if !response.success {
            return Err(response.error.unwrap_or_else(|| "注册失败".to_owned()));
        }
        let user = resolve_user(response.into_data().and_then(|auth| auth.user)).await?;
        finish_sign_in(session, user);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, user_type, credentials);
        Err("not available on server".to_owned())
    }
}

/// Normalize the auth response's user, falling back to a fresh profile
/// fetch when the login body's user payload does not normalize.
#[cfg(feature = "hydrate")]
async fn resolve_user(raw: Option<crate::net::types::RawUser>) -> Result<User, String> {
    if let Some(user) = raw.as_ref().and_then(user::normalize) {
        return Ok(user);
    }
    log::warn!("auth response user did not normalize, re-fetching profile");
    api::fetch_profile()
        .await
        .into_data()
        .as_ref()
        .and_then(user::normalize)
        .ok_or_else(|| "无法加载用户资料".to_owned())
}

#[cfg(feature = "hydrate")]
fn finish_sign_in(session: RwSignal<SessionState>, user: User) {
    storage::save_json(SNAPSHOT_KEY, &user);
    session.update(|state| state.login_succeeded(user));
}

/// Log out: best-effort server notification, then unconditional local
/// purge of token, snapshot, and user state.
pub async fn logout(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        // Failures are ignored; the server call also drops the token.
        let _ = api::logout().await;
    }
    token_store::remove();
    storage::remove(SNAPSHOT_KEY);
    session.update(SessionState::signed_out);
}

/// Merge partial fields into the current user record and re-persist the
/// snapshot. A merge that does not normalize is still applied (with the
/// prior identity retained) so an otherwise-valid update is not lost.
pub fn update_user(session: RwSignal<SessionState>, partial: &Value) {
    let mut clean = true;
    session.update(|state| clean = state.update_user(partial));
    #[cfg(feature = "hydrate")]
    if !clean {
        log::error!("user update did not normalize; raw merge applied");
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = clean;
    if let Some(user) = session.get_untracked().user {
        storage::save_json(SNAPSHOT_KEY, &user);
    }
}
