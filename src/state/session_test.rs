use super::*;
use crate::net::types::RawUser;
use serde_json::json;

fn test_user(uuid: &str) -> User {
    user::normalize(&RawUser(json!({
        "uuid": uuid,
        "username": "lin",
        "user_type": "worker"
    })))
    .unwrap()
}

// =============================================================
// Defaults and projections
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
    assert!(!state.is_loading());
}

#[test]
fn checking_is_loading_but_not_authenticated() {
    let mut state = SessionState::default();
    state.begin_check();
    assert_eq!(state.phase, SessionPhase::Checking);
    assert!(state.is_loading());
    assert!(!state.is_authenticated());
}

// =============================================================
// Startup with a cached snapshot (stale-while-revalidate)
// =============================================================

#[test]
fn snapshot_restore_enters_provisional_authenticated_state() {
    let mut state = SessionState::default();
    state.begin_check();
    state.restore_snapshot(test_user("u1"));
    assert_eq!(state.phase, SessionPhase::Provisional);
    // No logged-out flash: already authenticated while verification runs.
    assert!(state.is_authenticated());
    assert!(state.is_loading());
}

#[test]
fn snapshot_restore_outside_checking_is_ignored() {
    let mut state = SessionState::default();
    state.restore_snapshot(test_user("u1"));
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
}

#[test]
fn verification_replaces_provisional_user() {
    let mut state = SessionState::default();
    state.begin_check();
    state.restore_snapshot(test_user("stale"));
    assert!(state.verify_ok(test_user("u1")));
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert_eq!(state.user.as_ref().unwrap().uuid, "u1");
    assert!(!state.is_loading());
}

#[test]
fn failed_verification_never_leaves_provisional_standing() {
    let mut state = SessionState::default();
    state.begin_check();
    state.restore_snapshot(test_user("stale"));
    state.verify_failed();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
}

#[test]
fn startup_without_token_or_snapshot_settles_unauthenticated() {
    let mut state = SessionState::default();
    state.begin_check();
    state.verify_failed();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
}

// =============================================================
// Stale verification after sign-out
// =============================================================

#[test]
fn verification_after_sign_out_is_ignored() {
    let mut state = SessionState::default();
    state.login_succeeded(test_user("u1"));
    state.signed_out();
    assert!(!state.verify_ok(test_user("u1")));
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
}

// =============================================================
// Periodic revalidation of a session established by login
// =============================================================

#[test]
fn revalidation_applies_to_a_fresh_login_session() {
    // First visit: no token, no snapshot, startup settles unauthenticated.
    let mut state = SessionState::default();
    state.begin_check();
    state.verify_failed();

    // The user then logs in without reloading; a later background
    // revalidation must still land on this session.
    state.login_succeeded(test_user("u1"));
    assert!(state.verify_ok(test_user("u1")));
    assert_eq!(state.phase, SessionPhase::Authenticated);
}

#[test]
fn failed_revalidation_signs_out_a_fresh_login_session() {
    let mut state = SessionState::default();
    state.begin_check();
    state.verify_failed();
    state.login_succeeded(test_user("u1"));

    // Server-side invalidation detected by the periodic check.
    state.verify_failed();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_authenticates_with_user_populated() {
    let mut state = SessionState::default();
    state.login_succeeded(test_user("u1"));
    assert_eq!(state.phase, SessionPhase::Authenticated);
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().unwrap().uuid, "u1");
}

#[test]
fn failed_login_leaves_state_untouched() {
    // A failed login never reaches the machine; nothing to roll back.
    let state = SessionState::default();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
}

#[test]
fn sign_out_clears_user_and_phase() {
    let mut state = SessionState::default();
    state.login_succeeded(test_user("u1"));
    state.signed_out();
    assert_eq!(state.phase, SessionPhase::Unauthenticated);
    assert!(state.user.is_none());
}

// =============================================================
// update_user merging
// =============================================================

#[test]
fn update_changes_only_the_named_field() {
    let mut state = SessionState::default();
    state.login_succeeded(test_user("u1"));
    assert!(state.update_user(&json!({"username": "new"})));
    let user = state.user.as_ref().unwrap();
    assert_eq!(user.username.as_deref(), Some("new"));
    assert_eq!(user.uuid, "u1");
    assert_eq!(user.user_type, crate::state::user::UserType::Worker);
}

#[test]
fn update_merges_free_form_fields() {
    let mut state = SessionState::default();
    state.login_succeeded(test_user("u1"));
    assert!(state.update_user(&json!({"bio": "carpenter"})));
    assert_eq!(state.user.as_ref().unwrap().extra["bio"], "carpenter");
}

#[test]
fn update_that_clears_uuid_keeps_identity_and_reports_failure() {
    let mut state = SessionState::default();
    state.login_succeeded(test_user("u1"));
    assert!(!state.update_user(&json!({"uuid": null, "username": "new"})));
    let user = state.user.as_ref().unwrap();
    // The otherwise-valid part of the update still lands.
    assert_eq!(user.username.as_deref(), Some("new"));
    assert_eq!(user.uuid, "u1");
}

#[test]
fn update_without_a_user_is_a_no_op() {
    let mut state = SessionState::default();
    assert!(!state.update_user(&json!({"username": "new"})));
    assert!(state.user.is_none());
}
