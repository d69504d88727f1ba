//! Auth session state machine.
//!
//! DESIGN
//! ======
//! The stale-while-revalidate flow is modeled as explicit states rather
//! than ad hoc booleans so transitions can be asserted directly in tests:
//!
//! ```text
//! Unauthenticated -> Checking -> Provisional -> Authenticated
//!                       |            |              |
//!                       +------------+--------------+--> Unauthenticated
//! ```
//!
//! `Provisional` means "rendering from a cached snapshot while the
//! profile-fetch verification is still in flight". A failed verification
//! must never leave a provisional session standing. All methods are pure;
//! the controller in [`crate::session`] drives them and owns persistence.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde_json::Value;

use crate::state::user::{self, User};

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    /// Startup check running, nothing known yet.
    Checking,
    /// Optimistically authenticated from a cached snapshot, unverified.
    Provisional,
    /// Server-verified.
    Authenticated,
}

/// The single authoritative session record.
///
/// Pages receive read-only clones via the session context and mutate only
/// through the controller's entry points.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub user: Option<User>,
}

impl SessionState {
    /// True for both provisional and verified sessions, so a reload never
    /// flashes a logged-out frame while verification is in flight.
    pub fn is_authenticated(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Provisional | SessionPhase::Authenticated
        )
    }

    /// True while the startup check or its verification is unresolved.
    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::Checking | SessionPhase::Provisional
        )
    }

    /// Enter the startup check.
    pub fn begin_check(&mut self) {
        self.phase = SessionPhase::Checking;
    }

    /// Render optimistically from a cached snapshot while verification
    /// runs. Only meaningful during the startup check.
    pub fn restore_snapshot(&mut self, snapshot: User) {
        if self.phase == SessionPhase::Checking {
            self.user = Some(snapshot);
            self.phase = SessionPhase::Provisional;
        }
    }

    /// Apply a successful verification result, replacing the user record.
    ///
    /// Returns `false` (and changes nothing) when the session was already
    /// signed out — a verification landing after logout must not resurrect
    /// a cleared session.
    pub fn verify_ok(&mut self, verified: User) -> bool {
        if self.phase == SessionPhase::Unauthenticated {
            return false;
        }
        self.user = Some(verified);
        self.phase = SessionPhase::Authenticated;
        true
    }

    /// Verification failed or the payload did not normalize: drop any
    /// provisional user and return to unauthenticated.
    pub fn verify_failed(&mut self) {
        self.user = None;
        self.phase = SessionPhase::Unauthenticated;
    }

    /// A login or register call succeeded.
    pub fn login_succeeded(&mut self, user: User) {
        self.user = Some(user);
        self.phase = SessionPhase::Authenticated;
    }

    /// Local sign-out, regardless of what the server said.
    pub fn signed_out(&mut self) {
        self.user = None;
        self.phase = SessionPhase::Unauthenticated;
    }

    /// Merge partial fields into the current user and re-normalize.
    ///
    /// Returns `true` when the merged record normalized cleanly. When it
    /// does not (e.g. the partial cleared `uuid`), the merge is still
    /// applied with the previous identity retained, and `false` is
    /// returned so the caller can log the anomaly. No-op without a user.
    pub fn update_user(&mut self, partial: &Value) -> bool {
        let Some(current) = self.user.clone() else {
            return false;
        };
        let merged = user::merge_raw(&current.to_raw(), partial);
        if let Some(updated) = user::normalize(&merged) {
            self.user = Some(updated);
            return true;
        }
        let mut repaired = merged;
        if let Some(object) = repaired.0.as_object_mut() {
            object.insert("uuid".to_owned(), Value::String(current.uuid.clone()));
        }
        self.user = user::normalize(&repaired).or(Some(current));
        false
    }
}
