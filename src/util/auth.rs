//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior, including not redirecting while the startup check is still
//! deciding (a provisional session counts as signed in).

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Redirect to `/login` whenever the session has settled and no user is
/// present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.is_loading() && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });
}
