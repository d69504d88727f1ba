//! Transient notification queue (toasts).
//!
//! SYSTEM CONTEXT
//! ==============
//! The transport reports failures here so any screen's API call produces a
//! visible toast without the caller wiring one up. The queue itself is pure
//! state; `App` installs the live signal at startup and the toast stack
//! component renders it.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::Cell;

use leptos::prelude::*;

/// How long a toast stays on screen.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u32 = 4_000;

/// Severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Success,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: Level,
    pub text: String,
}

/// Ordered queue of visible toasts.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NotifyState {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: Level, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, level, text });
        id
    }

    /// Drop the toast with `id`; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

thread_local! {
    static SINK: Cell<Option<RwSignal<NotifyState>>> = const { Cell::new(None) };
}

/// Install the live queue signal. Called once from `App`.
pub fn install(signal: RwSignal<NotifyState>) {
    SINK.set(Some(signal));
}

/// Queue an error toast.
pub fn error(text: &str) {
    #[cfg(feature = "hydrate")]
    log::error!("{text}");
    dispatch(Level::Error, text);
}

/// Queue a success toast.
pub fn success(text: &str) {
    dispatch(Level::Success, text);
}

fn dispatch(level: Level, text: &str) {
    let Some(signal) = SINK.get() else {
        return;
    };
    let mut id = 0;
    signal.update(|state| id = state.push(level, text.to_owned()));
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || {
            if let Some(signal) = SINK.get() {
                signal.update(|state| state.dismiss(id));
            }
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
