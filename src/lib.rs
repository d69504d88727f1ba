//! # worklink-client
//!
//! Leptos + WASM frontend for the WorkLink gig-work marketplace.
//! Users register as workers or employers, browse and post tasks, apply,
//! track payments, and leave reviews against a JSON REST backend.
//!
//! This crate contains pages, components, the shared session controller,
//! pure application state, and the HTTP transport with its uniform
//! response envelope.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: initialize logging and hydrate the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
