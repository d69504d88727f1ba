//! Environment-driven configuration.
//!
//! The backend address comes from the build environment only. There is no
//! hard-coded deployment host and no developer-local fallback; an unset
//! variable means same-origin `/api`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL prepended to every endpoint path.
///
/// Set `WORKLINK_API_URL` at build time to target a remote backend.
pub fn api_base_url() -> String {
    option_env!("WORKLINK_API_URL").map_or_else(|| "/api".to_owned(), str::to_owned)
}
