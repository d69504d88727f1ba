//! Bearer-token persistence across page reloads.
//!
//! DESIGN
//! ======
//! The cookie is the source of truth (`SameSite=Lax` so external links still
//! carry it); a legacy localStorage copy is migrated to the cookie the first
//! time it is read. Token presence is the sole signal the session controller
//! uses to decide whether silent re-authentication is worth attempting.
//!
//! All browser access degrades to "no token" instead of failing; `remove`
//! is safe to call with nothing stored.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

/// Cookie holding the bearer credential.
pub const COOKIE_NAME: &str = "auth_token";

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "auth_token";

#[cfg(feature = "hydrate")]
const COOKIE_EXPIRES_DAYS: u32 = 7;

/// Read the token, migrating any legacy localStorage copy into the cookie.
/// Returns `None` when no credential is stored; never fails.
pub fn get() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = read_cookie() {
            return Some(token);
        }
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let token = storage.get_item(STORAGE_KEY).ok().flatten()?;
        if token.is_empty() {
            return None;
        }
        log::debug!("migrating auth token from localStorage to cookie");
        save(&token);
        let _ = storage.remove_item(STORAGE_KEY);
        Some(token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the token to the cookie with a rolling expiry.
pub fn save(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = html_document() else {
            return;
        };
        let expires = js_sys::Date::new_0();
        expires.set_time(expires.get_time() + f64::from(COOKIE_EXPIRES_DAYS) * 86_400_000.0);
        let expires = String::from(expires.to_utc_string());
        let _ = document.set_cookie(&set_cookie_string(COOKIE_NAME, token, &expires));
        log::debug!("auth token saved, expires {expires}");
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Clear the token from both cookie and localStorage. Idempotent.
pub fn remove() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(document) = html_document() {
            let _ = document.set_cookie(&clear_cookie_string(COOKIE_NAME));
        }
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.remove_item(STORAGE_KEY);
        }
        log::debug!("auth token removed");
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(feature = "hydrate")]
fn read_cookie() -> Option<String> {
    let cookies = html_document()?.cookie().ok()?;
    cookie_value(&cookies, COOKIE_NAME).map(str::to_owned)
}

/// Find the value of `name` in a `document.cookie` string.
/// An empty value counts as absent.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_value<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .filter(|value| !value.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn set_cookie_string(name: &str, value: &str, expires: &str) -> String {
    format!("{name}={value};expires={expires};path=/;SameSite=Lax;Secure")
}

#[cfg(any(test, feature = "hydrate"))]
fn clear_cookie_string(name: &str) -> String {
    format!("{name}=;expires=Thu, 01 Jan 1970 00:00:00 GMT;path=/;SameSite=Lax;Secure")
}
