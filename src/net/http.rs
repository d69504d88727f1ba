//! HTTP transport producing the uniform envelope.
//!
//! Client-side (hydrate): real fetch calls via `gloo-net`, credentials
//! included so the session cookie rides along, bearer header attached when
//! a token is stored.
//! Server-side (SSR): stubs returning a failed envelope since these calls
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Network failures, non-2xx statuses, and unparseable bodies all collapse
//! into `Envelope::fail` — callers never see a raw exception. Failures are
//! surfaced as a toast unless the caller asked for a quiet request (the
//! session controller's silent verification does).

#![allow(clippy::unused_async)]

use serde_json::Value;

use super::envelope::{self, Envelope};
#[cfg(feature = "hydrate")]
use crate::state::notify;
#[cfg(feature = "hydrate")]
use crate::util::{config, token_store};

/// HTTP verbs used by the backend API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Whether a failed request should raise a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    Surface,
    Quiet,
}

/// Issue a JSON request against the backend and normalize the response.
pub async fn request(method: Method, path: &str, body: Option<&Value>) -> Envelope<Value> {
    request_with(method, path, body, OnError::Surface).await
}

/// [`request`] with control over failure surfacing.
pub async fn request_with(
    method: Method,
    path: &str,
    body: Option<&Value>,
    on_error: OnError,
) -> Envelope<Value> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let url = format!("{}{}", config::api_base_url(), path);
        log::debug!("{method:?} {url}");

        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        }
        .credentials(web_sys::RequestCredentials::Include);
        let builder = match token_store::get() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };

        let sent = match body {
            Some(json) => match builder.json(json) {
                Ok(req) => req.send().await,
                Err(e) => return failure(e.to_string(), on_error),
            },
            None => builder.send().await,
        };
        let response = match sent {
            Ok(response) => response,
            Err(e) => return failure(e.to_string(), on_error),
        };
        finish(response, on_error).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body, on_error);
        Envelope::fail("not available on server")
    }
}

/// Issue a multipart request (avatar upload). The content type is left to
/// the browser so the form boundary is set correctly.
#[cfg(feature = "hydrate")]
pub async fn request_multipart(path: &str, form: &web_sys::FormData) -> Envelope<Value> {
    use gloo_net::http::Request;

    let url = format!("{}{}", config::api_base_url(), path);
    log::debug!("POST (multipart) {url}");

    let builder = Request::post(&url).credentials(web_sys::RequestCredentials::Include);
    let builder = match token_store::get() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    };
    let request = match builder.body(form.clone()) {
        Ok(request) => request,
        Err(e) => return failure(e.to_string(), OnError::Surface),
    };
    match request.send().await {
        Ok(response) => finish(response, OnError::Surface).await,
        Err(e) => failure(e.to_string(), OnError::Surface),
    }
}

#[cfg(feature = "hydrate")]
async fn finish(response: gloo_net::http::Response, on_error: OnError) -> Envelope<Value> {
    let status = response.status();
    let parsed: Option<Value> = match response.text().await {
        Ok(text) => serde_json::from_str(&text).ok(),
        Err(_) => None,
    };

    if !response.ok() {
        let message = envelope::error_from_body(parsed.as_ref(), status);
        // Only an explicit 401 invalidates the stored credential.
        if status == 401 && token_store::get().is_some() {
            log::debug!("unauthorized with a stored token, removing it");
            token_store::remove();
        }
        return failure(message, on_error);
    }

    let Some(body) = parsed else {
        return failure(envelope::PARSE_ERROR.to_owned(), on_error);
    };
    let (data, message) = envelope::unwrap_body(body);
    Envelope::ok(data, message)
}

#[cfg(feature = "hydrate")]
fn failure(message: String, on_error: OnError) -> Envelope<Value> {
    if on_error == OnError::Surface {
        notify::error(&message);
    } else {
        log::debug!("quiet request failed: {message}");
    }
    Envelope::fail(message)
}
