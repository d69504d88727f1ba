//! Uniform API response envelope.
//!
//! DESIGN
//! ======
//! Backend endpoints are inconsistent: some nest their payload under a
//! `data` key, others return fields at the top level, and error bodies may
//! or may not carry an `error` string. These helpers collapse all of that
//! into one `{success, data, error, message}` shape so pages never have to
//! care which endpoint they called. All functions here are pure; the
//! transport in [`super::http`] applies them to real responses.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Generic message used when a response body cannot be parsed as JSON.
pub const PARSE_ERROR: &str = "invalid response from server";

/// Uniform result of an API call.
///
/// Invariants: `success == false` implies `data` is `None` and `error` is
/// populated; `success == true` implies `data` is populated.
#[derive(Clone, Debug, PartialEq)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Successful envelope carrying a payload and an optional server message.
    pub fn ok(data: T, message: Option<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message,
        }
    }

    /// Failed envelope carrying an error message and no payload.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// The payload, consuming the envelope. `None` on failure.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl Envelope<Value> {
    /// Decode the JSON payload into a typed envelope.
    ///
    /// A payload that does not match `T` is a contract violation by the
    /// server and is reported as a parse failure, not a panic.
    pub fn decode<T: DeserializeOwned>(self) -> Envelope<T> {
        let Envelope {
            success,
            data,
            error,
            message,
        } = self;
        if !success {
            return Envelope {
                success,
                data: None,
                error,
                message,
            };
        }
        match data.map(serde_json::from_value::<T>) {
            Some(Ok(decoded)) => Envelope::ok(decoded, message),
            _ => Envelope::fail(PARSE_ERROR),
        }
    }
}

/// Split a 2xx response body into its payload and optional message.
///
/// If the body nests its payload under a `data` key, that value is the
/// payload; otherwise the whole body is. The top-level `message` string, if
/// any, is carried alongside either way.
pub fn unwrap_body(mut body: Value) -> (Value, Option<String>) {
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::to_owned);
    if let Some(object) = body.as_object_mut() {
        if let Some(nested) = object.remove("data") {
            return (nested, message);
        }
    }
    (body, message)
}

/// Extract a human-readable error from a non-2xx response.
///
/// Prefers the body's `error` string, then its `message` string, then falls
/// back to the HTTP status code.
pub fn error_from_body(body: Option<&Value>, status: u16) -> String {
    body.and_then(|b| {
        b.get("error")
            .or_else(|| b.get("message"))
            .and_then(Value::as_str)
    })
    .map_or_else(|| format!("Error: {status}"), str::to_owned)
}
