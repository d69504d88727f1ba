use super::*;
use serde_json::json;

// =============================================================
// Envelope invariants
// =============================================================

#[test]
fn ok_envelope_has_data_and_no_error() {
    let env = Envelope::ok(json!({"x": 1}), Some("done".to_owned()));
    assert!(env.success);
    assert_eq!(env.data, Some(json!({"x": 1})));
    assert!(env.error.is_none());
    assert_eq!(env.message.as_deref(), Some("done"));
}

#[test]
fn fail_envelope_has_error_and_no_data() {
    let env: Envelope<Value> = Envelope::fail("boom");
    assert!(!env.success);
    assert!(env.data.is_none());
    assert_eq!(env.error.as_deref(), Some("boom"));
}

#[test]
fn into_data_is_none_on_failure() {
    let env: Envelope<Value> = Envelope::fail("nope");
    assert!(env.into_data().is_none());
}

// =============================================================
// Body unwrapping
// =============================================================

#[test]
fn unwrap_body_prefers_nested_data() {
    let (data, message) = unwrap_body(json!({
        "message": "ok",
        "data": {"tasks": []}
    }));
    assert_eq!(data, json!({"tasks": []}));
    assert_eq!(message.as_deref(), Some("ok"));
}

#[test]
fn unwrap_body_falls_back_to_whole_body() {
    let (data, message) = unwrap_body(json!({
        "message": "登录成功",
        "user": {"uuid": "u1"},
        "token": "t"
    }));
    assert_eq!(data["user"]["uuid"], "u1");
    assert_eq!(data["token"], "t");
    assert_eq!(message.as_deref(), Some("登录成功"));
}

#[test]
fn unwrap_body_without_message_yields_none() {
    let (data, message) = unwrap_body(json!({"uuid": "u1"}));
    assert_eq!(data, json!({"uuid": "u1"}));
    assert!(message.is_none());
}

#[test]
fn unwrap_body_handles_non_object_payload() {
    let (data, message) = unwrap_body(json!([1, 2, 3]));
    assert_eq!(data, json!([1, 2, 3]));
    assert!(message.is_none());
}

// =============================================================
// Error extraction
// =============================================================

#[test]
fn error_from_body_prefers_error_field() {
    let body = json!({"error": "用户名或密码错误"});
    assert_eq!(error_from_body(Some(&body), 401), "用户名或密码错误");
}

#[test]
fn error_from_body_falls_back_to_message_field() {
    let body = json!({"message": "not allowed"});
    assert_eq!(error_from_body(Some(&body), 403), "not allowed");
}

#[test]
fn error_from_body_falls_back_to_status() {
    assert_eq!(error_from_body(None, 500), "Error: 500");
    assert_eq!(error_from_body(Some(&json!({})), 404), "Error: 404");
}

// =============================================================
// Typed decoding
// =============================================================

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Ping {
    pong: bool,
}

#[test]
fn decode_success_produces_typed_payload() {
    let env = Envelope::ok(json!({"pong": true}), None).decode::<Ping>();
    assert!(env.success);
    assert_eq!(env.data, Some(Ping { pong: true }));
}

#[test]
fn decode_mismatch_becomes_parse_failure() {
    let env = Envelope::ok(json!({"pong": "yes"}), None).decode::<Ping>();
    assert!(!env.success);
    assert_eq!(env.error.as_deref(), Some(PARSE_ERROR));
}

#[test]
fn decode_preserves_failure() {
    let env = Envelope::fail("down").decode::<Ping>();
    assert!(!env.success);
    assert_eq!(env.error.as_deref(), Some("down"));
}
