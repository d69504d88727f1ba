use super::*;
use serde_json::json;

#[test]
fn task_endpoint_formats_expected_path() {
    assert_eq!(task_endpoint("t123"), "/tasks/t123");
}

#[test]
fn task_apply_endpoint_formats_expected_path() {
    assert_eq!(task_apply_endpoint("t123"), "/tasks/t123/apply");
}

#[test]
fn user_reviews_endpoint_formats_expected_path() {
    assert_eq!(user_reviews_endpoint("u9"), "/reviews/user/u9");
}

#[test]
fn tasks_endpoint_without_filters_has_no_query() {
    assert_eq!(tasks_endpoint(&[]), "/tasks");
}

#[test]
fn tasks_endpoint_joins_filters() {
    let path = tasks_endpoint(&[
        ("status", "recruiting".to_owned()),
        ("page", "2".to_owned()),
    ]);
    assert_eq!(path, "/tasks?status=recruiting&page=2");
}

#[test]
fn review_payload_uses_backend_field_names() {
    let payload = review_payload("t1", "w1", 5, "合作愉快");
    assert_eq!(payload["rating"], 5);
    assert_eq!(payload["comment"], "合作愉快");
    assert_eq!(payload["task_uuid"], "t1");
    assert_eq!(payload["reviewee_uuid"], "w1");
}

#[test]
fn unwrap_task_extracts_nested_task() {
    let envelope = Envelope::ok(
        json!({"task": {"uuid": "t1", "title": "Move boxes"}}),
        Some("ok".to_owned()),
    );
    let task = unwrap_task(envelope);
    assert!(task.success);
    assert_eq!(task.data.unwrap().uuid, "t1");
    assert_eq!(task.message.as_deref(), Some("ok"));
}

#[test]
fn unwrap_task_propagates_failure() {
    let task = unwrap_task(Envelope::fail("denied"));
    assert!(!task.success);
    assert_eq!(task.error.as_deref(), Some("denied"));
}

#[test]
fn unwrap_task_rejects_flat_task_body() {
    // Endpoints returning the task flat would be a contract change; make
    // sure it fails loudly as a parse error instead of half-decoding.
    let task = unwrap_task(Envelope::ok(json!({"uuid": "t1", "title": "x"}), None));
    assert!(!task.success);
}
