use super::*;
use serde_json::json;

fn raw(value: Value) -> RawUser {
    RawUser(value)
}

// =============================================================
// uuid requirement
// =============================================================

#[test]
fn missing_uuid_is_rejected() {
    assert!(normalize(&raw(json!({"username": "lin"}))).is_none());
}

#[test]
fn empty_uuid_is_rejected() {
    assert!(normalize(&raw(json!({"uuid": "", "username": "lin"}))).is_none());
}

#[test]
fn non_object_payload_is_rejected() {
    assert!(normalize(&raw(json!("u1"))).is_none());
    assert!(normalize(&raw(json!(null))).is_none());
    assert!(normalize(&raw(json!([1, 2]))).is_none());
}

#[test]
fn uuid_alone_is_enough() {
    let user = normalize(&raw(json!({"uuid": "u1"}))).unwrap();
    assert_eq!(user.uuid, "u1");
    assert!(user.username.is_none());
    assert_eq!(user.user_type, UserType::User);
}

// =============================================================
// Field-name aliases
// =============================================================

#[test]
fn user_name_alias_maps_to_username() {
    let user = normalize(&raw(json!({"uuid": "u1", "user_name": "lin"}))).unwrap();
    assert_eq!(user.username.as_deref(), Some("lin"));
}

#[test]
fn canonical_username_wins_over_alias() {
    let user = normalize(&raw(json!({
        "uuid": "u1",
        "username": "primary",
        "user_name": "legacy"
    })))
    .unwrap();
    assert_eq!(user.username.as_deref(), Some("primary"));
}

#[test]
fn full_name_alias_maps_to_name() {
    let user = normalize(&raw(json!({"uuid": "u1", "full_name": "Lin Wei"}))).unwrap();
    assert_eq!(user.name.as_deref(), Some("Lin Wei"));
}

#[test]
fn name_falls_back_to_username() {
    let user = normalize(&raw(json!({"uuid": "u1", "username": "lin"}))).unwrap();
    assert_eq!(user.name.as_deref(), Some("lin"));
}

// =============================================================
// Avatar syncing
// =============================================================

#[test]
fn avatar_fills_missing_avatar_url() {
    let user = normalize(&raw(json!({"uuid": "u1", "avatar": "/a.png"}))).unwrap();
    assert_eq!(user.avatar.as_deref(), Some("/a.png"));
    assert_eq!(user.avatar_url.as_deref(), Some("/a.png"));
}

#[test]
fn avatar_url_fills_missing_avatar() {
    let user = normalize(&raw(json!({"uuid": "u1", "avatar_url": "/b.png"}))).unwrap();
    assert_eq!(user.avatar.as_deref(), Some("/b.png"));
    assert_eq!(user.avatar_url.as_deref(), Some("/b.png"));
}

#[test]
fn distinct_avatar_fields_are_left_alone() {
    let user = normalize(&raw(json!({
        "uuid": "u1",
        "avatar": "/a.png",
        "avatar_url": "/b.png"
    })))
    .unwrap();
    assert_eq!(user.avatar.as_deref(), Some("/a.png"));
    assert_eq!(user.avatar_url.as_deref(), Some("/b.png"));
}

// =============================================================
// user_type fallback
// =============================================================

#[test]
fn known_user_types_parse() {
    for (text, expected) in [
        ("worker", UserType::Worker),
        ("employer", UserType::Employer),
        ("admin", UserType::Admin),
    ] {
        let user = normalize(&raw(json!({"uuid": "u1", "user_type": text}))).unwrap();
        assert_eq!(user.user_type, expected);
    }
}

#[test]
fn unknown_user_type_falls_back() {
    let user = normalize(&raw(json!({"uuid": "u1", "user_type": "moderator"}))).unwrap();
    assert_eq!(user.user_type, UserType::User);
}

// =============================================================
// Extra fields and settings blocks
// =============================================================

#[test]
fn unknown_fields_are_preserved_in_extra() {
    let user = normalize(&raw(json!({
        "uuid": "u1",
        "bio": "carpenter",
        "hourly_rate": 35.0
    })))
    .unwrap();
    assert_eq!(user.extra["bio"], "carpenter");
    assert_eq!(user.extra["hourly_rate"], 35.0);
}

#[test]
fn settings_blocks_map_to_dedicated_fields() {
    let user = normalize(&raw(json!({
        "uuid": "u1",
        "notification_preferences": {"email": true},
        "privacy_settings": {"show_profile": false}
    })))
    .unwrap();
    assert_eq!(user.notification_preferences.unwrap()["email"], true);
    assert_eq!(user.privacy_settings.unwrap()["show_profile"], false);
    assert!(user.extra.is_empty());
}

#[test]
fn null_settings_blocks_are_treated_as_absent() {
    let user = normalize(&raw(json!({"uuid": "u1", "notification_preferences": null}))).unwrap();
    assert!(user.notification_preferences.is_none());
}

// =============================================================
// Round-trip and merging
// =============================================================

#[test]
fn to_raw_then_normalize_is_stable() {
    let user = normalize(&raw(json!({
        "uuid": "u1",
        "username": "lin",
        "user_type": "worker",
        "avatar_url": "/a.png",
        "bio": "carpenter"
    })))
    .unwrap();
    let again = normalize(&user.to_raw()).unwrap();
    assert_eq!(again, user);
}

#[test]
fn merge_raw_overlays_top_level_fields() {
    let base = raw(json!({"uuid": "u1", "username": "old", "bio": "x"}));
    let merged = merge_raw(&base, &json!({"username": "new"}));
    assert_eq!(merged.0["username"], "new");
    assert_eq!(merged.0["uuid"], "u1");
    assert_eq!(merged.0["bio"], "x");
}

#[test]
fn merge_raw_with_non_object_partial_is_a_no_op() {
    let base = raw(json!({"uuid": "u1"}));
    let merged = merge_raw(&base, &json!("oops"));
    assert_eq!(merged, base);
}

#[test]
fn display_name_prefers_name_then_username() {
    let named = normalize(&raw(json!({"uuid": "u1", "name": "Lin Wei", "username": "lin"}))).unwrap();
    assert_eq!(named.display_name(), "Lin Wei");
    let bare = normalize(&raw(json!({"uuid": "u1"}))).unwrap();
    assert_eq!(bare.display_name(), "用户");
}
