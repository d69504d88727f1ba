use super::*;
use serde_json::json;

// =============================================================
// Stored preference flags
// =============================================================

#[test]
fn flag_reads_stored_booleans() {
    let stored = json!({"task_updates": false, "marketing": true});
    assert!(!flag(Some(&stored), "task_updates", true));
    assert!(flag(Some(&stored), "marketing", false));
}

#[test]
fn flag_falls_back_on_missing_or_untyped_values() {
    let stored = json!({"task_updates": "yes"});
    assert!(flag(Some(&stored), "task_updates", true));
    assert!(flag(Some(&stored), "payment_alerts", true));
    assert!(!flag(None, "payment_alerts", false));
}

// =============================================================
// Password change validation
// =============================================================

#[test]
fn short_new_password_is_rejected() {
    assert_eq!(
        password_change_error("abc12", "abc12"),
        Some("新密码至少需要6个字符")
    );
}

#[test]
fn mismatched_confirmation_is_rejected() {
    assert_eq!(
        password_change_error("secret123", "secret124"),
        Some("两次输入的新密码不一致")
    );
}

#[test]
fn matching_password_of_sufficient_length_passes() {
    assert_eq!(password_change_error("secret123", "secret123"), None);
}

#[test]
fn length_is_counted_in_characters_not_bytes() {
    // Six CJK characters are more than six bytes but still a valid length.
    assert_eq!(password_change_error("密码密码密码", "密码密码密码"), None);
}
