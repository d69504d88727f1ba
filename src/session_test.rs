use super::*;

// =============================================================
// Credential payloads — the method field is fixed by the variant
// =============================================================

#[test]
fn password_login_payload_forces_username_method() {
    let creds = Credentials::Password {
        username: "lin".to_owned(),
        password: "secret123".to_owned(),
    };
    let payload = creds.login_payload();
    assert_eq!(payload["method"], "username");
    assert_eq!(payload["username"], "lin");
    assert_eq!(payload["password"], "secret123");
    assert!(payload.get("phone_number").is_none());
}

#[test]
fn phone_login_payload_forces_phone_method() {
    let creds = Credentials::Phone {
        phone_number: "13800138000".to_owned(),
        verification_code: "482913".to_owned(),
    };
    let payload = creds.login_payload();
    assert_eq!(payload["method"], "phone");
    assert_eq!(payload["phone_number"], "13800138000");
    assert_eq!(payload["verification_code"], "482913");
    assert!(payload.get("password").is_none());
}

#[test]
fn register_payload_adds_user_type_on_top_of_login_payload() {
    let creds = Credentials::Password {
        username: "lin".to_owned(),
        password: "secret123".to_owned(),
    };
    let payload = creds.register_payload(UserType::Worker);
    assert_eq!(payload["method"], "username");
    assert_eq!(payload["user_type"], "worker");
}

#[test]
fn register_payload_carries_employer_type() {
    let creds = Credentials::Phone {
        phone_number: "13800138000".to_owned(),
        verification_code: "482913".to_owned(),
    };
    let payload = creds.register_payload(UserType::Employer);
    assert_eq!(payload["user_type"], "employer");
    assert_eq!(payload["method"], "phone");
}
