use super::*;

// =============================================================
// Cookie string round-trip
// =============================================================

#[test]
fn saved_cookie_string_parses_back_to_the_token() {
    let cookie = set_cookie_string(COOKIE_NAME, "jwt-abc123", "Fri, 04 Sep 2026 00:00:00 GMT");
    assert_eq!(cookie_value(&cookie, COOKIE_NAME), Some("jwt-abc123"));
}

#[test]
fn set_cookie_string_pins_path_and_same_site() {
    let cookie = set_cookie_string(COOKIE_NAME, "t", "Fri, 04 Sep 2026 00:00:00 GMT");
    assert!(cookie.contains("path=/"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Secure"));
}

#[test]
fn cleared_cookie_string_parses_to_absent() {
    let cookie = clear_cookie_string(COOKIE_NAME);
    assert_eq!(cookie_value(&cookie, COOKIE_NAME), None);
}

#[test]
fn clear_cookie_string_matches_set_cookie_attributes() {
    // Deleting with different path/SameSite attributes silently fails in
    // browsers, so the two strings must agree.
    let cookie = clear_cookie_string(COOKIE_NAME);
    assert!(cookie.contains("path=/"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("expires=Thu, 01 Jan 1970"));
}

// =============================================================
// Cookie header parsing
// =============================================================

#[test]
fn cookie_value_finds_token_among_other_cookies() {
    let header = "theme=dark; auth_token=jwt-abc; lang=zh-CN";
    assert_eq!(cookie_value(header, COOKIE_NAME), Some("jwt-abc"));
}

#[test]
fn cookie_value_ignores_name_prefix_collisions() {
    let header = "auth_token_backup=old; other=1";
    assert_eq!(cookie_value(header, COOKIE_NAME), None);
}

#[test]
fn cookie_value_absent_in_empty_header() {
    assert_eq!(cookie_value("", COOKIE_NAME), None);
}

#[test]
fn cookie_value_treats_empty_value_as_absent() {
    assert_eq!(cookie_value("auth_token=; theme=dark", COOKIE_NAME), None);
}
