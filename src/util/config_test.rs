use super::*;

#[test]
fn base_url_never_points_at_a_developer_host() {
    let url = api_base_url();
    assert!(!url.contains("localhost"));
    assert!(!url.contains("127.0.0.1"));
}

#[test]
fn base_url_defaults_to_same_origin_api() {
    if option_env!("WORKLINK_API_URL").is_none() {
        assert_eq!(api_base_url(), "/api");
    }
}
