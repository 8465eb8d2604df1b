use super::*;

fn client() -> ApiClient {
    ApiClient::new(&ApiConfig::new("http://127.0.0.1:8081/api").unwrap()).unwrap()
}

fn authorization(request: &reqwest::Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    let api = client();
    assert_eq!(api.endpoint("/auth/login"), "http://127.0.0.1:8081/api/auth/login");
    assert_eq!(api.endpoint("public/editais"), "http://127.0.0.1:8081/api/public/editais");
}

#[test]
fn base_url_is_exposed() {
    assert_eq!(client().base_url(), "http://127.0.0.1:8081/api");
}

// =============================================================
// Bearer credential
// =============================================================

#[test]
fn requests_carry_no_authorization_by_default() {
    let api = client();
    assert!(!api.has_bearer());
    let request = api.get("/artigos").build().unwrap();
    assert_eq!(authorization(&request), None);
}

#[test]
fn set_bearer_attaches_header_to_later_requests() {
    let api = client();
    api.set_bearer(Some("T"));
    assert!(api.has_bearer());
    let get = api.get("/artigos").build().unwrap();
    let post = api.post("/editais").build().unwrap();
    assert_eq!(authorization(&get), Some("Bearer T"));
    assert_eq!(authorization(&post), Some("Bearer T"));
}

#[test]
fn clearing_bearer_does_not_touch_already_built_requests() {
    let api = client();
    api.set_bearer(Some("T"));
    let in_flight = api.get("/artigos").build().unwrap();
    api.set_bearer(None);
    let after = api.get("/artigos").build().unwrap();
    assert_eq!(authorization(&in_flight), Some("Bearer T"));
    assert_eq!(authorization(&after), None);
}

#[test]
fn invalid_token_installs_no_bearer() {
    let api = client();
    api.set_bearer(Some("bad\ntoken"));
    assert!(!api.has_bearer());
}

#[test]
fn bearer_header_is_sensitive() {
    let value = bearer_header("T").unwrap();
    assert!(value.is_sensitive());
    assert_eq!(value.to_str().unwrap(), "Bearer T");
}
