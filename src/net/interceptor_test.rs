use reqwest::{Method, Request, Url};

use super::*;
use crate::util::storage::MemoryStorage;

fn request(method: Method, url: &str) -> Request {
    Request::new(method, Url::parse(url).unwrap())
}

fn interceptor_with_token(token: Option<&str>) -> AuthInterceptor {
    let storage = Arc::new(MemoryStorage::new());
    if let Some(token) = token {
        storage.set("auth_token", token).unwrap();
    }
    AuthInterceptor::new(storage, "auth_token")
}

#[test]
fn attaches_bearer_token_when_present() {
    let interceptor = interceptor_with_token(Some("abc123"));
    let req = interceptor.intercept(request(Method::GET, "http://api.test/api/users/me"));
    assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer abc123");
}

#[test]
fn skips_login_endpoint_even_with_token() {
    let interceptor = interceptor_with_token(Some("abc123"));
    let req = interceptor.intercept(request(Method::POST, "http://api.test/api/auth/login"));
    assert!(req.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn signup_endpoint_still_gets_token() {
    let interceptor = interceptor_with_token(Some("abc123"));
    let req = interceptor.intercept(request(Method::POST, "http://api.test/api/auth/signup"));
    assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer abc123");
}

#[test]
fn forwards_unmodified_without_token() {
    let interceptor = interceptor_with_token(None);
    let req = interceptor.intercept(request(Method::GET, "http://api.test/api/data"));
    assert!(req.headers().is_empty());
}

#[test]
fn empty_token_is_treated_as_absent() {
    let interceptor = interceptor_with_token(Some(""));
    let req = interceptor.intercept(request(Method::GET, "http://api.test/api/data"));
    assert!(req.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn invalid_header_token_is_dropped() {
    let interceptor = interceptor_with_token(Some("bad\ntoken"));
    let req = interceptor.intercept(request(Method::GET, "http://api.test/api/data"));
    assert!(req.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn replaces_existing_authorization_header() {
    let interceptor = interceptor_with_token(Some("fresh"));
    let mut req = request(Method::GET, "http://api.test/api/data");
    req.headers_mut()
        .insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));
    let req = interceptor.intercept(req);
    assert_eq!(req.headers().get(AUTHORIZATION).unwrap(), "Bearer fresh");
}
