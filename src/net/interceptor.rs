//! Request middleware applied to every outgoing API request.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` builds a `reqwest::Request`, runs it through each registered
//! interceptor in order, then executes it. `AuthInterceptor` is the only
//! interceptor the portal installs by default.

#[cfg(test)]
#[path = "interceptor_test.rs"]
mod interceptor_test;

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::util::storage::KeyValueStore;

/// Path suffix of the one endpoint that must never carry credentials.
pub const LOGIN_PATH: &str = "/auth/login";

/// Rewrites a request before it is sent.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: reqwest::Request) -> reqwest::Request;
}

/// Attaches `Authorization: Bearer <token>` from storage.
pub struct AuthInterceptor {
    storage: Arc<dyn KeyValueStore>,
    token_key: String,
}

impl AuthInterceptor {
    pub fn new(storage: Arc<dyn KeyValueStore>, token_key: impl Into<String>) -> Self {
        Self { storage, token_key: token_key.into() }
    }

    fn token(&self) -> Option<String> {
        self.storage
            .get(&self.token_key)
            .filter(|t| !t.is_empty())
    }
}

impl RequestInterceptor for AuthInterceptor {
    fn intercept(&self, mut request: reqwest::Request) -> reqwest::Request {
        if is_login_request(&request) {
            return request;
        }
        let Some(token) = self.token() else {
            return request;
        };
        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored auth token is not a valid header value; sending without it");
            }
        }
        request
    }
}

fn is_login_request(request: &reqwest::Request) -> bool {
    request.url().path().trim_end_matches('/').ends_with(LOGIN_PATH)
}
