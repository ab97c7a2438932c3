//! REST API client for the portal backend.
//!
//! ARCHITECTURE
//! ============
//! One `reqwest::Client` against a single base URL. Every call builds a
//! request, passes it through the registered interceptors, executes it once
//! and decodes the JSON body. No retries, no caching, no de-duplication.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx statuses come back as `ApiError::Status` with the raw body so
//! callers can decide what to show; transport failures are `Transport`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::interceptor::{AuthInterceptor, RequestInterceptor};
use super::types::{ApiError, LoginRequest, LoginResponse, ProfileUpdate, SignupRequest, User};
use crate::config::Timeouts;
use crate::util::storage::KeyValueStore;

pub const LOGIN_ENDPOINT: &str = "auth/login";
pub const SIGNUP_ENDPOINT: &str = "auth/signup";
pub const LOGOUT_ENDPOINT: &str = "logout";
pub const PROFILE_ENDPOINT: &str = "users/me";

/// Account operations the page controllers depend on.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait AuthApi {
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError>;
    async fn signup(&self, payload: &SignupRequest) -> Result<User, ApiError>;
    async fn update_profile(&self, details: &ProfileUpdate) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
}

struct TokenSlot {
    storage: Arc<dyn KeyValueStore>,
    key: String,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
    token: Option<TokenSlot>,
}

impl ApiClient {
    /// Build a client for `base_url` (trailing `/` ignored).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeouts: Timeouts) -> Result<Self, ApiError> {
        let http = build_http_client(timeouts)?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            interceptors: Vec::new(),
            token: None,
        })
    }

    /// Append an interceptor; interceptors run in registration order.
    #[must_use]
    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Install bearer-token handling backed by `storage[token_key]`.
    ///
    /// Login responses carrying a `token` write it; logout removes it; the
    /// installed [`AuthInterceptor`] reads it for every other request.
    #[must_use]
    pub fn with_auth(self, storage: Arc<dyn KeyValueStore>, token_key: &str) -> Self {
        let interceptor = Arc::new(AuthInterceptor::new(Arc::clone(&storage), token_key));
        let mut client = self.with_interceptor(interceptor);
        client.token = Some(TokenSlot { storage, key: token_key.to_owned() });
        client
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a relative endpoint.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// `GET {base}/{endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::GET, endpoint, None).await
    }

    /// `POST {base}/{endpoint}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or undecodable body.
    pub async fn post<B, T>(&self, endpoint: &str, data: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, endpoint, Some(data)).await
    }

    /// `PUT {base}/{endpoint}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or undecodable body.
    pub async fn put<B, T>(&self, endpoint: &str, data: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, endpoint, Some(data)).await
    }

    /// `PATCH {base}/{endpoint}` with a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or undecodable body.
    pub async fn patch<B, T>(&self, endpoint: &str, data: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PATCH, endpoint, Some(data)).await
    }

    /// `DELETE {base}/{endpoint}`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or undecodable body.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send::<(), T>(Method::DELETE, endpoint, None).await
    }

    /// `POST /auth/login`. Credentials are sent exactly as given.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a user.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
        let resp: LoginResponse = self.post(LOGIN_ENDPOINT, &body).await?;
        if let Some(token) = resp.token.as_deref() {
            self.store_token(token);
        }
        Ok(resp.user)
    }

    /// `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a user.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<User, ApiError> {
        self.post(SIGNUP_ENDPOINT, payload).await
    }

    /// `PUT /users/me`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a user.
    pub async fn update_profile(&self, details: &ProfileUpdate) -> Result<User, ApiError> {
        self.put(PROFILE_ENDPOINT, details).await
    }

    /// `POST /logout` with an empty object body, then drop the stored token.
    ///
    /// The token is removed even when the request fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        // Any 2xx body is accepted; the server's reply carries nothing we keep.
        let result: Result<serde::de::IgnoredAny, ApiError> = self
            .post(LOGOUT_ENDPOINT, &serde_json::json!({}))
            .await;
        self.clear_token();
        result.map(|_| ())
    }

    async fn send<B, T>(&self, method: Method, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        let mut builder = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let mut request = builder
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))?;
        for interceptor in &self.interceptors {
            request = interceptor.intercept(request);
        }

        tracing::debug!(%method, %url, "api request");
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            tracing::warn!(%method, %url, status, "api request rejected");
            return Err(ApiError::Status { status, body: text });
        }

        decode_body(&text)
    }

    fn store_token(&self, token: &str) {
        let Some(slot) = &self.token else {
            return;
        };
        if let Err(e) = slot.storage.set(&slot.key, token) {
            tracing::warn!(error = %e, "failed to persist auth token");
        }
    }

    fn clear_token(&self) {
        let Some(slot) = &self.token else {
            return;
        };
        if let Err(e) = slot.storage.remove(&slot.key) {
            tracing::warn!(error = %e, "failed to clear auth token");
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<User, ApiError> {
        ApiClient::login(self, email, password).await
    }

    async fn signup(&self, payload: &SignupRequest) -> Result<User, ApiError> {
        ApiClient::signup(self, payload).await
    }

    async fn update_profile(&self, details: &ProfileUpdate) -> Result<User, ApiError> {
        ApiClient::update_profile(self, details).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        ApiClient::logout(self).await
    }
}

/// Decode a JSON response body; an empty body reads as `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let raw = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(timeouts: Timeouts) -> Result<reqwest::Client, ApiError> {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| ApiError::HttpClientBuild(e.to_string()))
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(timeouts: Timeouts) -> Result<reqwest::Client, ApiError> {
    // Browser fetch owns timeouts.
    let _ = timeouts;
    reqwest::Client::builder()
        .build()
        .map_err(|e| ApiError::HttpClientBuild(e.to_string()))
}
