//! reqwest client for the newspaper backend.
//!
//! DESIGN
//! ======
//! The bearer header is swapped as a whole under a lock when the token
//! changes. Requests read it once when they are built, so a request started
//! before a logout keeps the header it was built with and nothing is
//! rewritten mid-flight.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::RwLock;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{LoginRequest, RefreshRequest, RegisterRequest, RegisterResponse, parse_auth_response, parse_error_message};
use super::{AuthBackend, AuthResponse, BackendError};
use crate::config::ApiConfig;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer: RwLock<Option<HeaderValue>>,
}

impl ApiClient {
    /// Build a client for `config.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, BackendError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(std::time::Duration::from_secs(config.timeouts.connect_secs));
        let http = builder
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), bearer: RwLock::new(None) })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Whether a bearer credential is currently installed.
    #[must_use]
    pub fn has_bearer(&self) -> bool {
        self.bearer
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_some()
    }

    /// `GET` request carrying the current bearer credential.
    #[must_use]
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.get(self.endpoint(path)))
    }

    /// `POST` request carrying the current bearer credential.
    #[must_use]
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorize(self.http.post(self.endpoint(path)))
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self
            .bearer
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone();
        match bearer {
            Some(value) => builder.header(AUTHORIZATION, value),
            None => builder,
        }
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<String, BackendError> {
        send(self.post(path).json(body)).await
    }

    /// `GET` a JSON resource with the current credential.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] for transport failures, non-success
    /// statuses, or bodies that do not decode as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let text = send(self.get(path)).await?;
        serde_json::from_str(&text).map_err(|e| BackendError::UnexpectedResponse(e.to_string()))
    }
}

/// Send `request` and return the body of a 2xx response.
async fn send(request: reqwest::RequestBuilder) -> Result<String, BackendError> {
    let response = request
        .send()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let text = response
        .text()
        .await
        .map_err(|e| BackendError::Transport(e.to_string()))?;

    if !(200..300).contains(&status) {
        return Err(BackendError::Rejected { status, message: parse_error_message(&text) });
    }
    Ok(text)
}

/// Header value for `token`, or `None` if it cannot be sent as a header.
pub(crate) fn bearer_header(token: &str) -> Option<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).ok()?;
    value.set_sensitive(true);
    Some(value)
}

#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
impl AuthBackend for ApiClient {
    async fn login(&self, email: &str, senha: &str) -> Result<AuthResponse, BackendError> {
        let body = self.post_json("/auth/login", &LoginRequest { email, senha }).await?;
        parse_auth_response(&body)
    }

    async fn current_user(&self, token: &str) -> Result<AuthResponse, BackendError> {
        let body = self.post_json("/auth/refresh", &RefreshRequest { token }).await?;
        parse_auth_response(&body)
    }

    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, BackendError> {
        let body = self.post_json("/auth/register", request).await?;
        Ok(serde_json::from_str::<RegisterResponse>(&body)
            .ok()
            .and_then(|resp| resp.msg))
    }

    async fn notify_logout(&self) -> Result<(), BackendError> {
        self.post_json("/auth/logout", &serde_json::json!({})).await?;
        Ok(())
    }

    fn set_bearer(&self, token: Option<&str>) {
        let value = token.and_then(|token| {
            let header = bearer_header(token);
            if header.is_none() {
                tracing::warn!("token is not a valid header value; requests will be unauthenticated");
            }
            header
        });
        *self
            .bearer
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = value;
    }
}
