//! Wire DTOs for the newspaper backend's `/auth` endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's Portuguese contract (`senha`, `nome`,
//! `tipo`, `erro`). Everything past the token is optional so a partial payload
//! still yields a session, while a missing or blank token fails closed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::session::types::{Identity, Role, deserialize_optional_role};

use super::BackendError;

/// Body of `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub senha: &'a str,
}

/// Body of `POST /auth/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub token: &'a str,
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Payload returned by login and refresh.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_role")]
    pub tipo: Option<Role>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

impl AuthResponse {
    /// Identity described by this payload. Display name falls back to the
    /// email when `nome` is absent.
    #[must_use]
    pub fn identity(&self) -> Identity {
        let display_name = self
            .nome
            .clone()
            .filter(|nome| !nome.trim().is_empty())
            .or_else(|| self.email.clone())
            .unwrap_or_default();
        Identity { id: self.id, display_name, email: self.email.clone(), role: self.tipo }
    }
}

/// Payload returned by `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub(crate) struct RegisterResponse {
    #[serde(default)]
    pub msg: Option<String>,
}

/// Error bodies: auth endpoints send `{ "erro": .. }`, the global handler
/// sends `{ "error": .., "message": .. }`.
#[derive(Debug, Default, Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    erro: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract a displayable message from an error body, if it carries one.
#[must_use]
pub fn parse_error_message(body: &str) -> Option<String> {
    let payload: ErrorPayload = serde_json::from_str(body).ok()?;
    payload
        .erro
        .or(payload.message)
        .map(|msg| msg.trim().to_owned())
        .filter(|msg| !msg.is_empty())
}

/// Decode a login/refresh body, rejecting payloads without a usable token.
///
/// # Errors
///
/// Returns [`BackendError::UnexpectedResponse`] if the body is not an auth
/// payload or its token is blank.
pub fn parse_auth_response(body: &str) -> Result<AuthResponse, BackendError> {
    let response: AuthResponse =
        serde_json::from_str(body).map_err(|e| BackendError::UnexpectedResponse(e.to_string()))?;
    if response.token.trim().is_empty() {
        return Err(BackendError::UnexpectedResponse("blank token".to_owned()));
    }
    Ok(response)
}
