//! Failure reasons surfaced to views.
//!
//! `Unauthenticated` and `Forbidden` are not here on purpose: they are routing
//! outcomes (`guard::Decision`), never errors.

use std::fmt;

use crate::api::BackendError;

/// Message shown when the backend gives no reason of its own.
pub const DEFAULT_LOGIN_ERROR: &str = "Email ou senha incorretos. Tente novamente.";

/// Message shown when a registration fails without a backend reason.
pub const DEFAULT_REGISTER_ERROR: &str = "Não foi possível concluir o cadastro. Tente novamente.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend refused the credentials or the request.
    CredentialRejected,
    /// The call could not complete (network, timeout, server error).
    TransientNetworkError,
}

/// A failed login or registration, with a message fit for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl LoginFailure {
    /// Classify a backend error, preferring the backend's own wording.
    #[must_use]
    pub fn from_backend(err: &BackendError, fallback: &str) -> Self {
        let kind = if err.is_transient() {
            FailureKind::TransientNetworkError
        } else {
            FailureKind::CredentialRejected
        };
        let message = err.backend_message().unwrap_or(fallback).to_owned();
        Self { kind, message }
    }

    /// Rejected locally before any request was made.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self { kind: FailureKind::CredentialRejected, message: message.into() }
    }
}

impl fmt::Display for LoginFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for LoginFailure {}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
