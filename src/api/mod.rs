//! Backend API seam for session management.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthBackend` is what the session store talks to; `ApiClient` is the
//! reqwest implementation the CLI and the browser client share. Views reuse
//! the same `ApiClient` for their own calls so they inherit the bearer
//! credential the store installs.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `BackendError`. The store, not this module, decides
//! which of them are credential problems and which are transient.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{AuthResponse, RegisterRequest};

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("backend rejected request ({status}): {}", message.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, message: Option<String> },
    /// The request never produced a response (DNS, refused, timeout, CORS).
    #[error("backend unreachable: {0}")]
    Transport(String),
    /// A success status with a body this client cannot use.
    #[error("unexpected backend response: {0}")]
    UnexpectedResponse(String),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
}

impl BackendError {
    /// Message the backend attached to a rejection, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the backend refused the bearer token on an authenticated call
    /// (401 or 403). The route guard keeps each role off pages it cannot use,
    /// so either status means the token no longer carries its rights.
    #[must_use]
    pub fn rejects_token(&self) -> bool {
        matches!(self, Self::Rejected { status: 401 | 403, .. })
    }

    /// Whether this failure says nothing about the credentials themselves.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Rejected { status, .. } => *status >= 500,
            Self::Transport(_) => true,
            Self::UnexpectedResponse(_) | Self::HttpClientBuild(_) => false,
        }
    }
}

/// Calls the session store needs from the backend.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a token and identity (`POST /auth/login`).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the credentials are rejected, the backend
    /// is unreachable, or the payload carries no usable token.
    async fn login(&self, email: &str, senha: &str) -> Result<AuthResponse, BackendError>;

    /// Resolve the identity behind `token` (`POST /auth/refresh`). The
    /// returned payload may carry a renewed token.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the token is rejected, the backend is
    /// unreachable, or the payload carries no usable token.
    async fn current_user(&self, token: &str) -> Result<AuthResponse, BackendError>;

    /// Create a reader account (`POST /auth/register`), returning the
    /// backend's confirmation message.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the backend refuses the registration or
    /// is unreachable.
    async fn register(&self, request: &RegisterRequest) -> Result<Option<String>, BackendError>;

    /// Tell the backend the session ended (`POST /auth/logout`).
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the notice could not be delivered.
    async fn notify_logout(&self) -> Result<(), BackendError>;

    /// Install (or remove) the bearer credential used by every later request.
    fn set_bearer(&self, token: Option<&str>);
}
