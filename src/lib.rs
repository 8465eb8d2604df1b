//! # theclub
//!
//! Session and access-control core for The Club, the university newspaper's
//! web front end. All content, accounts and token issuance live in the
//! newspaper's HTTP API; this crate owns the client side of signing in:
//!
//! - [`session::SessionStore`] holds the token and identity, persists the
//!   token, and installs it as the bearer credential on [`api::ApiClient`].
//! - [`guard::decide`] turns a session snapshot and a route's role
//!   requirement into allow / redirect-to-login / redirect-home.
//! - [`routes`] lists the front end's pages and their requirements.
//!
//! The `client` (Leptos) and `cli` packages are the two consumers.

pub mod api;
pub mod config;
pub mod error;
pub mod guard;
pub mod routes;
pub mod session;

pub use api::{ApiClient, AuthBackend, BackendError};
pub use config::ApiConfig;
pub use error::{FailureKind, LoginFailure};
pub use guard::{Decision, RouteRequirement, check, decide};
pub use session::{HydrateOutcome, LoginOutcome, Role, Session, SessionStore};
