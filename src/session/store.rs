//! Session store: the single owner of "who is using the application".
//!
//! ARCHITECTURE
//! ============
//! One `SessionStore` is built at startup and shared by reference with every
//! view and with the route guard. It is the only thing that mutates the
//! session, persists the token, or swaps the bearer credential on the backend
//! client.
//!
//! CONCURRENCY
//! ===========
//! Transitions apply in the order they complete, not the order they start:
//! whichever of two overlapping logins returns last is the session, and a
//! logout that completes after a login always wins. Logout clears local state
//! synchronously; the backend notice is a separate, later step, so a slow or
//! hung notice never keeps a session alive.
//!
//! `hydrate` is the exception. It captures the store's `generation` before
//! suspending and yields to any login, logout or expiry that lands first, so a
//! stale persisted token never overwrites a fresher session.
//! `cancel_pending_login` bumps a separate ticket so a view can drop a late
//! login without touching the current session. The mutex is never held across
//! an `.await`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns `Err` or panics for expected conditions. Outcomes are
//! enums; anything the backend says that we cannot use fails closed to
//! `Anonymous`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Mutex, MutexGuard};

use super::storage::TokenStorage;
use super::types::{Role, Session};
use crate::api::{ApiClient, AuthBackend, AuthResponse, BackendError, RegisterRequest};
use crate::error::{DEFAULT_LOGIN_ERROR, DEFAULT_REGISTER_ERROR, LoginFailure};

pub const MISSING_CREDENTIALS: &str = "Informe email e senha.";
pub const MISSING_REGISTRATION_FIELDS: &str = "Preencha nome, email e senha.";

/// Result of [`SessionStore::login`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session is now authenticated. The caller picks where to navigate.
    Success { role: Option<Role> },
    /// Session unchanged; `message` is fit for display.
    Failure(LoginFailure),
    /// The login was cancelled while in flight; the result was discarded.
    Superseded,
}

/// Why `hydrate` dropped a persisted token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClearReason {
    /// The backend refused the token (expired, revoked, malformed).
    Rejected,
    /// The backend could not be reached or answered with something unusable.
    Unverified,
    /// The persisted token could not be read.
    StorageUnreadable,
}

/// Result of [`SessionStore::hydrate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydrateOutcome {
    /// No token persisted; no network call was made.
    NoToken,
    /// The backend vouched for the persisted token.
    Restored { role: Option<Role> },
    /// The persisted token was discarded; session is anonymous.
    Cleared(ClearReason),
    /// A login or logout completed first; the result was discarded.
    Superseded,
}

#[derive(Debug, Default)]
struct Inner {
    session: Session,
    generation: u64,
    login_ticket: u64,
    hydrated: bool,
}

pub struct SessionStore<B, S> {
    backend: B,
    storage: S,
    inner: Mutex<Inner>,
}

impl<B: AuthBackend, S: TokenStorage> SessionStore<B, S> {
    /// Store starting `Anonymous`; call [`hydrate`](Self::hydrate) before routing.
    pub fn new(backend: B, storage: S) -> Self {
        Self { backend, storage, inner: Mutex::new(Inner::default()) }
    }

    /// Backend client, for views that make their own authenticated calls.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Token persistence this store writes through.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Snapshot of the latest completed transition.
    pub fn current_session(&self) -> Session {
        self.lock().session.clone()
    }

    /// Whether `hydrate` has finished. Initial routing waits on this.
    pub fn is_hydrated(&self) -> bool {
        self.lock().hydrated
    }

    /// Rebuild the session from the persisted token. Run once at startup.
    pub async fn hydrate(&self) -> HydrateOutcome {
        let generation = self.lock().generation;

        let token = match self.storage.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.lock().hydrated = true;
                tracing::debug!("no persisted token");
                return HydrateOutcome::NoToken;
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted token unreadable; starting anonymous");
                self.discard_persisted(generation);
                return HydrateOutcome::Cleared(ClearReason::StorageUnreadable);
            }
        };

        match self.backend.current_user(&token).await {
            Ok(response) => {
                let mut inner = self.lock();
                inner.hydrated = true;
                if inner.generation != generation {
                    tracing::debug!("hydrate result superseded");
                    return HydrateOutcome::Superseded;
                }
                let role = response.tipo;
                self.apply_authenticated(&mut inner, response);
                tracing::info!(state = %inner.session.state(), "session restored");
                HydrateOutcome::Restored { role }
            }
            Err(e) => {
                let reason = if matches!(e, BackendError::Rejected { .. }) && !e.is_transient() {
                    ClearReason::Rejected
                } else {
                    ClearReason::Unverified
                };
                tracing::warn!(error = %e, ?reason, "persisted token not accepted; starting anonymous");
                if self.discard_persisted(generation) {
                    HydrateOutcome::Cleared(reason)
                } else {
                    HydrateOutcome::Superseded
                }
            }
        }
    }

    /// Clear the persisted token after a failed hydrate, unless another
    /// transition already replaced it. Returns whether anything was cleared.
    fn discard_persisted(&self, generation: u64) -> bool {
        let mut inner = self.lock();
        inner.hydrated = true;
        if inner.generation != generation {
            return false;
        }
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "failed to clear persisted token");
        }
        inner.session = Session::Anonymous;
        self.backend.set_bearer(None);
        true
    }

    /// Log in with email and password. Never navigates; the caller routes on
    /// the returned role.
    pub async fn login(&self, email: &str, password: &str) -> LoginOutcome {
        let (email, password) = match validate_credentials(email, password) {
            Ok(credentials) => credentials,
            Err(failure) => return LoginOutcome::Failure(failure),
        };

        let ticket = self.lock().login_ticket;

        let response = match self.backend.login(email, password).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                return LoginOutcome::Failure(LoginFailure::from_backend(&e, DEFAULT_LOGIN_ERROR));
            }
        };

        let mut inner = self.lock();
        if inner.login_ticket != ticket {
            tracing::info!("discarding login result that arrived after cancellation");
            return LoginOutcome::Superseded;
        }
        let role = response.tipo;
        self.apply_authenticated(&mut inner, response);
        tracing::info!(state = %inner.session.state(), "login succeeded");
        LoginOutcome::Success { role }
    }

    fn apply_authenticated(&self, inner: &mut Inner, response: AuthResponse) {
        if let Err(e) = self.storage.save(&response.token) {
            tracing::warn!(error = %e, "failed to persist token; session lasts until exit");
        }
        self.backend.set_bearer(Some(&response.token));
        let identity = response.identity();
        inner.session = Session::Authenticated { token: response.token, identity };
        inner.generation += 1;
    }

    /// Drop any in-flight login so a late success is not applied. The current
    /// session is left as is.
    pub fn cancel_pending_login(&self) {
        self.lock().login_ticket += 1;
    }

    /// End the session and tell the backend. Idempotent; never fails.
    pub async fn logout(&self) {
        if self.end_session() {
            self.send_logout_notice().await;
        }
    }

    /// Local half of [`logout`](Self::logout): session, persisted token and
    /// bearer are gone when this returns. Returns whether a session was
    /// active, i.e. whether a notice is due.
    pub fn end_session(&self) -> bool {
        let was_authenticated = self.clear_local();
        if was_authenticated {
            tracing::info!("logged out");
        }
        was_authenticated
    }

    /// Best-effort logout notice. Local state is not touched, whatever the
    /// backend answers or however long it takes.
    pub async fn send_logout_notice(&self) {
        if let Err(e) = self.backend.notify_logout().await {
            tracing::debug!(error = %e, "logout notice not delivered");
        }
    }

    /// Drop the session because the backend rejected the token on some other
    /// request (expired or revoked).
    pub fn expire(&self) {
        if self.clear_local() {
            tracing::info!("session expired");
        }
    }

    /// Pass through the result of an authenticated call, expiring the session
    /// first if the backend refused its token.
    ///
    /// # Errors
    ///
    /// Returns `result`'s error unchanged.
    pub fn screen<T>(&self, result: Result<T, BackendError>) -> Result<T, BackendError> {
        if let Err(e) = &result {
            if e.rejects_token() {
                tracing::warn!(error = %e, "token refused by backend");
                self.expire();
            }
        }
        result
    }

    /// Returns whether a session was active.
    fn clear_local(&self) -> bool {
        let mut inner = self.lock();
        let was_authenticated = inner.session.is_authenticated();
        inner.session = Session::Anonymous;
        inner.generation += 1;
        if let Err(e) = self.storage.clear() {
            tracing::warn!(error = %e, "failed to clear persisted token");
        }
        self.backend.set_bearer(None);
        was_authenticated
    }

    /// Create a reader account. The session is not touched; new accounts log
    /// in separately.
    ///
    /// # Errors
    ///
    /// Returns a [`LoginFailure`] with a displayable message if a field is
    /// blank or the backend refuses the registration.
    pub async fn register(&self, nome: &str, email: &str, senha: &str) -> Result<Option<String>, LoginFailure> {
        let request = RegisterRequest {
            nome: nome.trim().to_owned(),
            email: email.trim().to_owned(),
            senha: senha.to_owned(),
        };
        if request.nome.is_empty() || request.email.is_empty() || request.senha.trim().is_empty() {
            return Err(LoginFailure::invalid_input(MISSING_REGISTRATION_FIELDS));
        }
        self.backend.register(&request).await.map_err(|e| {
            tracing::warn!(error = %e, "registration failed");
            LoginFailure::from_backend(&e, DEFAULT_REGISTER_ERROR)
        })
    }
}

/// Trim the email and require both fields before any request is made.
///
/// # Errors
///
/// Returns a [`LoginFailure`] carrying [`MISSING_CREDENTIALS`] when either
/// field is blank.
pub fn validate_credentials<'a>(email: &'a str, password: &'a str) -> Result<(&'a str, &'a str), LoginFailure> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(LoginFailure::invalid_input(MISSING_CREDENTIALS));
    }
    Ok((email, password))
}

impl<S: TokenStorage> SessionStore<ApiClient, S> {
    /// Authenticated `GET` through the store's client. A 401/403 ends the
    /// session before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the request fails or the body does not
    /// decode as `T`.
    pub async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let result = self.backend.get_json(path).await;
        self.screen(result)
    }
}
