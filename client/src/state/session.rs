//! Session state shared through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionHandle` is the only way views reach the `SessionStore`. Every
//! operation mirrors the store's snapshot into `view` as soon as the store
//! changes, so guards and headers react to logins and logouts without polling.
//! Logout mirrors the cleared session before the backend notice goes out.
//! Authenticated calls go through [`SessionHandle::get_json`] so a refused
//! token ends the session everywhere at once.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use theclub::session::{ClearReason, HydrateOutcome, LoginOutcome, Role, Session, SessionStore};
use theclub::{ApiClient, BackendError, FailureKind, LoginFailure};

use crate::util::storage::BrowserStorage;

pub type AppStore = SessionStore<ApiClient, BrowserStorage>;

/// Shown when the API client could not be built at startup.
pub const SERVICE_UNAVAILABLE: &str = "Serviço indisponível. Tente novamente mais tarde.";

/// Reactive mirror of the store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub session: Session,
    /// False until startup hydrate has finished; routing waits on it.
    pub hydrated: bool,
}

impl SessionView {
    pub fn ready(session: Session) -> Self {
        Self { session, hydrated: true }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.role()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.session.identity().map(|identity| identity.display_name.as_str())
    }

    /// Header label, e.g. `Ana (EDITOR)`.
    pub fn badge(&self) -> Option<String> {
        let name = self.display_name()?;
        Some(match self.role() {
            Some(role) => format!("{name} ({role})"),
            None => name.to_owned(),
        })
    }
}

#[derive(Clone, Copy)]
pub struct SessionHandle {
    store: StoredValue<Option<Arc<AppStore>>, LocalStorage>,
    pub view: RwSignal<SessionView>,
}

impl SessionHandle {
    /// `None` when the API client could not be built; the app then stays
    /// anonymous and every login fails with [`SERVICE_UNAVAILABLE`].
    pub fn new(store: Option<AppStore>) -> Self {
        Self {
            store: StoredValue::new_local(store.map(Arc::new)),
            view: RwSignal::new(SessionView::default()),
        }
    }

    fn store(self) -> Option<Arc<AppStore>> {
        self.store.get_value()
    }

    fn sync(self, store: &AppStore) {
        self.view.set(SessionView { session: store.current_session(), hydrated: store.is_hydrated() });
    }

    pub async fn hydrate(self) -> HydrateOutcome {
        let Some(store) = self.store() else {
            self.view.set(SessionView::ready(Session::Anonymous));
            return HydrateOutcome::Cleared(ClearReason::Unverified);
        };
        let outcome = store.hydrate().await;
        self.sync(&store);
        outcome
    }

    pub async fn login(self, email: String, senha: String) -> LoginOutcome {
        let Some(store) = self.store() else {
            return LoginOutcome::Failure(unavailable());
        };
        let outcome = store.login(&email, &senha).await;
        self.sync(&store);
        outcome
    }

    /// Ends the session in the view right away; the backend notice runs
    /// on its own task and never holds the view back.
    pub fn logout(self) {
        let Some(store) = self.store() else {
            return;
        };
        let notice_due = store.end_session();
        self.sync(&store);
        if notice_due {
            leptos::task::spawn_local(async move {
                store.send_logout_notice().await;
            });
        }
    }

    /// The backend refused the token; drop the session without a notice.
    pub fn expire(self) {
        if let Some(store) = self.store() {
            store.expire();
            self.sync(&store);
        }
    }

    /// Authenticated `GET` for views. A 401/403 expires the session and the
    /// guard takes it from there.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendError`] if the API client is unavailable, the request
    /// fails, or the body does not decode as `T`.
    pub async fn get_json<T: serde::de::DeserializeOwned>(self, path: &str) -> Result<T, BackendError> {
        let store = self
            .store()
            .ok_or_else(|| BackendError::Transport(SERVICE_UNAVAILABLE.to_owned()))?;
        let result = store.get_json(path).await;
        self.sync(&store);
        result
    }

    pub fn cancel_pending_login(self) {
        if let Some(store) = self.store() {
            store.cancel_pending_login();
        }
    }

    pub async fn register(self, nome: String, email: String, senha: String) -> Result<Option<String>, LoginFailure> {
        let store = self.store().ok_or_else(unavailable)?;
        store.register(&nome, &email, &senha).await
    }
}

fn unavailable() -> LoginFailure {
    LoginFailure { kind: FailureKind::TransientNetworkError, message: SERVICE_UNAVAILABLE.to_owned() }
}
