//! Session state: snapshot types, token persistence, and the store that owns
//! the lifecycle.
//!
//! DESIGN
//! ======
//! `Anonymous` is both the initial state and where every failure ends up.
//! `Authenticated(role)` is reached only through a backend-confirmed login or
//! hydrate, and always degrades back to `Anonymous` on logout or rejection.

pub mod storage;
pub mod store;
pub mod types;

#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, StorageError, TOKEN_KEY, TokenStorage};
pub use store::{ClearReason, HydrateOutcome, LoginOutcome, SessionStore, validate_credentials};
pub use types::{Identity, Role, Session, SessionState};
