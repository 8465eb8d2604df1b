//! Browser `localStorage` backing for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives under the well-known `token` key so it survives reloads.
//! Outside the browser build every call is a no-op and nothing persists.

use theclub::session::{StorageError, TokenStorage};

/// Token storage in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_owned()))?;
    window
        .local_storage()
        .map_err(unavailable)?
        .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_owned()))
}

#[cfg(feature = "csr")]
fn unavailable(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{err:?}"))
}

impl TokenStorage for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = local_storage()?.get_item(theclub::session::TOKEN_KEY).map_err(unavailable)?;
            Ok(raw.filter(|token| !token.trim().is_empty()))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(theclub::session::TOKEN_KEY, token)
                .map_err(unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(theclub::session::TOKEN_KEY)
                .map_err(unavailable)
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
