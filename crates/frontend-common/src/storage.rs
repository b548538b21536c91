//! Token persistence in the browser's localStorage

use gloo::storage::{LocalStorage, Storage};
use tracing::warn;
use vera_core::{ACCESS_TOKEN_KEY, TokenStore};

/// Stores the raw token string under [`ACCESS_TOKEN_KEY`].
///
/// Storage failures (private browsing, quota) are logged and otherwise
/// treated as an empty store.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        match LocalStorage::raw().get_item(ACCESS_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!(error = ?e, "Failed to read access token");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(e) = LocalStorage::raw().set_item(ACCESS_TOKEN_KEY, token) {
            warn!(error = ?e, "Failed to persist access token");
        }
    }

    fn remove(&self) {
        if let Err(e) = LocalStorage::raw().remove_item(ACCESS_TOKEN_KEY) {
            warn!(error = ?e, "Failed to remove access token");
        }
    }
}
