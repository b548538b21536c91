//! Persisted token storage

use std::cell::RefCell;

/// Key under which the raw access token is persisted
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Client-side persistence for the access token.
///
/// Implementations hold one raw string. Write failures are logged by the
/// implementation and never surface to callers.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        self.token.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_and_clears_idempotently() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get(), None);

        store.set("a.b.c");
        assert_eq!(store.get().as_deref(), Some("a.b.c"));

        store.set("d.e.f");
        assert_eq!(store.get().as_deref(), Some("d.e.f"));

        store.remove();
        store.remove();
        assert_eq!(store.get(), None);
    }
}
