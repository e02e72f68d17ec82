//! Access-token state shared by every repository.
//!
//! The token lives behind an explicit set/get/clear lifecycle and is passed
//! into the client constructor, so tests and embedders can substitute their
//! own store instead of relying on ambient globals.

use std::sync::{Arc, RwLock};

/// Process-wide bearer-token store
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a token
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    /// Replace the current token
    pub fn set(&self, token: &str) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
    }

    /// The current token, if any
    pub fn get(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// Drop the current token (sign-out)
    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_clear_lifecycle() {
        let store = TokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc123");
        assert_eq!(store.get(), Some("abc123".to_string()));

        let clone = store.clone();
        clone.set("def456");
        assert_eq!(store.get(), Some("def456".to_string()));

        store.clear();
        assert_eq!(clone.get(), None);
    }
}
