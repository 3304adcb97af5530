//! OAuth token storage
//!
//! The HTTP layers that talk to the mail and accounting providers keep
//! one token set each. The store is injected rather than kept as a
//! module-level global so tests can substitute a fake.

use std::sync::Mutex;

use tracing::debug;

use crate::types::Token;

/// Shared token state for an OAuth-backed collaborator
pub trait TokenStore: Send + Sync {
    /// Current token, if one has been stored
    fn get(&self) -> Option<Token>;

    /// Replace the stored token
    fn set(&self, token: Token);

    /// Drop the stored token
    fn clear(&self);

    /// Check whether a token is present
    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

/// Process-local token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    inner: Mutex<Option<Token>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<Token> {
        self.inner.lock().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: Token) {
        if let Ok(mut guard) = self.inner.lock() {
            debug!("token stored");
            *guard = Some(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.lock() {
            debug!("token cleared");
            *guard = None;
        }
    }
}
