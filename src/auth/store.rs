//! Durable session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! One JSON record under a fixed key survives reloads and browser restarts
//! until cleared. Only the auth manager writes it. A legacy key from an older
//! storage scheme is deleted on clear and never written.
//!
//! DESIGN
//! ======
//! The key-value surface is a trait so the manager is testable natively:
//! `BrowserStore` talks to `window.localStorage` under `hydrate`, while
//! `MemoryStore` backs tests and server-side rendering.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use super::error::StoreError;
use crate::net::types::Session;

/// Key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "user";
/// Key used by an older storage scheme; only ever removed.
pub const LEGACY_TOKEN_KEY: &str = "token";

/// Minimal string key-value storage surface.
pub trait KeyValueStore {
    /// Read `key`; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the storage surface cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write is rejected.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the delete is rejected.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> R {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut entries)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.with_entries(|m| m.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.with_entries(|m| m.insert(key.to_owned(), value.to_owned()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.with_entries(|m| m.remove(key));
        Ok(())
    }
}

/// `window.localStorage`, looked up on every call so the store stays
/// `Send + Sync` and usable from Leptos context.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_owned()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StoreError::Operation(format!("{e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Operation(format!("{e:?}")))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Operation(format!("{e:?}")))
    }
}

/// Reads and writes the single persisted session record.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Serialize `session` and write it under [`SESSION_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the write fails.
    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let raw = serde_json::to_string(session)?;
        self.backend.set(SESSION_KEY, &raw)
    }

    /// Read the persisted session.
    ///
    /// An unreadable store or a corrupt record is logged and reported as
    /// `None`, the same as an absent record.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.backend.get(SESSION_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                leptos::logging::warn!("session store read failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                leptos::logging::warn!("discarding corrupt session record: {e}");
                None
            }
        }
    }

    /// Remove the session record and the legacy token key. Idempotent.
    ///
    /// Both deletes are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] encountered.
    pub fn clear(&self) -> Result<(), StoreError> {
        let session = self.backend.remove(SESSION_KEY);
        let legacy = self.backend.remove(LEGACY_TOKEN_KEY);
        session.and(legacy)
    }
}
