//! Key-value persistence for user preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme and language controllers talk to a [`KeyValueStore`] rather than to
//! `localStorage` directly, so their transitions are testable natively and
//! keep working (for the session) when the browser denies storage access.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

use crate::error::FolioError;

/// Opaque string key-value store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// Persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the backend rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// Process-lifetime store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Open `localStorage`, or `None` when it is unavailable (private mode,
    /// sandboxed iframe).
    #[must_use]
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            _ => None,
        }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.storage.get_item(key) {
            Ok(value) => value,
            Err(_) => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FolioError> {
        self.storage
            .set_item(key, value)
            .map_err(|_| FolioError::Storage { key: key.to_owned() })
    }
}

/// The browser store when available, else an in-memory fallback.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Some(store) => Box::new(store),
        None => {
            log::warn!("localStorage unavailable; preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
