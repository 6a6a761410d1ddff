//! Durable Storage
//!
//! Key/value persistence for values that survive a page reload.
//! `BrowserStorage` wraps `window.localStorage`; `MemoryStorage` backs tests
//! and browsers where local storage is disabled.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage key of the serialized session user
pub const USER_KEY: &str = "user";
/// Storage key of the theme preference (`"dark"` | `"light"`)
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,

    #[error("stored value under `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Minimal string key/value store
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

/// Read and deserialize a JSON value
pub fn load_json<T: DeserializeOwned>(
    storage: &dyn KeyValueStorage,
    key: &str,
) -> StorageResult<Option<T>> {
    match storage.get_item(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: key.to_string(),
                source,
            }),
        None => Ok(None),
    }
}

/// Serialize and write a JSON value
pub fn save_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> StorageResult<()> {
    let raw = serde_json::to_string(value).map_err(|source| StorageError::Corrupt {
        key: key.to_string(),
        source,
    })?;
    storage.set_item(key, &raw)
}

/// Shared handle to whichever storage backend is active
pub type SharedStorage = Arc<dyn KeyValueStorage>;

/// Pick `localStorage` when the browser provides it, memory otherwise
pub fn default_storage() -> SharedStorage {
    if BrowserStorage::is_available() {
        Arc::new(BrowserStorage)
    } else {
        log::warn!("[STORAGE] localStorage unavailable, session will not survive reload");
        Arc::new(MemoryStorage::default())
    }
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    pub fn is_available() -> bool {
        cfg!(target_arch = "wasm32") && Self::storage().is_ok()
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Unavailable)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| StorageError::Unavailable)
    }
}

// ========================
// In-memory
// ========================

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    fn entries(&self) -> StorageResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|_| StorageError::Unavailable)
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.entries()?.remove(key);
        Ok(())
    }
}
