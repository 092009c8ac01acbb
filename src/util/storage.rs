//! Browser localStorage backend and JSON helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize csr-only Web Storage glue so the session store and
//! pages persist through one `KeyValueStore` implementation. Non-browser builds
//! (native tests) fall back to an in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use auth::{KeyValueStore, StorageError};
#[cfg(not(feature = "csr"))]
use auth::MemoryStorage;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// `window.localStorage`, or memory outside the browser.
pub struct BrowserStorage {
    #[cfg(feature = "csr")]
    inner: Option<web_sys::Storage>,
    #[cfg(not(feature = "csr"))]
    inner: MemoryStorage,
}

impl BrowserStorage {
    /// Open the page's local storage. Never fails; an unavailable backend
    /// reads as empty and rejects writes.
    pub fn open() -> Self {
        #[cfg(feature = "csr")]
        {
            let inner = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if inner.is_none() {
                log::warn!("localStorage unavailable; session will not persist");
            }
            Self { inner }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self { inner: MemoryStorage::new() }
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            self.inner.as_ref()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            self.inner.get_item(key)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = self.inner.as_ref().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            self.inner.set_item(key, value)
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = self.inner.as_ref() {
                if let Err(e) = storage.remove_item(key) {
                    log::warn!("failed to remove {key}: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            self.inner.remove_item(key);
        }
    }
}

/// Load a JSON value stored under `key`. Missing or unreadable values are `None`.
pub fn load_json<T: DeserializeOwned>(storage: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = storage.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable {key}: {e}");
            None
        }
    }
}

/// Save a JSON value under `key`.
///
/// # Errors
///
/// Returns [`StorageError::Rejected`] if serialization or the write fails.
pub fn save_json<T: Serialize>(storage: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Rejected(e.to_string()))?;
    storage.set_item(key, &raw)
}
