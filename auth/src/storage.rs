//! String-valued durable key-value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser this is `window.localStorage` (see the app's
//! `util::storage::BrowserStorage`). Everything else, including tests, uses
//! [`MemoryStorage`]. Methods take `&self` because the browser API does.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

/// Error returned by [`KeyValueStore::set_item`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write (quota, read-only mode).
    #[error("write rejected: {0}")]
    Rejected(String),
}

/// Minimal subset of the Web Storage API the store relies on.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot persist the value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str);
}

/// In-memory storage for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    read_only: Cell<bool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw value, e.g. a hand-written or corrupt record.
    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    /// Make subsequent writes fail with [`StorageError::Rejected`].
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.items.borrow().contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only.get() {
            return Err(StorageError::Rejected(format!("{key} is read-only")));
        }
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
