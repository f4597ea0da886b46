//! Persistence for the theme preference.
//!
//! Storage is best-effort: an unavailable or failing store reads as "absent"
//! and drops writes, logging instead of surfacing an error.

use std::cell::RefCell;
use std::collections::HashMap;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// Origin-scoped `window.localStorage`.
pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        // local_storage() throws when storage is disabled by the browser.
        let inner = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("localStorage unavailable: {:?}", e);
                None
            }
        });
        Self { inner }
    }

    pub fn is_available(&self) -> bool {
        self.inner.is_some()
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.inner.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to read '{}' from localStorage: {:?}", key, e);
                None
            }
        }
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = self.inner.as_ref() else {
            log::debug!("localStorage unavailable, dropping {}={}", key, value);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("failed to write '{}' to localStorage: {:?}", key, e);
        }
    }
}

/// In-memory store for hosts without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.save(key, value);
        store
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) {
        (**self).save(key, value)
    }
}
