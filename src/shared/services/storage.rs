//! Persistent store adapters
//!
//! `LocalStorageStore` is the browser's `localStorage`; on native targets it
//! keeps values in one process-wide map so SSR and desktop builds behave the
//! same, including across sidebar remounts.

use dashmap::DashMap;
#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;

use crate::domain::services::KeyValueStore;
use crate::shared::errors::Result;
#[cfg(target_arch = "wasm32")]
use crate::shared::errors::AppError;

/// `DashMap`-backed store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Process memory standing in for `localStorage` off the browser.
/// Shared by every `LocalStorageStore`, like the real origin storage.
#[cfg(not(target_arch = "wasm32"))]
static FALLBACK: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

/// Browser `localStorage`
#[derive(Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(target_arch = "wasm32")]
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self.storage().ok_or(AppError::StorageUnavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let storage = self.storage().ok_or(AppError::StorageUnavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        FALLBACK.get(key).map(|entry| entry.value().clone())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        FALLBACK.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        FALLBACK.remove(key);
        Ok(())
    }
}
