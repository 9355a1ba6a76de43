//! Key-value store abstract Trait

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::CoreResult;

/// Key-value store Trait
///
/// String keys, string values, full-replacement writes. Favorites,
/// preferences and the encoded credential cache all live here.
/// Provides a default memory implementation of `InMemoryKeyValueStore`.
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - key exists
    /// * `Ok(None)` - key does not exist
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Remove a key; removing a missing key is not an error
    fn remove(&self, key: &str) -> CoreResult<()>;
}

/// In-memory key-value store
///
/// Default implementation, used by tests and as a fallback when no
/// persistent store can be opened.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}
