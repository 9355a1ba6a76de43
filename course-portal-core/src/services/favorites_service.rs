//! Favorite courses

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::traits::KeyValueStore;

/// Store key: JSON array of favorite course ids.
pub const FAVORITES_KEY: &str = "favorites";

/// Favorite courses service.
///
/// Keeps the ordered list in memory and writes the whole list back on every change.
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
    ids: Vec<String>,
}

impl FavoritesService {
    /// Load from the store. Missing or corrupt data yields an empty list.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<String>>(&raw).unwrap_or_else(|e| {
                log::warn!("Ignoring corrupt favorites data: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::error!("Failed to read favorites: {e}");
                Vec::new()
            }
        };
        Self { store, ids }
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.ids.iter().any(|id| id == course_id)
    }

    /// Favorite ids in the order they were added.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn as_set(&self) -> HashSet<String> {
        self.ids.iter().cloned().collect()
    }

    /// Toggle a course and return its new state.
    ///
    /// On a write failure the in-memory toggle stays and the error is returned.
    pub fn toggle(&mut self, course_id: &str) -> CoreResult<bool> {
        let now_favorite = if self.contains(course_id) {
            self.ids.retain(|id| id != course_id);
            false
        } else {
            self.ids.push(course_id.to_string());
            true
        };
        self.persist()?;
        Ok(now_favorite)
    }

    fn persist(&self) -> CoreResult<()> {
        let json = serde_json::to_string(&self.ids)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.store.set(FAVORITES_KEY, &json)
    }
}
