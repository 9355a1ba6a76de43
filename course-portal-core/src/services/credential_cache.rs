//! Encoded credential cache
//!
//! **Not secure.** Credentials are stored as base64 of a small JSON object in
//! the plain key-value store; anyone who can read the store can read them.
//! Prefer a platform secret store where one is available.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{CoreError, CoreResult};
use crate::traits::{CredentialVault, KeyValueStore};
use crate::types::RememberedCredentials;

/// Storage key of the encoded credentials.
pub const CREDENTIALS_KEY: &str = "credentials";

pub struct EncodedCredentialCache {
    store: Arc<dyn KeyValueStore>,
}

impl EncodedCredentialCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn decode(raw: &str) -> Option<RememberedCredentials> {
        let bytes = STANDARD.decode(raw.trim()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

impl CredentialVault for EncodedCredentialCache {
    fn load(&self) -> CoreResult<Option<RememberedCredentials>> {
        let Some(raw) = self.store.get(CREDENTIALS_KEY)? else {
            return Ok(None);
        };
        match Self::decode(&raw) {
            Some(credentials) => Ok(Some(credentials)),
            None => {
                log::warn!("Discarding undecodable remembered credentials");
                self.store.remove(CREDENTIALS_KEY)?;
                Ok(None)
            }
        }
    }

    fn store(&self, credentials: &RememberedCredentials) -> CoreResult<()> {
        let json = serde_json::to_vec(credentials)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        self.store.set(CREDENTIALS_KEY, &STANDARD.encode(json))
    }

    fn clear(&self) -> CoreResult<()> {
        self.store.remove(CREDENTIALS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::InMemoryKeyValueStore;

    fn credentials() -> RememberedCredentials {
        RememberedCredentials {
            username: "PES1UG23CS001".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[test]
    fn stored_value_is_base64_json() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let cache = EncodedCredentialCache::new(store.clone());
        assert!(cache.store(&credentials()).is_ok());

        let raw = store.get(CREDENTIALS_KEY).ok().flatten().unwrap_or_default();
        let decoded = STANDARD.decode(raw).unwrap_or_default();
        let value: serde_json::Value = serde_json::from_slice(&decoded).unwrap_or_default();
        assert_eq!(value["u"], "PES1UG23CS001");
        assert_eq!(value["p"], "hunter2");
    }

    #[test]
    fn load_returns_stored_credentials() {
        let cache = EncodedCredentialCache::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(cache.store(&credentials()).is_ok());
        assert_eq!(cache.load().ok().flatten(), Some(credentials()));
    }

    #[test]
    fn corrupt_value_is_removed() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        assert!(store.set(CREDENTIALS_KEY, "%%% not base64").is_ok());
        let cache = EncodedCredentialCache::new(store.clone());

        assert_eq!(cache.load().ok().flatten(), None);
        assert_eq!(store.get(CREDENTIALS_KEY).ok().flatten(), None);
    }

    #[test]
    fn clear_removes_credentials() {
        let cache = EncodedCredentialCache::new(Arc::new(InMemoryKeyValueStore::new()));
        assert!(cache.store(&credentials()).is_ok());
        assert!(cache.clear().is_ok());
        assert_eq!(cache.load().ok().flatten(), None);
    }
}
