//! Service layer

mod auth_service;
mod credential_cache;
mod download_service;
mod favorites_service;
mod notification;
mod preferences_service;
mod selection_service;

pub use auth_service::AuthService;
pub use credential_cache::{EncodedCredentialCache, CREDENTIALS_KEY};
pub use download_service::{DownloadOutcome, DownloadPlan, DownloadScope, DownloadService};
pub use favorites_service::{FavoritesService, FAVORITES_KEY};
pub use notification::{NotificationTicket, INTERRUPTED_MESSAGE};
pub use preferences_service::{PreferencesService, LANGUAGE_KEY, THEME_KEY};
pub use selection_service::{FetchCompletion, FetchResult, SelectionService};

use std::sync::Arc;

use course_portal_gateway::ContentGateway;

use crate::traits::{CredentialVault, FileSink, KeyValueStore, NotificationSink};

/// Service context - holds every dependency
///
/// The platform layer builds it and injects its own implementations.
pub struct ServiceContext {
    /// Gateway client
    pub gateway: Arc<dyn ContentGateway>,
    /// Local key-value store (favorites, preferences)
    pub store: Arc<dyn KeyValueStore>,
    /// Remembered credentials
    pub credential_vault: Arc<dyn CredentialVault>,
    /// Notification output
    pub notifications: Arc<dyn NotificationSink>,
    /// Destination for downloaded files
    pub file_sink: Arc<dyn FileSink>,
}

impl ServiceContext {
    /// Create the service context
    #[must_use]
    pub fn new(
        gateway: Arc<dyn ContentGateway>,
        store: Arc<dyn KeyValueStore>,
        credential_vault: Arc<dyn CredentialVault>,
        notifications: Arc<dyn NotificationSink>,
        file_sink: Arc<dyn FileSink>,
    ) -> Self {
        Self {
            gateway,
            store,
            credential_vault,
            notifications,
            file_sink,
        }
    }

    /// Open an in-progress notification
    pub fn notify(&self, message: impl Into<String>) -> NotificationTicket {
        NotificationTicket::open(self.notifications.clone(), message)
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.gateway.clone(), self.credential_vault.clone())
    }

    pub fn selection(&self) -> SelectionService {
        SelectionService::new(self.gateway.clone())
    }

    pub fn downloads(&self) -> DownloadService {
        DownloadService::new(self.gateway.clone(), self.file_sink.clone())
    }

    pub fn preferences(&self) -> PreferencesService {
        PreferencesService::new(self.store.clone())
    }

    /// Load favorites from the store
    pub fn favorites(&self) -> FavoritesService {
        FavoritesService::load(self.store.clone())
    }
}
