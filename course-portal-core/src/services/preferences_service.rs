//! User preferences

use std::sync::Arc;

use crate::error::CoreResult;
use crate::traits::KeyValueStore;
use crate::types::Theme;

pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "language";

/// Theme and interface language preferences.
pub struct PreferencesService {
    store: Arc<dyn KeyValueStore>,
}

impl PreferencesService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored theme, or the default when unset or invalid.
    pub fn theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("Unknown theme {raw:?}, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                log::error!("Failed to read theme: {e}");
                Theme::default()
            }
        }
    }

    pub fn set_theme(&self, theme: Theme) -> CoreResult<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Interface language code (e.g. `en-US`); `None` when unset.
    pub fn language(&self) -> Option<String> {
        self.store.get(LANGUAGE_KEY).unwrap_or_else(|e| {
            log::error!("Failed to read language: {e}");
            None
        })
    }

    pub fn set_language(&self, code: &str) -> CoreResult<()> {
        self.store.set(LANGUAGE_KEY, code)
    }
}
