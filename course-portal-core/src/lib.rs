//! Course Portal Core Library
//!
//! Interaction logic of the course portal client, independent of any UI:
//! - Selection state machine (courses → units → classes, stale-response safe)
//! - Quick navigation palette state and triple-tap detection
//! - Download orchestration with a single download slot and one-shot notifications
//! - Favorites, preferences and remembered credentials over a key-value store
//!
//! Side effects go through traits (`KeyValueStore`, `CredentialVault`,
//! `NotificationSink`, `FileSink`) so each front end injects its own.

pub mod engine;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::ServiceContext;
pub use traits::{CredentialVault, FileSink, KeyValueStore, NotificationSink};
