//! Storage and side-effect abstraction traits

mod credential_vault;
mod file_sink;
mod key_value_store;
mod notification_sink;

pub use credential_vault::CredentialVault;
pub use file_sink::{DirectoryFileSink, FileSink};
pub use key_value_store::{InMemoryKeyValueStore, KeyValueStore};
pub use notification_sink::NotificationSink;
