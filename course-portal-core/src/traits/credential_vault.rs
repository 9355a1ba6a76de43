//! Remembered login credentials abstraction

use crate::error::CoreResult;
use crate::types::RememberedCredentials;

/// Storage for remembered login credentials.
///
/// Implementations:
/// - TUI: `KeyringCredentialVault` (system keychain)
/// - Generic: `EncodedCredentialCache` (base64 in the key-value store, **not encrypted**)
pub trait CredentialVault: Send + Sync {
    /// Load the remembered credentials.
    ///
    /// # Returns
    /// * `Ok(Some(credentials))` - stored and decodable
    /// * `Ok(None)` - nothing remembered
    fn load(&self) -> CoreResult<Option<RememberedCredentials>>;

    /// Save credentials, replacing any previous ones.
    fn store(&self, credentials: &RememberedCredentials) -> CoreResult<()>;

    /// Forget the stored credentials.
    fn clear(&self) -> CoreResult<()>;
}
