//! 凭证存储服务
//!
//! 使用系统钥匙串保存“记住我”的登录凭证
//! 实现 course-portal-core 的 CredentialVault trait

use course_portal_core::traits::CredentialVault;
use course_portal_core::types::RememberedCredentials;
use course_portal_core::{CoreError, CoreResult};
use keyring::Entry;

const SERVICE_NAME: &str = "course-portal-tui";
const CREDENTIALS_KEY: &str = "__remembered_login__";

/// 基于系统钥匙串的凭证存储
///
/// 使用 keyring crate 将凭证安全存储到：
/// - Windows: Credential Manager
/// - macOS: Keychain
/// - Linux: Secret Service (GNOME Keyring / KWallet)
#[derive(Debug, Default)]
pub struct KeyringCredentialVault;

impl KeyringCredentialVault {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> CoreResult<Entry> {
        Entry::new(SERVICE_NAME, CREDENTIALS_KEY)
            .map_err(|e| CoreError::StorageError(format!("Failed to create entry: {e}")))
    }
}

impl CredentialVault for KeyringCredentialVault {
    fn load(&self) -> CoreResult<Option<RememberedCredentials>> {
        let json = match Self::entry()?.get_password() {
            Ok(json) => json,
            Err(keyring::Error::NoEntry) => return Ok(None),
            Err(e) => return Err(CoreError::StorageError(format!("Failed to load: {e}"))),
        };

        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| CoreError::SerializationError(format!("Failed to deserialize: {e}")))
    }

    fn store(&self, credentials: &RememberedCredentials) -> CoreResult<()> {
        let json = serde_json::to_string(credentials)
            .map_err(|e| CoreError::SerializationError(format!("Failed to serialize: {e}")))?;

        Self::entry()?
            .set_password(&json)
            .map_err(|e| CoreError::StorageError(format!("Failed to save: {e}")))
    }

    fn clear(&self) -> CoreResult<()> {
        match Self::entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CoreError::StorageError(format!("Failed to clear: {e}"))),
        }
    }
}
