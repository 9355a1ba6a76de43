//! Login

use std::sync::Arc;

use course_portal_gateway::{ContentGateway, GatewayError};

use crate::error::{CoreError, CoreResult};
use crate::services::NotificationTicket;
use crate::traits::CredentialVault;
use crate::types::RememberedCredentials;

/// Login service.
pub struct AuthService {
    gateway: Arc<dyn ContentGateway>,
    vault: Arc<dyn CredentialVault>,
}

impl AuthService {
    #[must_use]
    pub fn new(gateway: Arc<dyn ContentGateway>, vault: Arc<dyn CredentialVault>) -> Self {
        Self { gateway, vault }
    }

    /// Remembered credentials for prefilling the login form; a read failure counts as none.
    pub fn remembered(&self) -> Option<RememberedCredentials> {
        self.vault.load().unwrap_or_else(|e| {
            log::warn!("Failed to load remembered credentials: {e}");
            None
        })
    }

    /// Log in, then save or clear credentials according to `remember`.
    ///
    /// Returns the gateway's welcome message. The notification is settled exactly once.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
        notice: NotificationTicket,
    ) -> CoreResult<String> {
        match self.gateway.login(username, password).await {
            Ok(response) => {
                self.update_vault(username, password, remember);
                log::info!("Logged in as {username}");
                notice.succeed(response.message.clone());
                Ok(response.message)
            }
            Err(e) => {
                let (message, err) = classify_login_error(e);
                log::warn!("Login failed for {username}: {err}");
                notice.fail(message);
                Err(err)
            }
        }
    }

    fn update_vault(&self, username: &str, password: &str, remember: bool) {
        let result = if remember {
            self.vault.store(&RememberedCredentials {
                username: username.to_string(),
                password: password.to_string(),
            })
        } else {
            self.vault.clear()
        };
        if let Err(e) = result {
            log::error!("Failed to update remembered credentials: {e}");
        }
    }
}

fn classify_login_error(err: GatewayError) -> (String, CoreError) {
    if err.is_transport() {
        return (
            "Network error. Please try again.".to_string(),
            CoreError::Transport(err.to_string()),
        );
    }
    let message = err
        .raw_message()
        .map_or_else(|| "Login failed".to_string(), str::to_string);
    let core = match err {
        GatewayError::InvalidCredentials { .. } | GatewayError::Unauthorized { .. } => {
            CoreError::InvalidCredentials(message.clone())
        }
        other => CoreError::Gateway(other),
    };
    (message, core)
}
