//! reqwest-backed gateway client

mod http;

use reqwest::Client;

use crate::error::{GatewayError, Result};
use crate::traits::GatewayErrorMapper;
use crate::types::GatewayConfig;

/// HTTP client for the course portal gateway.
///
/// Holds a cookie store so the session established by [`login`] is carried by
/// every later request.
///
/// [`login`]: crate::ContentGateway::login
pub struct HttpGateway {
    pub(crate) client: Client,
    pub(crate) config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| GatewayError::NetworkError {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }
}

impl GatewayErrorMapper for HttpGateway {}
