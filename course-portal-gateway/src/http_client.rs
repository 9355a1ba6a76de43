//! Generic HTTP client tools
//!
//! Shared request plumbing for [`HttpGateway`](crate::HttpGateway): sending,
//! logging, mapping transport failures and reading bodies.
//!
//! # design principles
//! - **No automatic retry** - every failure is terminal for the operation that produced it
//! - **Status codes are returned, not judged** - each endpoint decides what a status means
//! - **Bodies are truncated before logging**

use reqwest::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::GatewayError;
use crate::utils::log_sanitizer::truncate_for_log;

/// Raw binary response.
#[derive(Debug)]
pub(crate) struct BinaryResponse {
    pub status: u16,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `method_name` - request method name (such as "GET", "POST", used for logs)
    /// * `path` - endpoint path (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))`
    /// * `Err(GatewayError::NetworkError | GatewayError::Timeout)`
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<(u16, String), GatewayError> {
        let response = Self::send(request_builder, method_name, path).await?;
        let status_code = response.status().as_u16();

        let response_text = response
            .text()
            .await
            .map_err(|e| GatewayError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[gateway] Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Performs an HTTP request whose success body is binary.
    pub(crate) async fn execute_binary(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<BinaryResponse, GatewayError> {
        let response = Self::send(request_builder, method_name, path).await?;
        let status = response.status().as_u16();
        let header = |name| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let content_type = header(CONTENT_TYPE);
        let content_disposition = header(CONTENT_DISPOSITION);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?
            .to_vec();

        log::debug!(
            "[gateway] Response Body: {} bytes ({})",
            bytes.len(),
            content_type.as_deref().unwrap_or("unknown type")
        );

        Ok(BinaryResponse {
            status,
            bytes,
            content_type,
            content_disposition,
        })
    }

    async fn send(
        request_builder: RequestBuilder,
        method_name: &str,
        path: &str,
    ) -> Result<Response, GatewayError> {
        log::debug!("[gateway] {method_name} {path}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                GatewayError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        log::debug!("[gateway] Response Status: {}", response.status().as_u16());
        Ok(response)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(GatewayError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[gateway] JSON parse failed: {e}");
            log::error!("[gateway] Raw response: {}", truncate_for_log(response_text));
            GatewayError::ParseError {
                detail: e.to_string(),
            }
        })
    }

    /// Extract the human readable message from a gateway error body.
    ///
    /// The gateway uses either `{"error": ...}` or `{"status": "error", "message": ...}`.
    pub fn error_message(body: &[u8]) -> Option<String> {
        let value: serde_json::Value = serde_json::from_slice(body).ok()?;
        ["error", "message"]
            .iter()
            .find_map(|key| value.get(key).and_then(|v| v.as_str()))
            .map(str::to_string)
    }

    /// Extract `filename` from a `Content-Disposition` header value.
    pub fn disposition_filename(header: &str) -> Option<String> {
        header.split(';').map(str::trim).find_map(|part| {
            let value = part.strip_prefix("filename=")?;
            let value = value.trim_matches('"').trim();
            (!value.is_empty()).then(|| value.to_string())
        })
    }
}
