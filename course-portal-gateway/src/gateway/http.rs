//! Gateway HTTP request methods

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{ContentGateway, ErrorContext, GatewayErrorMapper, RawApiError};
use crate::types::{
    ClassSession, Course, DownloadRequest, DownloadedFile, HealthStatus, LoginResponse, Unit,
};

use super::HttpGateway;

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

impl HttpGateway {
    /// GET a path whose body must be a JSON array
    async fn get_list<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<Vec<T>> {
        let request = self.client.get(self.url(path));
        let (status, body) = HttpUtils::execute_request(request, "GET", path).await?;

        if !is_success(status) {
            let raw = RawApiError::new(status, HttpUtils::error_message(body.as_bytes()));
            let err = self.map_error(raw, ErrorContext::Session);
            log::warn!("[gateway] GET {path} failed: {err}");
            return Err(err);
        }

        let value: serde_json::Value = HttpUtils::parse_json(&body)?;
        if !value.is_array() {
            log::warn!("[gateway] GET {path} returned a non-list body");
            return Err(self.unexpected_payload(format!("expected a list of {what}")));
        }

        serde_json::from_value(value).map_err(|e| GatewayError::ParseError {
            detail: e.to_string(),
        })
    }
}

#[async_trait]
impl ContentGateway for HttpGateway {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let path = "/api/login";
        let body = serde_json::json!({ "username": username, "password": password });
        let request = self.client.post(self.url(path)).json(&body);
        log::debug!("[gateway] login as {username}");

        let (status, text) = HttpUtils::execute_request(request, "POST", path).await?;
        if !is_success(status) {
            let raw = RawApiError::new(status, HttpUtils::error_message(text.as_bytes()));
            return Err(self.map_error(raw, ErrorContext::Login));
        }

        let response: LoginResponse = HttpUtils::parse_json(&text)?;
        if response.status == "success" {
            Ok(response)
        } else {
            Err(GatewayError::InvalidCredentials {
                raw_message: Some(response.message).filter(|m| !m.is_empty()),
            })
        }
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.get_list("/api/courses", "courses").await
    }

    async fn list_units(&self, course_id: &str) -> Result<Vec<Unit>> {
        let path = format!("/api/units/{}", urlencoding::encode(course_id));
        self.get_list(&path, "units").await
    }

    async fn list_classes(&self, unit_id: &str) -> Result<Vec<ClassSession>> {
        let path = format!("/api/classes/{}", urlencoding::encode(unit_id));
        self.get_list(&path, "classes").await
    }

    async fn create_download(&self, request: &DownloadRequest) -> Result<DownloadedFile> {
        let path = "/api/download";
        let body = serde_json::to_vec(request).map_err(|e| GatewayError::SerializationError {
            detail: e.to_string(),
        })?;
        let builder = self
            .client
            .post(self.url(path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .timeout(self.config.download_timeout)
            .body(body);

        log::debug!(
            "[gateway] download {} file(s) for {} / {} ({})",
            request.files.len(),
            request.course_name,
            request.unit_name,
            request.resource_type.label()
        );

        let response = HttpUtils::execute_binary(builder, "POST", path).await?;
        if !is_success(response.status) {
            let raw = RawApiError::new(response.status, HttpUtils::error_message(&response.bytes));
            let err = self.map_error(raw, ErrorContext::Session);
            log::warn!("[gateway] download failed: {err}");
            return Err(err);
        }

        // a success status may still carry a JSON error body
        if response
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"))
        {
            let message = HttpUtils::error_message(&response.bytes);
            return Err(GatewayError::UnexpectedPayload {
                detail: message.unwrap_or_else(|| "expected a document, got JSON".to_string()),
            });
        }

        Ok(DownloadedFile {
            suggested_name: response
                .content_disposition
                .as_deref()
                .and_then(HttpUtils::disposition_filename),
            content_type: response.content_type,
            bytes: response.bytes,
        })
    }

    async fn health(&self) -> Result<HealthStatus> {
        let path = "/api/health";
        let request = self.client.get(self.url(path));
        let (status, text) = HttpUtils::execute_request(request, "GET", path).await?;
        if !is_success(status) {
            let raw = RawApiError::new(status, HttpUtils::error_message(text.as_bytes()));
            return Err(self.map_error(raw, ErrorContext::Session));
        }
        HttpUtils::parse_json(&text)
    }
}
