use async_trait::async_trait;

use crate::error::{GatewayError, Result};
use crate::types::{
    ClassSession, Course, DownloadRequest, DownloadedFile, HealthStatus, LoginResponse, Unit,
};

/// Raw API error (internal)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// HTTP status code
    pub status: u16,
    /// Raw error message (`error` or `message` field)
    pub message: Option<String>,
}

impl RawApiError {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }
}

/// Error context (internal)
/// Marks the endpoint an error came from, so a failed login is not read as an expired session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum ErrorContext {
    #[default]
    Session,
    Login,
}

/// Gateway error mapping (internal)
/// Maps raw HTTP errors to [`GatewayError`]
pub(crate) trait GatewayErrorMapper {
    /// Map a raw API error to [`GatewayError`]
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> GatewayError {
        match (raw.status, context) {
            (401, ErrorContext::Login) => GatewayError::InvalidCredentials {
                raw_message: raw.message,
            },
            (401, ErrorContext::Session) => GatewayError::Unauthorized {
                raw_message: raw.message,
            },
            (status, _) => GatewayError::RequestFailed {
                status,
                raw_message: raw.message,
            },
        }
    }

    /// Shortcut: the response has an unexpected shape
    fn unexpected_payload(&self, detail: impl ToString) -> GatewayError {
        GatewayError::UnexpectedPayload {
            detail: detail.to_string(),
        }
    }
}

/// Course portal gateway
///
/// The implementation keeps the session (the HTTP one uses a cookie); callers only `login` first.
#[async_trait]
pub trait ContentGateway: Send + Sync {
    /// Log in to the portal
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// List courses
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// List the units of a course (`course_id` must be normalized)
    async fn list_units(&self, course_id: &str) -> Result<Vec<Unit>>;

    /// List the classes of a unit
    async fn list_classes(&self, unit_id: &str) -> Result<Vec<ClassSession>>;

    /// Ask the gateway to build (merge) a document and return its bytes
    async fn create_download(&self, request: &DownloadRequest) -> Result<DownloadedFile>;

    /// Health check
    ///
    /// The default reports healthy; the HTTP implementation calls `/api/health`.
    async fn health(&self) -> Result<HealthStatus> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
            message: String::new(),
        })
    }
}
