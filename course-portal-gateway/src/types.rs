use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::utils::flexible_id;

// ============ Catalog ============

/// A course as listed by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Raw identifier. May carry stray escape characters (`\`, `"`).
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: String,
    /// Display name, usually `"CODE - Title"`.
    pub subject_name: String,
}

impl Course {
    pub fn new(id: impl Into<String>, subject_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subject_name: subject_name.into(),
        }
    }

    /// Identifier with every `\` and `"` stripped, as expected by the units endpoint.
    pub fn normalized_id(&self) -> String {
        self.id.chars().filter(|c| !matches!(c, '\\' | '"')).collect()
    }
}

/// A unit within a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub unit_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Unit {
    pub fn new(unit_id: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            unit_id: unit_id.into(),
            description: title.clone(),
            title,
        }
    }
}

/// A class session within a unit; the downloadable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub class_id: String,
    pub title: String,
}

impl ClassSession {
    pub fn new(class_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            class_id: class_id.into(),
            title: title.into(),
        }
    }
}

// ============ Downloads ============

/// Which document type the gateway should package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ResourceKind {
    #[default]
    #[serde(rename = "2")]
    Slides,
    #[serde(rename = "3")]
    Notes,
}

impl ResourceKind {
    /// Selector code sent to the gateway.
    pub fn code(self) -> &'static str {
        match self {
            Self::Slides => "2",
            Self::Notes => "3",
        }
    }

    /// Human readable label, also used in generated file names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Slides => "Slides",
            Self::Notes => "Notes",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Slides => Self::Notes,
            Self::Notes => Self::Slides,
        }
    }
}

/// One entry of a download request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadFile {
    pub class_id: String,
    pub name: String,
}

impl From<&ClassSession> for DownloadFile {
    fn from(class: &ClassSession) -> Self {
        Self {
            class_id: class.class_id.clone(),
            name: class.title.clone(),
        }
    }
}

/// Body of `POST /api/download`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Ordered list of class sessions to merge.
    pub files: Vec<DownloadFile>,
    pub course_id: String,
    pub course_name: String,
    pub unit_name: String,
    pub resource_type: ResourceKind,
}

/// Binary result of a download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// File name announced through `Content-Disposition`, if any.
    pub suggested_name: Option<String>,
}

// ============ Auth and health ============

/// Body of a successful `POST /api/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

// ============ Client configuration ============

/// Default gateway address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
/// Default connect timeout (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default download timeout (seconds). The gateway merges PDFs synchronously.
pub const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 300;

/// Connection settings for [`HttpGateway`](crate::HttpGateway).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub download_timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            download_timeout: Duration::from_secs(DEFAULT_DOWNLOAD_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_id_strips_escape_characters() {
        let course = Course::new(r#"\"20975\""#, "UE23CS341A - Software Engineering");
        assert_eq!(course.normalized_id(), "20975");
    }

    #[test]
    fn normalized_id_keeps_clean_ids() {
        assert_eq!(Course::new("123", "x").normalized_id(), "123");
    }

    #[test]
    fn course_deserializes_from_camel_case() {
        let course: Result<Course, _> = serde_json::from_str(r#"{"id":"42","subjectName":"Maths"}"#);
        assert!(
            matches!(&course, Ok(c) if *c == Course::new("42", "Maths")),
            "{course:?}"
        );
    }

    #[test]
    fn ids_accept_numbers() {
        let class: Result<ClassSession, _> =
            serde_json::from_str(r#"{"classId":7,"title":"Intro","path":"7"}"#);
        assert!(matches!(&class, Ok(c) if c.class_id == "7"), "{class:?}");

        let unit: Result<Unit, _> = serde_json::from_str(r#"{"unitId":3,"title":"Unit 1"}"#);
        assert!(matches!(&unit, Ok(u) if u.unit_id == "3" && u.description.is_empty()));
    }

    #[test]
    fn resource_kind_wire_codes() {
        assert_eq!(
            serde_json::to_string(&ResourceKind::Slides).unwrap_or_default(),
            r#""2""#
        );
        assert_eq!(
            serde_json::to_string(&ResourceKind::Notes).unwrap_or_default(),
            r#""3""#
        );
        assert_eq!(ResourceKind::Notes.label(), "Notes");
        assert_eq!(ResourceKind::Slides.toggled(), ResourceKind::Notes);
    }

    #[test]
    fn download_request_uses_gateway_field_names() {
        let req = DownloadRequest {
            files: vec![DownloadFile::from(&ClassSession::new("9", "Intro"))],
            course_id: "c1".to_string(),
            course_name: "Maths".to_string(),
            unit_name: "Unit 1".to_string(),
            resource_type: ResourceKind::Notes,
        };
        let json = serde_json::to_value(&req).unwrap_or_default();
        assert_eq!(json["files"][0]["classId"], "9");
        assert_eq!(json["files"][0]["name"], "Intro");
        assert_eq!(json["course_id"], "c1");
        assert_eq!(json["unit_name"], "Unit 1");
        assert_eq!(json["resource_type"], "3");
    }
}
