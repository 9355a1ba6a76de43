//! Core domain types

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// Re-export gateway wire types
pub use course_portal_gateway::{
    ClassSession, Course, DownloadFile, DownloadRequest, DownloadedFile, ResourceKind, Unit,
};

// ===== Selection =====

/// Level of the course → unit → class hierarchy a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FetchLevel {
    Courses,
    Units,
    Classes,
}

impl FetchLevel {
    /// Text shown while the fetch is running.
    pub fn loading_message(self) -> &'static str {
        match self {
            Self::Courses => "Loading courses...",
            Self::Units => "Loading units...",
            Self::Classes => "Loading files...",
        }
    }

    /// User-facing text for a failed fetch.
    pub fn failure_message(self, err: &CoreError) -> &'static str {
        let relogin = matches!(err, CoreError::SessionExpired(_));
        match (self, relogin) {
            (Self::Courses, _) if matches!(err, CoreError::Transport(_)) => {
                "Network error fetching courses"
            }
            (Self::Courses, _) => "Failed to load courses data",
            (Self::Units, true) => "Failed to load units. Please try logging in again.",
            (Self::Units, false) => "Failed to load units",
            (Self::Classes, true) => "Failed to load classes. Please try logging in again.",
            (Self::Classes, false) => "Failed to load files",
        }
    }
}

/// Sort direction of the course list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

// ===== Notifications =====

/// Identifier of one notification ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TicketId(pub u64);

/// State of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    InProgress,
    Success,
    Error,
}

/// One update of a notification; later updates with the same id replace earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: TicketId,
    pub level: NoticeLevel,
    pub message: String,
}

// ===== Preferences =====

/// Color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// ===== Credentials =====

/// Username and password remembered between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RememberedCredentials {
    #[serde(rename = "u")]
    pub username: String,
    #[serde(rename = "p")]
    pub password: String,
}
