//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use course_portal_gateway::GatewayError;

use crate::types::FetchLevel;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The gateway could not be reached or did not answer in time
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The gateway answered with something unusable
    #[error("Protocol failure: {0}")]
    Protocol(String),

    /// The gateway session is missing or expired; the user has to log in again
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// Login rejected
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A downloaded document could not be written locally
    #[error("File write error: {0}")]
    FileWriteError(String),

    /// Gateway error (converting from library)
    #[error("{0}")]
    Gateway(#[from] GatewayError),
}

impl CoreError {
    /// Whether it is expected behavior (expired session, wrong password, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SessionExpired(_) | Self::InvalidCredentials(_) | Self::Transport(_) => true,
            Self::Gateway(e) => e.is_expected() || e.is_transport(),
            _ => false,
        }
    }

    /// Classify a failed list fetch.
    ///
    /// For units and classes, any answer the gateway gave that is not a list
    /// means the session is no longer usable.
    pub fn from_fetch(level: FetchLevel, err: GatewayError) -> Self {
        if err.is_transport() {
            return Self::Transport(err.to_string());
        }
        match (level, &err) {
            (
                FetchLevel::Units | FetchLevel::Classes,
                GatewayError::Unauthorized { .. }
                | GatewayError::RequestFailed { .. }
                | GatewayError::UnexpectedPayload { .. },
            ) => Self::SessionExpired(err.to_string()),
            (FetchLevel::Courses, GatewayError::Unauthorized { .. }) => {
                Self::SessionExpired(err.to_string())
            }
            _ => Self::Protocol(err.to_string()),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
