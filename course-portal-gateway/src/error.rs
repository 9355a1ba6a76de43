use serde::{Deserialize, Serialize};

/// Unified error type for all gateway operations.
///
/// Variants fall into two families that callers treat differently:
///
/// - **Transport failures**: [`NetworkError`](Self::NetworkError) and
///   [`Timeout`](Self::Timeout). The request never produced a usable answer.
/// - **Protocol failures**: everything the gateway answered but that could not
///   be used (`Unauthorized`, `RequestFailed`, `UnexpectedPayload`, ...).
///
/// The client never retries on its own; both families are terminal for the
/// operation that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum GatewayError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The gateway rejected the request because the session is missing or expired (HTTP 401).
    Unauthorized {
        /// Message returned by the gateway, if any.
        raw_message: Option<String>,
    },

    /// The login was rejected by the portal.
    InvalidCredentials {
        /// Message returned by the gateway, if any.
        raw_message: Option<String>,
    },

    /// The gateway answered with a non-success status code.
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Message returned by the gateway, if any.
        raw_message: Option<String>,
    },

    /// The gateway answered with a success status but the body has the wrong shape
    /// (for example an object where a list was expected).
    UnexpectedPayload {
        /// Details about what was expected.
        detail: String,
    },

    /// Failed to parse the gateway's response body.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Details about the serialization failure.
        detail: String,
    },
}

impl GatewayError {
    /// Whether this is expected behavior (expired session, wrong password, etc.), used for log levels.
    ///
    /// Use `warn` when this returns `true` and `error` when it returns `false`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. } | Self::InvalidCredentials { .. }
        )
    }

    /// Whether the gateway never answered (network error or timeout).
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// Message returned by the gateway, when the variant carries one.
    #[must_use]
    pub fn raw_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { raw_message }
            | Self::InvalidCredentials { raw_message }
            | Self::RequestFailed { raw_message, .. } => raw_message.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Unauthorized { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Unauthorized: {msg}")
                } else {
                    write!(f, "Unauthorized")
                }
            }
            Self::InvalidCredentials { raw_message } => {
                if let Some(msg) = raw_message {
                    write!(f, "Invalid credentials: {msg}")
                } else {
                    write!(f, "Invalid credentials")
                }
            }
            Self::RequestFailed {
                status,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "Request failed (HTTP {status}): {msg}")
                } else {
                    write!(f, "Request failed (HTTP {status})")
                }
            }
            Self::UnexpectedPayload { detail } => write!(f, "Unexpected payload: {detail}"),
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::SerializationError { detail } => write!(f, "Serialization error: {detail}"),
        }
    }
}

impl std::error::Error for GatewayError {}

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;
