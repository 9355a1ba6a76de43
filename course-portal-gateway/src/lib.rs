//! # course-portal-gateway
//!
//! Async client for the course portal gateway: the backend that fronts the
//! academic portal and packages class material into downloadable documents.
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | [`login`](ContentGateway::login) | `POST` | `/api/login` |
//! | [`list_courses`](ContentGateway::list_courses) | `GET` | `/api/courses` |
//! | [`list_units`](ContentGateway::list_units) | `GET` | `/api/units/{courseId}` |
//! | [`list_classes`](ContentGateway::list_classes) | `GET` | `/api/classes/{unitId}` |
//! | [`create_download`](ContentGateway::create_download) | `POST` | `/api/download` |
//! | [`health`](ContentGateway::health) | `GET` | `/api/health` |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: use rustls.
//! - **`native-tls`**: use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use course_portal_gateway::{ContentGateway, GatewayConfig, HttpGateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = HttpGateway::new(GatewayConfig::new("http://127.0.0.1:5000"))?;
//!     gateway.login("PES1UG23CS001", "password").await?;
//!
//!     for course in gateway.list_courses().await? {
//!         println!("{} ({})", course.subject_name, course.normalized_id());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`GatewayError`]. [`GatewayError::is_transport`]
//! separates "no answer" failures from answers that could not be used.

mod error;
mod gateway;
mod http_client;
mod traits;
mod types;
mod utils;

pub use error::{GatewayError, Result};
pub use gateway::HttpGateway;
pub use http_client::HttpUtils;
pub use traits::ContentGateway;
pub use types::{
    ClassSession, Course, DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS, DownloadFile, DownloadRequest,
    DownloadedFile, GatewayConfig, HealthStatus, LoginResponse, ResourceKind, Unit,
};
pub use utils::log_sanitizer::truncate_for_log;
