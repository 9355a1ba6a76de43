//! Test helpers
//!
//! Mock implementations and fixture factories.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use course_portal_gateway::{
    ClassSession, ContentGateway, Course, DownloadRequest, DownloadedFile, GatewayError,
    LoginResponse, Unit,
};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{FileSink, NotificationSink};
use crate::types::{Notice, NoticeLevel, TicketId};

// ===== MockGateway =====

pub struct MockGateway {
    login: RwLock<Result<LoginResponse, GatewayError>>,
    courses: RwLock<Result<Vec<Course>, GatewayError>>,
    units: RwLock<HashMap<String, Result<Vec<Unit>, GatewayError>>>,
    classes: RwLock<HashMap<String, Result<Vec<ClassSession>, GatewayError>>>,
    download: RwLock<Result<DownloadedFile, GatewayError>>,
    /// Per-key (course id / unit id) response delay, for out-of-order responses
    delays: RwLock<HashMap<String, Duration>>,
    download_requests: RwLock<Vec<DownloadRequest>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            login: RwLock::new(Ok(LoginResponse {
                status: "success".to_string(),
                message: "Login successful".to_string(),
            })),
            courses: RwLock::new(Ok(Vec::new())),
            units: RwLock::new(HashMap::new()),
            classes: RwLock::new(HashMap::new()),
            download: RwLock::new(Ok(DownloadedFile {
                bytes: b"%PDF-1.7".to_vec(),
                content_type: Some("application/pdf".to_string()),
                suggested_name: None,
            })),
            delays: RwLock::new(HashMap::new()),
            download_requests: RwLock::new(Vec::new()),
        }
    }

    pub async fn set_login(&self, result: Result<LoginResponse, GatewayError>) {
        *self.login.write().await = result;
    }

    pub async fn set_courses(&self, result: Result<Vec<Course>, GatewayError>) {
        *self.courses.write().await = result;
    }

    pub async fn set_units(&self, course_id: &str, result: Result<Vec<Unit>, GatewayError>) {
        self.units.write().await.insert(course_id.to_string(), result);
    }

    pub async fn set_classes(
        &self,
        unit_id: &str,
        result: Result<Vec<ClassSession>, GatewayError>,
    ) {
        self.classes.write().await.insert(unit_id.to_string(), result);
    }

    pub async fn set_download(&self, result: Result<DownloadedFile, GatewayError>) {
        *self.download.write().await = result;
    }

    pub async fn set_delay(&self, key: &str, delay: Duration) {
        self.delays.write().await.insert(key.to_string(), delay);
    }

    pub async fn download_requests(&self) -> Vec<DownloadRequest> {
        self.download_requests.read().await.clone()
    }

    async fn wait_for(&self, key: &str) {
        let delay = self.delays.read().await.get(key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ContentGateway for MockGateway {
    async fn login(&self, _username: &str, _password: &str) -> Result<LoginResponse, GatewayError> {
        self.login.read().await.clone()
    }

    async fn list_courses(&self) -> Result<Vec<Course>, GatewayError> {
        self.courses.read().await.clone()
    }

    async fn list_units(&self, course_id: &str) -> Result<Vec<Unit>, GatewayError> {
        self.wait_for(course_id).await;
        self.units
            .read()
            .await
            .get(course_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_classes(&self, unit_id: &str) -> Result<Vec<ClassSession>, GatewayError> {
        self.wait_for(unit_id).await;
        self.classes
            .read()
            .await
            .get(unit_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_download(
        &self,
        request: &DownloadRequest,
    ) -> Result<DownloadedFile, GatewayError> {
        self.download_requests.write().await.push(request.clone());
        self.download.read().await.clone()
    }
}

// ===== RecordingNotificationSink =====

#[derive(Default)]
pub struct RecordingNotificationSink {
    notices: Mutex<Vec<Notice>>,
    dismissed: Mutex<Vec<TicketId>>,
}

impl RecordingNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last(&self, id: TicketId) -> Option<Notice> {
        self.notices().into_iter().rev().find(|n| n.id == id)
    }

    /// How many times the ticket was settled (success or error)
    pub fn settled_count(&self, id: TicketId) -> usize {
        self.notices()
            .iter()
            .filter(|n| n.id == id && n.level != NoticeLevel::InProgress)
            .count()
    }

    pub fn was_dismissed(&self, id: TicketId) -> bool {
        self.dismissed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id)
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn publish(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }

    fn dismiss(&self, id: TicketId) {
        self.dismissed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(id);
    }
}

// ===== RecordingFileSink =====

#[derive(Default)]
pub struct RecordingFileSink {
    files: Mutex<Vec<(String, Vec<u8>)>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingFileSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }

    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl FileSink for RecordingFileSink {
    async fn materialize(&self, file_name: &str, bytes: &[u8]) -> CoreResult<PathBuf> {
        let failure = self
            .fail_with
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(msg) = failure {
            return Err(CoreError::FileWriteError(msg));
        }
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(file_name))
    }
}

// ===== Factories =====

pub fn course(id: &str, name: &str) -> Course {
    Course::new(id, name)
}

pub fn network_error() -> GatewayError {
    GatewayError::NetworkError {
        detail: "connection refused".to_string(),
    }
}
