//! 测试工具：可编排的网关桩与完整组装的 App

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use course_portal_core::services::EncodedCredentialCache;
use course_portal_core::traits::{DirectoryFileSink, InMemoryKeyValueStore};
use course_portal_core::ServiceContext;
use course_portal_gateway::{
    ClassSession, ContentGateway, Course, DownloadRequest, DownloadedFile, GatewayError,
    LoginResponse, Result, Unit,
};
use tempfile::TempDir;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::backend::{NotificationCenter, TaskRunner};
use crate::message::{AppMessage, LoginMessage};
use crate::model::{App, Page};
use crate::update::update;

/// 内存中的网关桩
///
/// 三门课程；每门课程两个单元（`<course>-u1`、`<course>-u2`）；
/// 每个单元两个课时（`Intro`、`Processes`）。
pub struct StubGateway {
    courses: Vec<Course>,
    reject_login: bool,
    expire_units: bool,
    units_delay: HashMap<String, Duration>,
    download_delay: Duration,
}

impl StubGateway {
    pub fn sample() -> Self {
        Self {
            courses: vec![
                Course::new("c1", "UE23CS341A - Software Engineering"),
                Course::new("c2", "UE23MA201B - Linear Algebra"),
                Course::new("c3", "UE23PH101A - Engineering Physics"),
            ],
            reject_login: false,
            expire_units: false,
            units_delay: HashMap::new(),
            download_delay: Duration::ZERO,
        }
    }

    pub fn rejecting_login(mut self) -> Self {
        self.reject_login = true;
        self
    }

    /// 单元请求返回 401
    pub fn expiring_units(mut self) -> Self {
        self.expire_units = true;
        self
    }

    pub fn with_units_delay(mut self, course_id: &str, delay: Duration) -> Self {
        self.units_delay.insert(course_id.to_string(), delay);
        self
    }

    pub fn with_download_delay(mut self, delay: Duration) -> Self {
        self.download_delay = delay;
        self
    }
}

#[async_trait]
impl ContentGateway for StubGateway {
    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse> {
        if self.reject_login {
            return Err(GatewayError::InvalidCredentials {
                raw_message: Some("Invalid username or password".to_string()),
            });
        }
        Ok(LoginResponse {
            status: "success".to_string(),
            message: format!("Welcome, {username}"),
        })
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        Ok(self.courses.clone())
    }

    async fn list_units(&self, course_id: &str) -> Result<Vec<Unit>> {
        if let Some(delay) = self.units_delay.get(course_id) {
            tokio::time::sleep(*delay).await;
        }
        if self.expire_units {
            return Err(GatewayError::Unauthorized { raw_message: None });
        }
        Ok(vec![
            Unit::new(format!("{course_id}-u1"), "Unit 1"),
            Unit::new(format!("{course_id}-u2"), "Unit 2"),
        ])
    }

    async fn list_classes(&self, _unit_id: &str) -> Result<Vec<ClassSession>> {
        Ok(vec![
            ClassSession::new("501", "Intro"),
            ClassSession::new("502", "Processes"),
        ])
    }

    async fn create_download(&self, _request: &DownloadRequest) -> Result<DownloadedFile> {
        tokio::time::sleep(self.download_delay).await;
        Ok(DownloadedFile {
            bytes: b"%PDF-1.4 stub".to_vec(),
            content_type: Some("application/pdf".to_string()),
            suggested_name: None,
        })
    }
}

/// 组装好的 App 以及接收后台任务消息的通道
pub struct TestApp {
    pub app: App,
    pub rx: UnboundedReceiver<AppMessage>,
    pub store: Arc<InMemoryKeyValueStore>,
    pub vault: Arc<EncodedCredentialCache>,
    pub download_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_gateway(StubGateway::sample())
    }

    pub fn with_gateway(gateway: StubGateway) -> Self {
        let download_dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryKeyValueStore::new());
        let vault = Arc::new(EncodedCredentialCache::new(store.clone()));
        let notifications = NotificationCenter::shared();
        let ctx = Arc::new(ServiceContext::new(
            Arc::new(gateway),
            store.clone(),
            vault.clone(),
            notifications.clone(),
            Arc::new(DirectoryFileSink::new(download_dir.path())),
        ));

        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(TaskRunner::new(ctx, tx), notifications);
        Self {
            app,
            rx,
            store,
            vault,
            download_dir,
        }
    }

    /// 登录成功且课程列表已加载
    pub async fn logged_in() -> Self {
        Self::logged_in_with(StubGateway::sample()).await
    }

    pub async fn logged_in_with(gateway: StubGateway) -> Self {
        let mut harness = Self::with_gateway(gateway);
        harness.app.login.username = "pes1ug".to_string();
        harness.app.login.password = "secret".to_string();
        update(&mut harness.app, AppMessage::Login(LoginMessage::Submit));
        harness.settle_next().await;
        harness.settle_next().await;
        assert_eq!(harness.app.page, Page::Dashboard);
        assert!(!harness.app.selection.is_loading_courses());
        harness
    }

    /// 等待下一条后台任务消息
    pub async fn next_message(&mut self) -> AppMessage {
        tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
            .await
            .unwrap()
            .unwrap()
    }

    /// 等待下一条后台任务消息并交给 update
    pub async fn settle_next(&mut self) {
        let msg = self.next_message().await;
        update(&mut self.app, msg);
    }
}

