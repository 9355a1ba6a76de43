//!
//! src/backend/mod.rs
//! Backend 层：平台实现与后台任务
//!
//! course-portal-core 通过 trait 描述副作用，这一层提供终端平台的实现：
//!
//!     src/backend/mod.rs
//!         mod config_service;        // 配置文件 + 环境变量
//!         mod credential_service;    // 系统钥匙串（CredentialVault）
//!         mod json_file_store;       // storage.json（KeyValueStore）
//!         mod notification_center;   // 提示列表（NotificationSink）
//!         mod tasks;                 // tokio 任务 + mpsc 回传
//!
//!
//!     组装：
//!
//!         build_context(&config, notifications)
//!             ├── HttpGateway            ← config.gateway_config()
//!             ├── JsonFileStore          ← <config_dir>/storage.json
//!             ├── CredentialVault        ← keyring 或 EncodedCredentialCache
//!             ├── NotificationCenter     ← 与 App 共享，用于渲染提示
//!             └── DirectoryFileSink      ← config.download_dir()
//!

mod config_service;
mod credential_service;
mod json_file_store;
mod notification_center;
mod tasks;

use std::sync::Arc;

use anyhow::Result;
use course_portal_core::services::EncodedCredentialCache;
use course_portal_core::traits::{CredentialVault, DirectoryFileSink, KeyValueStore};
use course_portal_core::ServiceContext;
use course_portal_gateway::HttpGateway;

pub use config_service::{config_dir, AppConfig, CredentialBackend};
pub use credential_service::KeyringCredentialVault;
pub use json_file_store::JsonFileStore;
pub use notification_center::NotificationCenter;
pub use tasks::TaskRunner;

/// 组装服务上下文
pub fn build_context(
    config: &AppConfig,
    notifications: Arc<NotificationCenter>,
) -> Result<Arc<ServiceContext>> {
    let gateway = HttpGateway::new(config.gateway_config())?;
    let store: Arc<dyn KeyValueStore> = Arc::new(JsonFileStore::in_dir(&config_dir()));

    let credential_vault: Arc<dyn CredentialVault> = match config.credential_backend {
        CredentialBackend::Keyring => Arc::new(KeyringCredentialVault::new()),
        CredentialBackend::Encoded => {
            log::warn!("Remembered credentials use the encoded cache, which is not secure");
            Arc::new(EncodedCredentialCache::new(store.clone()))
        }
    };

    let download_dir = config.download_dir();
    log::info!("Downloads go to {}", download_dir.display());

    Ok(Arc::new(ServiceContext::new(
        Arc::new(gateway),
        store,
        credential_vault,
        notifications,
        Arc::new(DirectoryFileSink::new(download_dir)),
    )))
}
