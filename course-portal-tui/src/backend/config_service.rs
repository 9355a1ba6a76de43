//! 配置服务
//!
//! 配置文件位于 `<config_dir>/course-portal-tui/config.json`，
//! 每个字段都有默认值，文件缺失或损坏时使用默认配置。

use std::path::{Path, PathBuf};
use std::time::Duration;

use course_portal_gateway::{
    GatewayConfig, DEFAULT_BASE_URL, DEFAULT_DOWNLOAD_TIMEOUT_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

/// 配置目录名
const APP_DIR: &str = "course-portal-tui";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";
/// 网关地址环境变量
pub const GATEWAY_URL_ENV: &str = "COURSE_PORTAL_GATEWAY_URL";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// 记住的凭证存放位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialBackend {
    /// 系统钥匙串（macOS Keychain / Windows Credential Manager）
    Keyring,
    /// 本地存储中的 base64 编码（不安全，仅用于没有钥匙串的环境）
    Encoded,
}

impl Default for CredentialBackend {
    fn default() -> Self {
        if cfg!(any(target_os = "macos", target_os = "windows")) {
            Self::Keyring
        } else {
            Self::Encoded
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub gateway_url: String,
    pub request_timeout_secs: u64,
    pub download_timeout_secs: u64,
    /// 下载目录；缺省为系统下载目录
    pub download_dir: Option<PathBuf>,
    pub credential_backend: CredentialBackend,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            download_timeout_secs: DEFAULT_DOWNLOAD_TIMEOUT_SECS,
            download_dir: None,
            credential_backend: CredentialBackend::default(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 从默认位置加载配置，并应用环境变量覆盖
    pub fn load() -> Self {
        let mut config = Self::from_file(&config_dir().join(CONFIG_FILE));
        config.apply_gateway_override(std::env::var(GATEWAY_URL_ENV).ok());
        config
    }

    /// 读取配置文件；缺失或损坏时返回默认配置
    ///
    /// 此时日志尚未初始化，损坏的文件只能打印到 stderr。
    pub fn from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            eprintln!("Warning: Ignoring invalid config {}: {e}", path.display());
            Self::default()
        })
    }

    fn apply_gateway_override(&mut self, value: Option<String>) {
        if let Some(url) = value.filter(|v| !v.trim().is_empty()) {
            self.gateway_url = url.trim().to_string();
        }
    }

    /// 网关客户端配置
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            download_timeout: Duration::from_secs(self.download_timeout_secs),
            ..GatewayConfig::new(self.gateway_url.trim_end_matches('/'))
        }
    }

    /// 下载目录
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("config.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn keyring_is_default_where_platform_store_exists() {
        let expected = if cfg!(any(target_os = "macos", target_os = "windows")) {
            CredentialBackend::Keyring
        } else {
            CredentialBackend::Encoded
        };
        assert_eq!(CredentialBackend::default(), expected);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"gateway_url":"http://portal.local:8080/","credential_backend":"encoded"}"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path);
        assert_eq!(config.gateway_url, "http://portal.local:8080/");
        assert_eq!(config.credential_backend, CredentialBackend::Encoded);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.gateway_config().base_url, "http://portal.local:8080");
    }

    #[test]
    fn corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert_eq!(AppConfig::from_file(&path), AppConfig::default());
    }

    #[test]
    fn env_override_replaces_gateway_url() {
        let mut config = AppConfig::default();
        config.apply_gateway_override(Some(" http://10.0.0.2:5000 ".to_string()));
        assert_eq!(config.gateway_url, "http://10.0.0.2:5000");

        config.apply_gateway_override(Some("   ".to_string()));
        assert_eq!(config.gateway_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn timeouts_flow_into_gateway_config() {
        let config = AppConfig {
            request_timeout_secs: 5,
            download_timeout_secs: 60,
            ..AppConfig::default()
        };
        let gateway = config.gateway_config();
        assert_eq!(gateway.request_timeout, Duration::from_secs(5));
        assert_eq!(gateway.download_timeout, Duration::from_secs(60));
    }

    #[test]
    fn explicit_download_dir_wins() {
        let config = AppConfig {
            download_dir: Some(PathBuf::from("/tmp/slides")),
            ..AppConfig::default()
        };
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/slides"));
    }
}
