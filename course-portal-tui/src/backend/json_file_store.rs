//! 本地键值存储
//!
//! 使用 JSON 文件存储收藏、偏好等字符串键值
//! 实现 course-portal-core 的 KeyValueStore trait

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use course_portal_core::traits::KeyValueStore;
use course_portal_core::{CoreError, CoreResult};

/// 存储文件名
pub const STORAGE_FILE: &str = "storage.json";

type Entries = BTreeMap<String, String>;

/// 基于 JSON 文件的键值存储
///
/// 每次写入都会把整个映射写回文件；互斥锁保证写入串行。
pub struct JsonFileStore {
    path: PathBuf,
    /// 内存缓存，首次访问时从文件加载
    cache: Mutex<Option<Entries>>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// 位于指定目录下的 `storage.json`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(STORAGE_FILE))
    }

    /// 从文件加载；文件损坏时记录错误并从空映射开始
    fn load_from_file(&self) -> CoreResult<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| CoreError::StorageError(e.to_string()))?;

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                log::error!(
                    "Ignoring corrupt storage file {}: {e}",
                    self.path.display()
                );
                Ok(Entries::new())
            }
        }
    }

    /// 保存到文件
    fn save_to_file(&self, entries: &Entries) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| CoreError::StorageError(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| CoreError::StorageError(e.to_string()))
    }

    /// 在锁内读取或修改映射
    fn with_entries<T>(&self, f: impl FnOnce(&mut Entries) -> CoreResult<T>) -> CoreResult<T> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if cache.is_none() {
            *cache = Some(self.load_from_file()?);
        }
        match cache.as_mut() {
            Some(entries) => f(entries),
            None => Err(CoreError::StorageError("storage cache unavailable".to_string())),
        }
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        self.with_entries(|entries| Ok(entries.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.with_entries(|entries| {
            let mut next = entries.clone();
            next.insert(key.to_string(), value.to_string());
            self.save_to_file(&next)?;
            *entries = next;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        self.with_entries(|entries| {
            if !entries.contains_key(key) {
                return Ok(());
            }
            let mut next = entries.clone();
            next.remove(key);
            self.save_to_file(&next)?;
            *entries = next;
            Ok(())
        })
    }
}
