//! 通知中心
//!
//! 实现 course-portal-core 的 NotificationSink trait。
//! 每个通知票据对应一条提示，状态更新时原地替换，不会重复堆叠。
//! 成功提示 3 秒后过期，错误提示 6 秒后过期，进行中的提示一直保留。

use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use course_portal_core::traits::NotificationSink;
use course_portal_core::types::{Notice, NoticeLevel, TicketId};

/// 成功提示的显示时长
pub const SUCCESS_TTL: Duration = Duration::from_secs(3);
/// 错误提示的显示时长
pub const ERROR_TTL: Duration = Duration::from_secs(6);

/// 一条提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: TicketId,
    pub level: NoticeLevel,
    pub message: String,
    /// 最近一次更新的时间
    pub updated_at: Instant,
}

impl Toast {
    /// 在 `now` 时是否已过期
    pub fn is_expired(&self, now: Instant) -> bool {
        let ttl = match self.level {
            NoticeLevel::InProgress => return false,
            NoticeLevel::Success => SUCCESS_TTL,
            NoticeLevel::Error => ERROR_TTL,
        };
        now.saturating_duration_since(self.updated_at) >= ttl
    }
}

/// 通知中心
#[derive(Debug, Default)]
pub struct NotificationCenter {
    toasts: Mutex<Vec<Toast>>,
}

impl NotificationCenter {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// 记录一次通知更新
    pub fn record(&self, notice: Notice, now: Instant) {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        let toast = Toast {
            id: notice.id,
            level: notice.level,
            message: notice.message,
            updated_at: now,
        };
        match toasts.iter_mut().find(|t| t.id == toast.id) {
            Some(existing) => *existing = toast,
            None => toasts.push(toast),
        }
    }

    /// `now` 时仍然可见的提示，按创建顺序排列
    pub fn visible(&self, now: Instant) -> Vec<Toast> {
        let toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts.iter().filter(|t| !t.is_expired(now)).cloned().collect()
    }

    /// 清除过期提示
    pub fn prune(&self, now: Instant) {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts.retain(|t| !t.is_expired(now));
    }

    /// 是否有进行中的操作
    pub fn has_pending(&self) -> bool {
        let toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts.iter().any(|t| t.level == NoticeLevel::InProgress)
    }
}

impl NotificationSink for NotificationCenter {
    fn publish(&self, notice: Notice) {
        self.record(notice, Instant::now());
    }

    fn dismiss(&self, id: TicketId) {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        toasts.retain(|t| t.id != id);
    }
}
