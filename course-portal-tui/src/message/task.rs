//! 后台任务完成消息

use course_portal_core::services::{DownloadOutcome, FetchCompletion, NotificationTicket};
use course_portal_core::CoreResult;

/// 后台任务完成后投递回主循环的消息
#[derive(Debug)]
pub enum TaskMessage {
    /// 登录完成，成功时携带网关的欢迎消息
    LoggedIn(CoreResult<String>),

    /// 列表请求完成；通知在结果应用到状态机之后结算
    Fetched {
        completion: FetchCompletion,
        notice: NotificationTicket,
    },

    /// 下载任务结束；任务异常终止时为 `Err`
    DownloadFinished(Result<DownloadOutcome, String>),
}
