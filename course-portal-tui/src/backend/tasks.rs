//! 后台任务
//!
//! 每个网关操作在独立的 tokio 任务中运行，结果通过 mpsc 通道
//! 以 `AppMessage::Task` 投递回主循环。
//!
//! 实际工作放在内层任务中；外层任务等待其 `JoinHandle`，
//! 即使内层任务 panic，也保证会发送一条完成消息。

use std::sync::Arc;

use course_portal_core::engine::{DownloadPermit, FetchTicket};
use course_portal_core::services::{DownloadPlan, FetchCompletion, FetchResult};
use course_portal_core::types::FetchLevel;
use course_portal_core::{CoreError, ServiceContext};
use course_portal_gateway::GatewayError;
use tokio::sync::mpsc::UnboundedSender;

use crate::message::{AppMessage, TaskMessage};

/// 登录时的通知文本
const LOGIN_MESSAGE: &str = "Logging in...";

/// 后台任务启动器
#[derive(Clone)]
pub struct TaskRunner {
    ctx: Arc<ServiceContext>,
    tx: UnboundedSender<AppMessage>,
}

impl TaskRunner {
    pub fn new(ctx: Arc<ServiceContext>, tx: UnboundedSender<AppMessage>) -> Self {
        Self { ctx, tx }
    }

    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// 登录
    pub fn login(&self, username: String, password: String, remember: bool) {
        let notice = self.ctx.notify(LOGIN_MESSAGE);
        let auth = self.ctx.auth();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let handle = tokio::spawn(async move {
                auth.login(&username, &password, remember, notice).await
            });
            let result = handle.await.unwrap_or_else(|e| {
                log::error!("Login task aborted: {e}");
                Err(CoreError::Protocol(e.to_string()))
            });
            send(&tx, TaskMessage::LoggedIn(result));
        });
    }

    /// 执行一次列表请求
    pub fn fetch(&self, ticket: FetchTicket) {
        let notice = self.ctx.notify(ticket.level().loading_message());
        let service = self.ctx.selection();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let fallback = ticket.clone();
            let handle = tokio::spawn(async move { service.fetch(ticket).await });
            let completion = handle.await.unwrap_or_else(|e| {
                log::error!("Fetch task for {:?} aborted: {e}", fallback.level());
                aborted_fetch(fallback, &e.to_string())
            });
            send(&tx, TaskMessage::Fetched { completion, notice });
        });
    }

    /// 执行下载；`permit` 随任务移动，任务结束（或 panic）时释放
    pub fn download(&self, plan: DownloadPlan, permit: DownloadPermit) {
        let notice = self.ctx.notify(plan.progress_message());
        let service = self.ctx.downloads();
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let handle =
                tokio::spawn(async move { service.execute(plan, notice, permit).await });
            let outcome = handle.await.map_err(|e| {
                log::error!("Download task aborted: {e}");
                e.to_string()
            });
            send(&tx, TaskMessage::DownloadFinished(outcome));
        });
    }
}

/// 任务异常终止时，按票据层级构造一个失败结果，让加载状态得以结束
pub fn aborted_fetch(ticket: FetchTicket, detail: &str) -> FetchCompletion {
    let err = GatewayError::NetworkError {
        detail: format!("task aborted: {detail}"),
    };
    let result = match ticket.level() {
        FetchLevel::Courses => FetchResult::Courses(Err(err)),
        FetchLevel::Units => FetchResult::Units(Err(err)),
        FetchLevel::Classes => FetchResult::Classes(Err(err)),
    };
    FetchCompletion { ticket, result }
}

fn send(tx: &UnboundedSender<AppMessage>, msg: TaskMessage) {
    if tx.send(AppMessage::Task(msg)).is_err() {
        log::debug!("Main loop is gone, dropping task result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_portal_core::engine::{Resolution, SelectionMachine, SelectionPhase};

    #[test]
    fn aborted_fetch_fails_the_matching_level() {
        let mut machine = SelectionMachine::new();
        let ticket = machine.begin_load_courses();

        let completion = aborted_fetch(ticket, "panicked");
        assert!(matches!(completion.result, FetchResult::Courses(Err(_))));

        let resolution = completion.apply(&mut machine);
        assert!(matches!(resolution, Resolution::Failed(CoreError::Transport(_))));
        assert_eq!(machine.phase(), SelectionPhase::CoursesReady);
        assert!(machine.courses().is_empty());
    }
}
