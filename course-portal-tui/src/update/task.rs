//! 后台任务完成后的更新

use course_portal_core::engine::Resolution;
use course_portal_core::services::{DownloadOutcome, SelectionService};
use course_portal_core::CoreError;

use crate::i18n::t;
use crate::message::TaskMessage;
use crate::model::{App, FocusPanel, Page};

pub fn update(app: &mut App, msg: TaskMessage) {
    match msg {
        TaskMessage::LoggedIn(result) => {
            app.login.submitting = false;
            // 失败原因已经由登录通知展示
            if result.is_ok() {
                app.page = Page::Dashboard;
                app.focus = FocusPanel::Courses;
                app.clear_status();
                let ticket = app.selection.begin_load_courses();
                app.tasks.fetch(ticket);
            }
        }

        TaskMessage::Fetched { completion, notice } => {
            let level = completion.ticket.level();
            let resolution = completion.apply(&mut app.selection);
            if matches!(resolution, Resolution::Failed(CoreError::SessionExpired(_))) {
                app.set_status(t().status_bar.session_expired);
            }
            SelectionService::settle(level, &resolution, notice);
            app.clamp_cursors();
        }

        TaskMessage::DownloadFinished(Ok(DownloadOutcome::Saved(path))) => {
            app.set_status(format!("{} {}", t().status_bar.saved_to, path.display()));
        }
        // 失败原因已经由下载通知展示
        TaskMessage::DownloadFinished(Ok(DownloadOutcome::Failed(_))) => {}
        TaskMessage::DownloadFinished(Err(detail)) => {
            app.modal.show_error(t().modal.task_failed, detail);
        }
    }
}
