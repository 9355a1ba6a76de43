//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod login;              // 登录表单
//!         mod content;            // 三栏列表、过滤、下载
//!         mod palette;            // 快速跳转面板
//!         mod settings;           // 设置页
//!         mod task;               // 后台任务完成
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!     —— 的主更新函数。
//!         使用 match 进行穷举，复杂的子消息委托给子模块处理。
//!
//!
//! 异步请求：
//!     Update 从不等待网关。选择课程 / 单元时，状态机先发放 FetchTicket，
//!     再交给 TaskRunner 在后台执行；结果以 TaskMessage 回到这里，
//!     由状态机按代数判断是否仍然有效：
//!
//!         select_course(A) ── ticket(g=1) ──▶ 任务 A ─┐
//!         select_course(B) ── ticket(g=2) ──▶ 任务 B ─┼─▶ TaskMessage::Fetched
//!                                                     │
//!         A 晚于 B 返回时，g=1 已过期，结果被丢弃（Resolution::Stale）
//!
//!
//! 鼠标：
//!     每次左键按下都计入三连击；第三次在 500ms 内的点击打开快速跳转面板，
//!     这次点击本身不再作用于命中的行。
//!     面板打开时，点击候选项即选择，点击面板外即关闭。
//!

mod content;
mod login;
mod palette;
mod settings;
mod task;

use std::time::Instant;

use course_portal_core::engine::NavKey;
use course_portal_core::types::Course;

use crate::message::{AppMessage, ContentMessage, PaletteMessage};
use crate::model::{App, FocusPanel, HitTarget, Page};

/// 主更新函数
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::Login(login_msg) => login::update(app, login_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Palette(palette_msg) => palette::update(app, palette_msg),
        AppMessage::Settings(settings_msg) => settings::update(app, settings_msg),
        AppMessage::Task(task_msg) => task::update(app, task_msg),
        AppMessage::MouseDown { at, target } => handle_mouse_down(app, at, target),
        AppMessage::ToggleSettings => {
            if app.page.is_authenticated() {
                app.page = match app.page {
                    Page::Settings => Page::Dashboard,
                    _ => Page::Settings,
                };
            }
        }
        AppMessage::ShowHelp => app.modal.show_help(),
        AppMessage::CloseModal => app.modal.close(),
        AppMessage::Tick(now) => {
            app.quick_nav.poll_focus(now);
            app.notifications.prune(now);
        }
        AppMessage::Noop => {}
    }
}

/// 左键按下
fn handle_mouse_down(app: &mut App, at: Instant, target: Option<HitTarget>) {
    if app.page != Page::Dashboard {
        return;
    }

    if app.quick_nav.is_open() {
        match target {
            Some(HitTarget::Candidate(index)) => {
                palette::update(app, PaletteMessage::Click(index));
            }
            Some(HitTarget::Palette) => {}
            _ => palette::update(app, PaletteMessage::Key(NavKey::Escape)),
        }
        return;
    }

    if app.taps.register(at) {
        app.quick_nav.open(at);
        return;
    }

    if let Some(HitTarget::Row { panel, index }) = target {
        content::update(app, ContentMessage::Click { panel, index });
    }
}

/// 选择课程并在后台加载其单元
///
/// 重复选择当前课程同样会清空单元与课时并重新加载，单元加载失败后可借此重试。
pub(crate) fn select_course(app: &mut App, course: Course) {
    let ticket = app.selection.select_course(course.clone());
    app.tasks.fetch(ticket);
    app.dashboard.unit_cursor = 0;
    app.dashboard.file_cursor = 0;

    if let Some(position) = app
        .visible_courses()
        .iter()
        .position(|visible| visible.id == course.id)
    {
        app.dashboard.course_cursor = position;
    }
    app.focus = FocusPanel::Units;
}
