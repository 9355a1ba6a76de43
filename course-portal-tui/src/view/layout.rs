//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    app.hits.borrow_mut().clear();

    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    // 渲染标题栏
    render_title_bar(app, frame, title_area);

    // 根据当前页面渲染内容
    match app.page {
        Page::Login => pages::login::render(app, frame, content_area),
        Page::Dashboard => pages::dashboard::render(app, frame, content_area),
        Page::Settings => pages::settings::render(app, frame, content_area),
    }

    // 渲染状态栏
    components::statusbar::render(app, frame, status_area);

    // 浮层（从下到上）：提示、快速跳转面板、弹窗
    components::toasts::render(app, frame, content_area);
    if app.page == Page::Dashboard && app.quick_nav.is_open() {
        components::command_palette::render(app, frame, content_area);
    }
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut title = format!(" {} v{}", t().common.app_name, env!("CARGO_PKG_VERSION"));
    if let Some(course) = app.selection.selected_course() {
        title.push_str(" │ ");
        title.push_str(&course.subject_name);
        if let Some(unit) = app.selection.selected_unit() {
            title.push_str(" › ");
            title.push_str(&unit.title);
        }
    }
    if app.notifications.has_pending() {
        title.push_str(&format!("  ⋯ {}", t().common.loading));
    }
    let paragraph = Paragraph::new(title).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(paragraph, area);
}
