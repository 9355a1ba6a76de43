//! 提示浮层
//!
//! 右上角堆叠显示当前可见的提示，过期判断在渲染时按时间戳进行。

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use course_portal_core::types::NoticeLevel;

use crate::model::App;
use crate::view::theme::colors;

/// 最多同时显示的提示数量
const MAX_TOASTS: usize = 4;
/// 提示框最大宽度
const MAX_WIDTH: u16 = 48;

/// 渲染提示
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let toasts = app.notifications.visible(Instant::now());

    let mut y = area.y;
    for toast in toasts.iter().rev().take(MAX_TOASTS) {
        let (icon, color) = match toast.level {
            NoticeLevel::InProgress => ("⋯", c.highlight),
            NoticeLevel::Success => ("✔", c.success),
            NoticeLevel::Error => ("✖", c.error),
        };

        let text_width = u16::try_from(toast.message.width()).unwrap_or(MAX_WIDTH);
        let width = (text_width + 6).min(MAX_WIDTH).min(area.width);
        let height = 3;
        if y + height > area.y + area.height {
            break;
        }
        let toast_area = Rect::new(area.x + area.width - width, y, width, height);

        frame.render_widget(Clear, toast_area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(c.bg));
        let line = Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::styled(toast.message.clone(), Style::default().fg(c.fg)),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), toast_area);

        y += height;
    }
}
