//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use course_portal_core::types::Theme;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 < > 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let block = Block::default()
        .title(format!(" {} ", texts.settings.title))
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(true));

    let mut lines = vec![Line::from("")];

    // === 主题设置 ===
    let theme_value = match settings.theme {
        Theme::Dark => texts.settings.dark,
        Theme::Light => texts.settings.light,
    };
    lines.push(render_setting_row(
        texts.settings.theme,
        theme_value,
        settings.selected_index == 0,
    ));

    // === 语言设置 ===
    lines.push(render_setting_row(
        texts.settings.language,
        settings.language.display_name(),
        settings.selected_index == 1,
    ));

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.hints.select),
            Style::default().fg(c.muted),
        ),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.hints.change_option),
            Style::default().fg(c.muted),
        ),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.hints.back),
            Style::default().fg(c.muted),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// 渲染一行设置：`标签   < 值 >`
fn render_setting_row(label: &str, value: &str, selected: bool) -> Line<'static> {
    let c = colors();
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let inner_width = VALUE_WIDTH.saturating_sub(4);
    let value_padding = inner_width.saturating_sub(value.width());
    let left = value_padding / 2;
    let right = value_padding - left;

    let prefix = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    let value_style = if selected {
        c.selected()
    } else {
        Style::default().fg(c.muted)
    };

    Line::from(vec![
        Span::styled(format!("{prefix}{label}{}", " ".repeat(label_padding)), label_style),
        Span::styled(
            format!("< {}{value}{} >", " ".repeat(left), " ".repeat(right)),
            value_style,
        ),
    ])
}
