//! 登录页面视图

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::LoginField;
use crate::model::App;
use crate::view::components::centered_rect;
use crate::view::theme::colors;

/// 标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 12;

/// 渲染登录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let login = &app.login;

    let form_area = centered_rect(50, 11, area);
    let block = Block::default()
        .title(format!(" {} ", texts.login.title))
        .title_alignment(Alignment::Center)
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(true));

    let masked = "•".repeat(login.password.chars().count());
    let checkbox = if login.remember { "[x]" } else { "[ ]" };

    let mut lines = vec![
        Line::from(""),
        field_line(
            texts.login.username,
            &login.username,
            login.field == LoginField::Username,
        ),
        Line::from(""),
        field_line(
            texts.login.password,
            &masked,
            login.field == LoginField::Password,
        ),
        Line::from(""),
        field_line(
            texts.login.remember,
            checkbox,
            login.field == LoginField::Remember,
        ),
        Line::from(""),
    ];

    let submit = if login.submitting {
        Span::styled(texts.login.submitting, Style::default().fg(c.warning))
    } else if login.is_complete() {
        Span::styled(texts.login.submit, Style::default().fg(c.success))
    } else {
        Span::styled(texts.login.missing_fields, Style::default().fg(c.muted))
    };
    lines.push(Line::from(submit).alignment(Alignment::Center));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, form_area);
}

/// 一行“标签: 值”，选中时高亮并显示光标
fn field_line(label: &str, value: &str, selected: bool) -> Line<'static> {
    let c = colors();
    let padding = LABEL_WIDTH.saturating_sub(label.width());
    let label = format!("  {label}{}", " ".repeat(padding));

    let value_style = if selected {
        Style::default().fg(c.fg).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default().fg(c.fg)
    };
    let marker = if selected { "▏" } else { "" };

    Line::from(vec![
        Span::styled(label, Style::default().fg(c.muted)),
        Span::styled(value.to_string(), value_style),
        Span::styled(marker, Style::default().fg(c.highlight)),
    ])
}
