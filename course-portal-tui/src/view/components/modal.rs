//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::Modal;
use crate::model::App;

use super::centered_rect;

/// 渲染当前弹窗（若有）
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::Help) => render_help(frame),
        Some(Modal::Error { title, message }) => render_error(frame, title, message),
        None => {}
    }
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled("Esc", Style::default().fg(Color::DarkGray)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame) {
    let texts = t();
    let hints = &texts.hints;
    let area = centered_rect(56, 24, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.help_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let section = |title: &'static str| {
        Line::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        section(texts.modal.help_global),
        row("Ctrl+k", hints.quick_nav),
        row(hints.triple_click, hints.quick_nav),
        row("Alt+s", hints.settings),
        row("?", hints.help),
        row("q / Alt+q", hints.quit),
        Line::from(""),
        section(texts.modal.help_courses),
        row("←→ / Tab", hints.switch_panel),
        row("↑↓ / jk", hints.select),
        row("Enter", hints.open),
        row("Alt+d", hints.download_all),
        row("Alt+t", hints.resource_kind),
        row("Alt+f", hints.favorite),
        row("Alt+v", hints.favorites_only),
        row("Alt+o", hints.sort),
        row("/", hints.search),
        row("Alt+r", hints.refresh),
        Line::from(""),
        Line::styled(texts.modal.help_close, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
