//! 快速跳转面板
//!
//! 顶部一行输入框，下面最多 10 个候选课程。
//! 课程名形如 `CODE - Title` 时，代码与标题分开着色。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use course_portal_core::engine::MAX_CANDIDATES;
use course_portal_core::utils::course_label::{self, CourseLabel};

use crate::i18n::t;
use crate::model::{App, HitTarget};
use crate::view::theme::colors;

/// 面板宽度
const WIDTH: u16 = 64;
/// 输入行 + 分隔行 + 候选 + 底部提示 + 边框
const HEIGHT: u16 = MAX_CANDIDATES as u16 + 5;

/// 渲染快速跳转面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let nav = &app.quick_nav;

    let width = WIDTH.min(area.width);
    let height = HEIGHT.min(area.height);
    let top = area.y + (area.height - height).min(1);
    let palette_area = Rect::new(area.x + (area.width - width) / 2, top, width, height);

    frame.render_widget(Clear, palette_area);
    let block = Block::default()
        .title(format!(" {} ", texts.palette.title))
        .title_alignment(Alignment::Center)
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(true))
        .style(Style::default().bg(c.bg));
    let inner = block.inner(palette_area);
    frame.render_widget(block, palette_area);

    let mut hits = app.hits.borrow_mut();
    hits.push(palette_area, HitTarget::Palette);

    // 输入行
    let input = if nav.query().is_empty() {
        Span::styled(texts.palette.placeholder, Style::default().fg(c.muted))
    } else {
        Span::styled(nav.query().to_string(), Style::default().fg(c.fg))
    };
    let mut input_spans = vec![Span::styled("› ", Style::default().fg(c.highlight)), input];
    if nav.has_focus() {
        input_spans.push(Span::styled("▏", Style::default().fg(c.highlight)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(input_spans)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    // 候选
    let candidates = nav.candidates(app.selection.courses());
    let list_top = inner.y + 2;
    let list_bottom = inner.y + inner.height.saturating_sub(1);

    if candidates.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(texts.palette.no_matches, Style::default().fg(c.muted))),
            Rect::new(inner.x, list_top.min(list_bottom), inner.width, 1),
        );
    }

    for (index, course) in candidates.iter().enumerate() {
        let Ok(offset) = u16::try_from(index) else { break };
        let y = list_top + offset;
        if y >= list_bottom {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let highlighted = index == nav.highlighted();
        let favorite = app.favorites.contains(&course.id);

        let mut spans = vec![if favorite {
            Span::styled("★ ", Style::default().fg(c.favorite))
        } else {
            Span::raw("  ")
        }];
        match course_label::parse(&course.subject_name) {
            CourseLabel::Coded { code, title } => {
                spans.push(Span::styled(
                    format!("{code} "),
                    Style::default().fg(c.muted).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(title.to_string()));
            }
            CourseLabel::Raw(name) => spans.push(Span::raw(name.to_string())),
        }

        let style = if highlighted {
            c.selected()
        } else {
            Style::default().fg(c.fg)
        };
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), row);
        hits.push(row, HitTarget::Candidate(index));
    }

    // 底部提示
    frame.render_widget(
        Paragraph::new(Span::styled(texts.palette.footer, Style::default().fg(c.muted)))
            .alignment(Alignment::Center),
        Rect::new(inner.x, list_bottom, inner.width, 1),
    );
}
