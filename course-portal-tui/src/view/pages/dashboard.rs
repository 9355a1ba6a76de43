//! 课程页面视图
//!
//! 三栏布局：课程 │ 单元 │ 课时

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use course_portal_core::types::{ResourceKind, SortOrder};

use crate::i18n::t;
use crate::model::{App, FocusPanel, HitTarget};
use crate::view::theme::colors;

/// 渲染课程页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // 课程
            Constraint::Percentage(30), // 单元
            Constraint::Percentage(30), // 课时
        ])
        .split(area);

    render_courses(app, frame, columns[0]);
    render_units(app, frame, columns[1]);
    render_files(app, frame, columns[2]);
}

/// 课程列表：顶部一行过滤条件
fn render_courses(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    // 过滤条件
    let filter = &app.dashboard.filter;
    let mut spans = vec![Span::styled(
        format!(" {}{}", texts.dashboard.search_prefix, filter.search),
        Style::default().fg(if app.dashboard.searching { c.highlight } else { c.muted }),
    )];
    if app.dashboard.searching {
        spans.push(Span::styled("▏", Style::default().fg(c.highlight)));
    }
    let order = match filter.order {
        SortOrder::Ascending => texts.dashboard.ascending,
        SortOrder::Descending => texts.dashboard.descending,
    };
    spans.push(Span::styled(format!("  {order}"), Style::default().fg(c.muted)));
    if filter.favorites_only {
        spans.push(Span::styled(
            format!("  {}", texts.dashboard.favorites_only),
            Style::default().fg(c.favorite),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let selected_id = app.selection.selected_course().map(|course| course.id.as_str());
    let items: Vec<ListItem> = app
        .visible_courses()
        .into_iter()
        .map(|course| {
            let star = if app.favorites.contains(&course.id) {
                Span::styled("★ ", Style::default().fg(c.favorite))
            } else {
                Span::raw("  ")
            };
            let name_style = if selected_id == Some(course.id.as_str()) {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(vec![
                star,
                Span::styled(course.subject_name.clone(), name_style),
            ]))
        })
        .collect();

    let placeholder = if app.selection.is_loading_courses() {
        texts.common.loading
    } else {
        texts.dashboard.no_courses
    };
    render_list(
        app,
        frame,
        rows[1],
        FocusPanel::Courses,
        texts.dashboard.courses,
        items,
        placeholder,
    );
}

/// 单元列表
fn render_units(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let selected_id = app.selection.selected_unit().map(|unit| unit.unit_id.as_str());
    let items: Vec<ListItem> = app
        .selection
        .units()
        .iter()
        .map(|unit| {
            let style = if selected_id == Some(unit.unit_id.as_str()) {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(Line::from(Span::styled(unit.title.clone(), style)))
        })
        .collect();

    let placeholder = if app.selection.is_loading_units() {
        texts.common.loading
    } else if app.selection.selected_course().is_none() {
        texts.dashboard.pick_course
    } else {
        texts.dashboard.no_units
    };
    render_list(
        app,
        frame,
        area,
        FocusPanel::Units,
        texts.dashboard.units,
        items,
        placeholder,
    );
}

/// 课时列表：底部一行下载类型
fn render_files(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = app
        .selection
        .classes()
        .iter()
        .map(|class| ListItem::new(Line::from(Span::styled(class.title.clone(), Style::default().fg(c.fg)))))
        .collect();

    let placeholder = if app.selection.is_loading_classes() {
        texts.common.loading
    } else if app.selection.selected_unit().is_none() {
        texts.dashboard.pick_unit
    } else {
        texts.dashboard.no_files
    };
    render_list(
        app,
        frame,
        rows[0],
        FocusPanel::Files,
        texts.dashboard.files,
        items,
        placeholder,
    );

    // 下载类型
    let kind = match app.resource_kind {
        ResourceKind::Slides => texts.dashboard.slides,
        ResourceKind::Notes => texts.dashboard.notes,
    };
    let busy = if app.downloads.is_busy() { "  ⇣" } else { "" };
    let line = Line::from(vec![
        Span::styled(
            format!(" {}: ", texts.dashboard.resource_kind),
            Style::default().fg(c.muted),
        ),
        Span::styled(kind, Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)),
        Span::styled(busy, Style::default().fg(c.warning)),
    ]);
    frame.render_widget(Paragraph::new(line), rows[1]);
}

/// 渲染一栏列表，并登记每个可见行的命中区域
fn render_list(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    panel: FocusPanel,
    title: &str,
    items: Vec<ListItem>,
    placeholder: &str,
) {
    let c = colors();
    let focused = app.focus == panel;

    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(focused));

    if items.is_empty() {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            format!(" {placeholder}"),
            Style::default().fg(c.muted),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    let count = items.len();
    let highlight = if focused {
        c.selected()
    } else {
        Style::default().bg(c.border)
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    let mut state = ListState::default();
    state.select(Some(app.dashboard.cursor(panel).min(count - 1)));
    frame.render_stateful_widget(list, area, &mut state);

    // 渲染后 offset 已根据选中项调整
    let mut hits = app.hits.borrow_mut();
    let visible = usize::from(inner.height).min(count.saturating_sub(state.offset()));
    for (row, index) in (state.offset()..state.offset() + visible).enumerate() {
        let Ok(row) = u16::try_from(row) else { break };
        hits.push(
            Rect::new(inner.x, inner.y + row, inner.width, 1),
            HitTarget::Row { panel, index },
        );
    }
}
