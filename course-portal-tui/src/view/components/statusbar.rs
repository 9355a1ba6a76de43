//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前页面和焦点生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let content = Line::from(spans);
    let paragraph = Paragraph::new(content).style(Styles::statusbar());

    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let hints_text = &t().hints;
    let mut hints = Vec::new();

    match app.page {
        Page::Login => {
            hints.push(("Tab", hints_text.next_field));
            hints.push(("Space", hints_text.toggle_remember));
            hints.push(("Enter", hints_text.submit));
            hints.push(("Ctrl+c", hints_text.quit));
            return hints;
        }
        Page::Settings => {
            hints.push(("↑↓", hints_text.select));
            hints.push(("←→", hints_text.change_option));
            hints.push(("Esc", hints_text.back));
        }
        Page::Dashboard => {
            if app.quick_nav.is_open() {
                hints.push(("↑↓", hints_text.select));
                hints.push(("Enter", hints_text.open));
                hints.push(("Esc", hints_text.close));
                return hints;
            }
            if app.dashboard.searching {
                hints.push(("Enter", hints_text.search));
                hints.push(("Esc", hints_text.close));
                return hints;
            }
            hints.push(("←→", hints_text.switch_panel));
            match app.focus {
                FocusPanel::Courses => {
                    hints.push(("Enter", hints_text.open));
                    hints.push(("Alt+f", hints_text.favorite));
                    hints.push(("/", hints_text.search));
                }
                FocusPanel::Units => {
                    hints.push(("Enter", hints_text.open));
                    hints.push(("Alt+d", hints_text.download_all));
                }
                FocusPanel::Files => {
                    hints.push(("Enter", hints_text.download));
                    hints.push(("Alt+d", hints_text.download_all));
                    hints.push(("Alt+t", hints_text.resource_kind));
                }
            }
            hints.push(("Ctrl+k", hints_text.quick_nav));
        }
    }

    hints.push(("?", hints_text.help));
    hints.push(("q", hints_text.quit));

    hints
}
