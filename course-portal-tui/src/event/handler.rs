//! 事件处理器

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use course_portal_core::engine::NavKey;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, LoginMessage, PaletteMessage, SettingsMessage};
use crate::model::{App, HitTarget, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App, now: Instant) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app, now),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

// ============================================================================
// 键盘
// ============================================================================

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，只处理关闭
    if app.modal.is_open() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppMessage::CloseModal,
            _ => AppMessage::Noop,
        };
    }

    match app.page {
        Page::Login => handle_login_keys(key),
        Page::Settings => handle_settings_keys(key),
        // 快速跳转快捷键在课程页的任何模式下都生效
        Page::Dashboard if DefaultKeymap::QUICK_NAV.matches(&key) => {
            AppMessage::Palette(PaletteMessage::Open)
        }
        Page::Dashboard if app.quick_nav.is_open() => handle_palette_keys(key),
        Page::Dashboard if app.dashboard.searching => handle_search_keys(key),
        Page::Dashboard => handle_dashboard_keys(key),
    }
}

/// 登录页按键
fn handle_login_keys(key: KeyEvent) -> AppMessage {
    let msg = match (key.modifiers, key.code) {
        (_, KeyCode::Tab | KeyCode::Down) => LoginMessage::NextField,
        (_, KeyCode::BackTab | KeyCode::Up) => LoginMessage::PrevField,
        (_, KeyCode::Enter) => LoginMessage::Submit,
        (_, KeyCode::Backspace) => LoginMessage::Backspace,
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => LoginMessage::Input(c),
        _ => return AppMessage::Noop,
    };
    AppMessage::Login(msg)
}

/// 设置页按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::SETTINGS.matches(&key) {
        return AppMessage::ToggleSettings;
    }
    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::QUIT_ALT.matches(&key) {
        return AppMessage::Quit;
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => SettingsMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => SettingsMessage::SelectNext,
        KeyCode::Left | KeyCode::Char('h') => SettingsMessage::PrevOption,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => SettingsMessage::NextOption,
        _ => return AppMessage::Noop,
    };
    AppMessage::Settings(msg)
}

/// 快速跳转面板打开时，面板独占键盘
fn handle_palette_keys(key: KeyEvent) -> AppMessage {
    let nav_key = match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => NavKey::Escape,
        (_, KeyCode::Up) => NavKey::Up,
        (_, KeyCode::Down) => NavKey::Down,
        (_, KeyCode::Enter) => NavKey::Enter,
        (_, KeyCode::Backspace) => NavKey::Backspace,
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => NavKey::Char(c),
        _ => return AppMessage::Noop,
    };
    AppMessage::Palette(PaletteMessage::Key(nav_key))
}

/// 输入搜索词时的按键
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    let msg = match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => ContentMessage::EndSearch,
        (_, KeyCode::Esc) => ContentMessage::ClearSearch,
        (_, KeyCode::Backspace) => ContentMessage::SearchBackspace,
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            ContentMessage::SearchInput(c)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 课程页按键
fn handle_dashboard_keys(key: KeyEvent) -> AppMessage {
    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::QUIT_ALT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::SETTINGS.matches(&key) {
        return AppMessage::ToggleSettings;
    }

    // 操作快捷键
    let bindings = [
        (DefaultKeymap::REFRESH, ContentMessage::Refresh),
        (DefaultKeymap::FAVORITE, ContentMessage::ToggleFavorite),
        (DefaultKeymap::SORT, ContentMessage::ToggleSort),
        (DefaultKeymap::FAVORITES_ONLY, ContentMessage::ToggleFavoritesOnly),
        (DefaultKeymap::DOWNLOAD_ALL, ContentMessage::DownloadAll),
        (DefaultKeymap::RESOURCE_KIND, ContentMessage::ToggleResourceKind),
        (DefaultKeymap::SEARCH, ContentMessage::StartSearch),
    ];
    if let Some((_, msg)) = bindings.into_iter().find(|(binding, _)| binding.matches(&key)) {
        return AppMessage::Content(msg);
    }

    // 列表导航
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => ContentMessage::FocusPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => ContentMessage::FocusNext,
        KeyCode::Enter => ContentMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

// ============================================================================
// 鼠标
// ============================================================================

/// 处理鼠标事件
fn handle_mouse_event(mouse: MouseEvent, app: &App, now: Instant) -> AppMessage {
    if app.modal.is_open() {
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppMessage::CloseModal,
            _ => AppMessage::Noop,
        };
    }

    let target = app.hits.borrow().target_at(mouse.column, mouse.row);
    let palette_open = app.page == Page::Dashboard && app.quick_nav.is_open();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => AppMessage::MouseDown { at: now, target },
        MouseEventKind::Moved if palette_open => match target {
            Some(HitTarget::Candidate(index)) => AppMessage::Palette(PaletteMessage::Hover(index)),
            _ => AppMessage::Noop,
        },
        MouseEventKind::ScrollUp if palette_open => {
            AppMessage::Palette(PaletteMessage::Key(NavKey::Up))
        }
        MouseEventKind::ScrollDown if palette_open => {
            AppMessage::Palette(PaletteMessage::Key(NavKey::Down))
        }
        MouseEventKind::ScrollUp if app.page == Page::Dashboard => {
            AppMessage::Content(ContentMessage::SelectPrevious)
        }
        MouseEventKind::ScrollDown if app.page == Page::Dashboard => {
            AppMessage::Content(ContentMessage::SelectNext)
        }
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestApp;
    use crossterm::event::KeyEventState;

    fn press(modifiers: KeyModifiers, code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[tokio::test]
    async fn ctrl_k_opens_palette_on_dashboard() {
        let mut harness = TestApp::new();
        harness.app.page = Page::Dashboard;
        let msg = handle_event(
            press(KeyModifiers::CONTROL, KeyCode::Char('k')),
            &harness.app,
            Instant::now(),
        );
        assert!(matches!(msg, AppMessage::Palette(PaletteMessage::Open)));

        // 登录页上 Ctrl+K 只是普通输入之外的组合键，被忽略
        harness.app.page = Page::Login;
        let msg = handle_event(
            press(KeyModifiers::CONTROL, KeyCode::Char('k')),
            &harness.app,
            Instant::now(),
        );
        assert!(matches!(msg, AppMessage::Noop));
    }

    #[tokio::test]
    async fn ctrl_k_opens_palette_while_typing_search() {
        let mut harness = TestApp::new();
        harness.app.page = Page::Dashboard;
        harness.app.dashboard.searching = true;

        let msg = handle_event(
            press(KeyModifiers::CONTROL, KeyCode::Char('k')),
            &harness.app,
            Instant::now(),
        );
        assert!(matches!(msg, AppMessage::Palette(PaletteMessage::Open)));

        crate::update::update(&mut harness.app, msg);
        assert!(harness.app.quick_nav.is_open());
        assert!(!harness.app.dashboard.searching);

        // 面板已打开时再次按下不会清空查询
        harness.app.quick_nav.set_query("lin");
        let msg = handle_event(
            press(KeyModifiers::CONTROL, KeyCode::Char('k')),
            &harness.app,
            Instant::now(),
        );
        crate::update::update(&mut harness.app, msg);
        assert!(harness.app.quick_nav.is_open());
        assert_eq!(harness.app.quick_nav.query(), "lin");
    }

    #[tokio::test]
    async fn palette_captures_plain_characters() {
        let mut harness = TestApp::new();
        harness.app.page = Page::Dashboard;
        harness.app.quick_nav.open(Instant::now());

        // 面板打开时 q 是查询字符，而不是退出
        let msg = handle_event(press(KeyModifiers::NONE, KeyCode::Char('q')), &harness.app, Instant::now());
        assert!(matches!(msg, AppMessage::Palette(PaletteMessage::Key(NavKey::Char('q')))));

        let msg = handle_event(press(KeyModifiers::NONE, KeyCode::Esc), &harness.app, Instant::now());
        assert!(matches!(msg, AppMessage::Palette(PaletteMessage::Key(NavKey::Escape))));
    }

    #[tokio::test]
    async fn release_events_are_ignored() {
        let harness = TestApp::new();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event, &harness.app, Instant::now()), AppMessage::Noop));
    }

    #[tokio::test]
    async fn dashboard_shortcuts_map_to_content_messages() {
        let mut harness = TestApp::new();
        harness.app.page = Page::Dashboard;
        let cases = [
            (KeyModifiers::ALT, KeyCode::Char('d'), ContentMessage::DownloadAll),
            (KeyModifiers::ALT, KeyCode::Char('t'), ContentMessage::ToggleResourceKind),
            (KeyModifiers::ALT, KeyCode::Char('f'), ContentMessage::ToggleFavorite),
            (KeyModifiers::NONE, KeyCode::Char('/'), ContentMessage::StartSearch),
            (KeyModifiers::NONE, KeyCode::Enter, ContentMessage::Confirm),
        ];
        for (modifiers, code, expected) in cases {
            match handle_event(press(modifiers, code), &harness.app, Instant::now()) {
                AppMessage::Content(msg) => assert_eq!(msg, expected),
                other => panic!("{code:?} mapped to {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn left_click_reports_hit_target() {
        let mut harness = TestApp::new();
        harness.app.page = Page::Dashboard;
        harness
            .app
            .hits
            .borrow_mut()
            .push(ratatui::layout::Rect::new(0, 3, 20, 1), HitTarget::Candidate(2));

        let at = Instant::now();
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        match handle_event(event, &harness.app, at) {
            AppMessage::MouseDown { at: seen, target } => {
                assert_eq!(seen, at);
                assert_eq!(target, Some(HitTarget::Candidate(2)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
