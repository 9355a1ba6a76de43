//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const QUIT_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const SETTINGS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
    pub const QUICK_NAV: KeyBinding = KeyBinding::ctrl(KeyCode::Char('k'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 课程页操作
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const FAVORITE: KeyBinding = KeyBinding::alt(KeyCode::Char('f'));
    pub const SORT: KeyBinding = KeyBinding::alt(KeyCode::Char('o'));
    pub const FAVORITES_ONLY: KeyBinding = KeyBinding::alt(KeyCode::Char('v'));
    pub const DOWNLOAD_ALL: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const RESOURCE_KIND: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
}
