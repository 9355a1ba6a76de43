//! 设置页面状态

use course_portal_core::types::Theme;

use crate::i18n::Language;

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Language]
    }
}

/// 设置页面状态
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    pub theme: Theme,
    pub language: Language,
}

impl SettingsState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            selected_index: 0,
            theme,
            language,
        }
    }

    /// 当前选中的设置项
    pub fn selected_item(&self) -> SettingItem {
        SettingItem::all()
            .get(self.selected_index)
            .copied()
            .unwrap_or(SettingItem::Theme)
    }

    pub fn select_next(&mut self) {
        let count = SettingItem::all().len();
        self.selected_index = (self.selected_index + 1) % count;
    }

    pub fn select_previous(&mut self) {
        let count = SettingItem::all().len();
        self.selected_index = (self.selected_index + count - 1) % count;
    }
}
