//! 设置页更新
//!
//! 修改立即生效并写入本地存储；写入失败只提示，不回滚界面。

use crate::i18n::{self, t};
use crate::message::SettingsMessage;
use crate::model::state::SettingItem;
use crate::model::App;
use crate::view::theme;

pub fn update(app: &mut App, msg: SettingsMessage) {
    match msg {
        SettingsMessage::SelectPrevious => app.settings.select_previous(),
        SettingsMessage::SelectNext => app.settings.select_next(),
        // 两个设置项都只有两个取值，左右方向效果相同
        SettingsMessage::PrevOption | SettingsMessage::NextOption => cycle_option(app),
    }
}

fn cycle_option(app: &mut App) {
    let preferences = app.tasks.context().preferences();
    let saved = match app.settings.selected_item() {
        SettingItem::Theme => {
            app.settings.theme = app.settings.theme.toggled();
            theme::set_theme(app.settings.theme);
            preferences.set_theme(app.settings.theme)
        }
        SettingItem::Language => {
            app.settings.language = app.settings.language.next();
            i18n::set_language(app.settings.language);
            preferences.set_language(app.settings.language.code())
        }
    };

    if let Err(e) = saved {
        log::error!("Failed to save preference: {e}");
        app.set_status(t().status_bar.preference_failed);
    }
}

#[cfg(test)]
mod tests {
    use course_portal_core::services::THEME_KEY;
    use course_portal_core::types::Theme;
    use course_portal_core::KeyValueStore;

    use super::*;
    use crate::test_support::TestApp;

    #[tokio::test]
    async fn theme_change_is_persisted() {
        let mut harness = TestApp::new();
        assert_eq!(harness.app.settings.selected_item(), SettingItem::Theme);
        let before = harness.app.settings.theme;

        update(&mut harness.app, SettingsMessage::NextOption);
        assert_eq!(harness.app.settings.theme, before.toggled());
        assert_eq!(
            harness.store.get(THEME_KEY).unwrap().as_deref(),
            Some(before.toggled().as_str())
        );

        update(&mut harness.app, SettingsMessage::PrevOption);
        assert_eq!(harness.app.settings.theme, before);
        assert_eq!(before, Theme::default());
    }

    #[tokio::test]
    async fn selection_wraps_around_items() {
        let mut harness = TestApp::new();
        update(&mut harness.app, SettingsMessage::SelectPrevious);
        assert_eq!(harness.app.settings.selected_item(), SettingItem::Language);
        update(&mut harness.app, SettingsMessage::SelectNext);
        assert_eq!(harness.app.settings.selected_item(), SettingItem::Theme);
    }
}
