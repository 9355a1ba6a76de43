//! 快速跳转面板更新

use std::time::Instant;

use course_portal_core::engine::NavOutcome;

use crate::message::PaletteMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: PaletteMessage) {
    let outcome = match msg {
        PaletteMessage::Open => {
            app.taps.reset();
            app.dashboard.searching = false;
            app.quick_nav.open(Instant::now());
            return;
        }
        PaletteMessage::Key(key) => app.quick_nav.handle_key(key, app.selection.courses()),
        PaletteMessage::Hover(index) => {
            let count = app.quick_nav.candidates(app.selection.courses()).len();
            app.quick_nav.hover(index, count);
            return;
        }
        PaletteMessage::Click(index) => app.quick_nav.click(index, app.selection.courses()),
    };

    if let NavOutcome::Selected(course) = outcome {
        log::debug!("Quick navigation to {}", course.id);
        super::select_course(app, course);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use course_portal_core::engine::{NavKey, FOCUS_DELAY};

    use super::*;
    use crate::message::AppMessage;
    use crate::model::FocusPanel;
    use crate::test_support::TestApp;
    use crate::update::update as dispatch;

    async fn opened() -> TestApp {
        let mut harness = TestApp::logged_in().await;
        update(&mut harness.app, PaletteMessage::Open);
        dispatch(
            &mut harness.app,
            AppMessage::Tick(Instant::now() + FOCUS_DELAY + Duration::from_millis(1)),
        );
        assert!(harness.app.quick_nav.has_focus());
        harness
    }

    fn type_query(app: &mut App, query: &str) {
        for c in query.chars() {
            update(app, PaletteMessage::Key(NavKey::Char(c)));
        }
    }

    #[tokio::test]
    async fn keystrokes_before_focus_are_dropped() {
        let mut harness = TestApp::logged_in().await;
        update(&mut harness.app, PaletteMessage::Open);
        type_query(&mut harness.app, "alg");
        assert_eq!(harness.app.quick_nav.query(), "");
    }

    #[tokio::test]
    async fn enter_selects_highlighted_candidate_and_loads_units() {
        let mut harness = opened().await;
        type_query(&mut harness.app, "linear");
        update(&mut harness.app, PaletteMessage::Key(NavKey::Enter));

        assert!(!harness.app.quick_nav.is_open());
        assert_eq!(
            harness.app.selection.selected_course().map(|c| c.id.as_str()),
            Some("c2")
        );
        assert_eq!(harness.app.focus, FocusPanel::Units);
        assert!(harness.app.selection.is_loading_units());

        harness.settle_next().await;
        assert!(!harness.app.selection.is_loading_units());
        assert_eq!(harness.app.selection.units().len(), 2);
    }

    #[tokio::test]
    async fn hover_then_click_selects_clicked_candidate() {
        let mut harness = opened().await;
        update(&mut harness.app, PaletteMessage::Hover(1));
        assert_eq!(harness.app.quick_nav.highlighted(), 1);

        // 超出候选范围的悬停被忽略
        update(&mut harness.app, PaletteMessage::Hover(42));
        assert_eq!(harness.app.quick_nav.highlighted(), 1);

        update(&mut harness.app, PaletteMessage::Click(0));
        assert!(!harness.app.quick_nav.is_open());
        assert_eq!(
            harness.app.selection.selected_course().map(|c| c.id.as_str()),
            Some("c1")
        );
    }

    #[tokio::test]
    async fn escape_closes_without_selection() {
        let mut harness = opened().await;
        update(&mut harness.app, PaletteMessage::Key(NavKey::Escape));
        assert!(!harness.app.quick_nav.is_open());
        assert!(harness.app.selection.selected_course().is_none());
    }
}
