//! 课程面板更新

use course_portal_core::services::DownloadPlan;

use crate::i18n::t;
use crate::message::ContentMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => {
            let cursor = app.dashboard.cursor_mut(app.focus);
            *cursor = cursor.saturating_sub(1);
        }
        ContentMessage::SelectNext => {
            let len = app.panel_len(app.focus);
            let cursor = app.dashboard.cursor_mut(app.focus);
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
        ContentMessage::SelectFirst => *app.dashboard.cursor_mut(app.focus) = 0,
        ContentMessage::SelectLast => {
            let len = app.panel_len(app.focus);
            *app.dashboard.cursor_mut(app.focus) = len.saturating_sub(1);
        }
        ContentMessage::FocusNext => app.focus = app.focus.next(),
        ContentMessage::FocusPrev => app.focus = app.focus.prev(),
        ContentMessage::Confirm => confirm(app),
        ContentMessage::Click { panel, index } => {
            if index >= app.panel_len(panel) {
                return;
            }
            app.focus = panel;
            *app.dashboard.cursor_mut(panel) = index;
            // 点击课时只移动光标，下载需要回车确认
            if panel != FocusPanel::Files {
                confirm(app);
            }
        }

        ContentMessage::ToggleFavorite => toggle_favorite(app),
        ContentMessage::ToggleSort => {
            app.dashboard.filter.order = app.dashboard.filter.order.toggled();
            app.dashboard.course_cursor = 0;
        }
        ContentMessage::ToggleFavoritesOnly => {
            app.dashboard.filter.favorites_only = !app.dashboard.filter.favorites_only;
            app.dashboard.course_cursor = 0;
        }
        ContentMessage::StartSearch => {
            app.dashboard.searching = true;
            app.focus = FocusPanel::Courses;
        }
        ContentMessage::SearchInput(c) => {
            app.dashboard.filter.search.push(c);
            app.dashboard.course_cursor = 0;
        }
        ContentMessage::SearchBackspace => {
            app.dashboard.filter.search.pop();
            app.dashboard.course_cursor = 0;
        }
        ContentMessage::EndSearch => app.dashboard.searching = false,
        ContentMessage::ClearSearch => {
            app.dashboard.filter.search.clear();
            app.dashboard.searching = false;
            app.dashboard.course_cursor = 0;
        }

        ContentMessage::DownloadAll => {
            if let Some(plan) = DownloadPlan::all(&app.selection, app.resource_kind) {
                start_download(app, plan);
            }
        }
        ContentMessage::ToggleResourceKind => {
            app.resource_kind = app.resource_kind.toggled();
            let kind = app.resource_kind.label();
            app.set_status(format!("{}: {kind}", t().status_bar.resource_kind_changed));
        }
        ContentMessage::Refresh => {
            let ticket = app.selection.begin_load_courses();
            app.tasks.fetch(ticket);
            app.dashboard.course_cursor = 0;
            app.dashboard.unit_cursor = 0;
            app.dashboard.file_cursor = 0;
            app.focus = FocusPanel::Courses;
        }
    }
}

/// 确认光标所在项：选择课程、选择单元或下载单个课时
fn confirm(app: &mut App) {
    match app.focus {
        FocusPanel::Courses => {
            if let Some(course) = app.course_under_cursor().cloned() {
                super::select_course(app, course);
            }
        }
        FocusPanel::Units => {
            let Some(unit) = app.unit_under_cursor().cloned() else {
                return;
            };
            if let Some(ticket) = app.selection.select_unit(unit) {
                app.tasks.fetch(ticket);
                app.dashboard.file_cursor = 0;
            }
            app.focus = FocusPanel::Files;
        }
        FocusPanel::Files => {
            let plan = app
                .class_under_cursor()
                .and_then(|class| DownloadPlan::single(&app.selection, class, app.resource_kind));
            if let Some(plan) = plan {
                start_download(app, plan);
            }
        }
    }
}

/// 占用下载槽位并启动下载；已有下载进行中时忽略请求
fn start_download(app: &mut App, plan: DownloadPlan) {
    let Some(permit) = app.downloads.try_acquire() else {
        log::info!("Ignoring download request, another download is running");
        app.set_status(t().status_bar.download_busy);
        return;
    };
    log::info!("Starting download of {}", plan.file_name());
    app.clear_status();
    app.tasks.download(plan, permit);
}

/// 收藏 / 取消收藏：课程栏取光标所在课程，其他栏取已选课程
fn toggle_favorite(app: &mut App) {
    let course_id = match app.focus {
        FocusPanel::Courses => app.course_under_cursor(),
        FocusPanel::Units | FocusPanel::Files => app.selection.selected_course(),
    }
    .map(|course| course.id.clone());
    let Some(course_id) = course_id else {
        return;
    };

    if let Err(e) = app.favorites.toggle(&course_id) {
        log::error!("Failed to save favorites: {e}");
        app.set_status(t().status_bar.favorite_failed);
        return;
    }

    // 收藏置顶会改变顺序，光标跟随该课程
    let position = app
        .visible_courses()
        .iter()
        .position(|course| course.id == course_id);
    match position {
        Some(position) if app.focus == FocusPanel::Courses => {
            app.dashboard.course_cursor = position;
        }
        _ => app.clamp_cursors(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use course_portal_core::services::{DownloadOutcome, FAVORITES_KEY};
    use course_portal_core::types::{NoticeLevel, ResourceKind};
    use course_portal_core::KeyValueStore;

    use super::*;
    use crate::message::{AppMessage, TaskMessage};
    use crate::test_support::{StubGateway, TestApp};

    /// 登录后选中第一门课程与第一个单元，课时已加载
    async fn with_classes(gateway: StubGateway) -> TestApp {
        let mut harness = TestApp::logged_in_with(gateway).await;
        update(&mut harness.app, ContentMessage::Confirm);
        harness.settle_next().await;
        update(&mut harness.app, ContentMessage::Confirm);
        harness.settle_next().await;
        assert_eq!(harness.app.focus, FocusPanel::Files);
        assert_eq!(harness.app.selection.classes().len(), 2);
        harness
    }

    #[tokio::test]
    async fn cursor_stays_within_list() {
        let mut harness = TestApp::logged_in().await;
        update(&mut harness.app, ContentMessage::SelectPrevious);
        assert_eq!(harness.app.dashboard.course_cursor, 0);

        for _ in 0..10 {
            update(&mut harness.app, ContentMessage::SelectNext);
        }
        assert_eq!(harness.app.dashboard.course_cursor, 2);

        update(&mut harness.app, ContentMessage::SelectFirst);
        assert_eq!(harness.app.dashboard.course_cursor, 0);
        update(&mut harness.app, ContentMessage::SelectLast);
        assert_eq!(harness.app.dashboard.course_cursor, 2);
    }

    #[tokio::test]
    async fn switching_course_discards_late_units() {
        let gateway = StubGateway::sample().with_units_delay("c1", Duration::from_millis(100));
        let mut harness = TestApp::logged_in_with(gateway).await;

        // 先选 c1（慢），再选 c2（快）
        update(&mut harness.app, ContentMessage::Click { panel: FocusPanel::Courses, index: 0 });
        update(&mut harness.app, ContentMessage::Click { panel: FocusPanel::Courses, index: 1 });

        harness.settle_next().await;
        assert_eq!(
            harness.app.selection.selected_course().map(|c| c.id.as_str()),
            Some("c2")
        );
        let units: Vec<_> = harness.app.selection.units().iter().map(|u| u.unit_id.clone()).collect();
        assert_eq!(units, vec!["c2-u1".to_string(), "c2-u2".to_string()]);

        // c1 的结果迟到，被丢弃
        harness.settle_next().await;
        let units: Vec<_> = harness.app.selection.units().iter().map(|u| u.unit_id.clone()).collect();
        assert_eq!(units, vec!["c2-u1".to_string(), "c2-u2".to_string()]);
        // 丢弃的结果不留下错误提示
        assert!(harness
            .app
            .notifications
            .visible(std::time::Instant::now())
            .iter()
            .all(|toast| toast.level != NoticeLevel::Error));
    }

    #[tokio::test]
    async fn confirming_same_course_again_reloads_units() {
        let mut harness = TestApp::logged_in_with(StubGateway::sample().expiring_units()).await;
        update(&mut harness.app, ContentMessage::Confirm);
        harness.settle_next().await;
        assert!(!harness.app.selection.is_loading_units());
        assert!(harness.app.selection.units().is_empty());

        // 单元加载失败后，再次确认同一门课程即重试
        harness.app.focus = FocusPanel::Courses;
        update(&mut harness.app, ContentMessage::Confirm);
        assert!(harness.app.selection.is_loading_units());
        assert_eq!(
            harness.app.selection.selected_course().map(|c| c.id.as_str()),
            Some("c1")
        );
        assert_eq!(harness.app.focus, FocusPanel::Units);

        harness.settle_next().await;
        assert!(!harness.app.selection.is_loading_units());
    }

    #[tokio::test]
    async fn search_filters_courses_and_resets_cursor() {
        let mut harness = TestApp::logged_in().await;
        update(&mut harness.app, ContentMessage::SelectLast);
        update(&mut harness.app, ContentMessage::StartSearch);
        for c in "physics".chars() {
            update(&mut harness.app, ContentMessage::SearchInput(c));
        }
        assert_eq!(harness.app.dashboard.course_cursor, 0);
        assert_eq!(harness.app.visible_courses().len(), 1);

        update(&mut harness.app, ContentMessage::ClearSearch);
        assert!(!harness.app.dashboard.searching);
        assert_eq!(harness.app.visible_courses().len(), 3);
    }

    #[tokio::test]
    async fn favorite_moves_to_top_and_persists() {
        let mut harness = TestApp::logged_in().await;
        update(&mut harness.app, ContentMessage::SelectLast);
        let last_id = harness.app.course_under_cursor().map(|c| c.id.clone());

        update(&mut harness.app, ContentMessage::ToggleFavorite);
        assert_eq!(harness.app.dashboard.course_cursor, 0);
        assert_eq!(harness.app.course_under_cursor().map(|c| c.id.clone()), last_id);

        let stored = harness.store.get(FAVORITES_KEY).unwrap();
        assert!(stored.is_some_and(|raw| raw.contains(last_id.as_deref().unwrap_or_default())));
    }

    #[tokio::test]
    async fn download_all_saves_file_and_releases_gate() {
        let mut harness = with_classes(StubGateway::sample()).await;
        update(&mut harness.app, ContentMessage::DownloadAll);
        assert!(harness.app.downloads.is_busy());

        let msg = harness.next_message().await;
        let AppMessage::Task(TaskMessage::DownloadFinished(Ok(DownloadOutcome::Saved(path)))) = &msg
        else {
            panic!("unexpected {msg:?}");
        };
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("UE23CS341A - Software Engineering_Unit 1_Slides.pdf")
        );
        assert!(path.exists());
        assert!(!harness.app.downloads.is_busy());

        crate::update::update(&mut harness.app, msg);
        assert!(harness
            .app
            .status_message
            .as_deref()
            .is_some_and(|s| s.contains("Slides.pdf")));
    }

    #[tokio::test]
    async fn second_download_is_refused_while_first_runs() {
        let gateway = StubGateway::sample().with_download_delay(Duration::from_millis(100));
        let mut harness = with_classes(gateway).await;

        update(&mut harness.app, ContentMessage::DownloadAll);
        update(&mut harness.app, ContentMessage::Confirm);
        assert!(harness.app.status_message.is_some());

        harness.settle_next().await;
        assert!(!harness.app.downloads.is_busy());
        assert_eq!(std::fs::read_dir(harness.download_dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn enter_on_file_downloads_selected_kind() {
        let mut harness = with_classes(StubGateway::sample()).await;
        update(&mut harness.app, ContentMessage::ToggleResourceKind);
        assert_eq!(harness.app.resource_kind, ResourceKind::Notes);

        update(&mut harness.app, ContentMessage::SelectNext);
        update(&mut harness.app, ContentMessage::Confirm);
        harness.settle_next().await;

        let names: Vec<_> = std::fs::read_dir(harness.download_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["Processes.pdf".to_string()]);
    }
}
