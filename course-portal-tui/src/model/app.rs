//! 应用主状态结构

use std::cell::RefCell;
use std::sync::Arc;

use course_portal_core::engine::{
    course_filter, DownloadGate, QuickNav, SelectionMachine, TapChain,
};
use course_portal_core::services::FavoritesService;
use course_portal_core::types::{ClassSession, Course, ResourceKind, Unit};

use super::state::{DashboardState, LoginState, ModalState, SettingsState};
use super::{FocusPanel, HitMap, Page};
use crate::backend::{NotificationCenter, TaskRunner};
use crate::i18n::{self, Language};
use crate::view::theme;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前页面
    pub page: Page,

    /// 课程页焦点面板
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    /// 登录页状态
    pub login: LoginState,
    /// 课程页状态
    pub dashboard: DashboardState,
    /// 设置页面状态
    pub settings: SettingsState,
    /// 弹窗状态
    pub modal: ModalState,

    // === 交互状态 ===
    /// 课程 / 单元 / 课时选择
    pub selection: SelectionMachine,
    /// 快速跳转面板
    pub quick_nav: QuickNav,
    /// 三连击检测
    pub taps: TapChain,
    /// 下载槽位
    pub downloads: DownloadGate,
    /// 收藏
    pub favorites: FavoritesService,
    /// 下载类型（课件 / 笔记）
    pub resource_kind: ResourceKind,

    // === 平台 ===
    /// 提示列表（与核心库的通知票据共享）
    pub notifications: Arc<NotificationCenter>,
    /// 后台任务
    pub tasks: TaskRunner,
    /// 本帧的鼠标命中区域
    pub hits: RefCell<HitMap>,
}

impl App {
    /// 创建新的应用实例，从本地存储恢复收藏、偏好和记住的凭证
    pub fn new(tasks: TaskRunner, notifications: Arc<NotificationCenter>) -> Self {
        let ctx = tasks.context();
        let preferences = ctx.preferences();

        let theme_pref = preferences.theme();
        let language = preferences
            .language()
            .as_deref()
            .and_then(Language::from_code)
            .unwrap_or_default();
        theme::set_theme(theme_pref);
        i18n::set_language(language);

        Self {
            should_quit: false,
            page: Page::Login,
            focus: FocusPanel::Courses,
            status_message: None,
            login: LoginState::from_remembered(ctx.auth().remembered()),
            dashboard: DashboardState::new(),
            settings: SettingsState::new(theme_pref, language),
            modal: ModalState::new(),
            selection: SelectionMachine::new(),
            quick_nav: QuickNav::new(),
            taps: TapChain::new(),
            downloads: DownloadGate::new(),
            favorites: ctx.favorites(),
            resource_kind: ResourceKind::default(),
            notifications,
            tasks,
            hits: RefCell::new(HitMap::default()),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 课程列表（已过滤、收藏置顶、排序）
    pub fn visible_courses(&self) -> Vec<&Course> {
        course_filter::project(
            self.selection.courses(),
            &self.favorites.as_set(),
            &self.dashboard.filter,
        )
    }

    /// 光标所在的课程
    pub fn course_under_cursor(&self) -> Option<&Course> {
        self.visible_courses()
            .get(self.dashboard.course_cursor)
            .copied()
    }

    /// 光标所在的单元
    pub fn unit_under_cursor(&self) -> Option<&Unit> {
        self.selection.units().get(self.dashboard.unit_cursor)
    }

    /// 光标所在的课时
    pub fn class_under_cursor(&self) -> Option<&ClassSession> {
        self.selection.classes().get(self.dashboard.file_cursor)
    }

    /// 指定面板的列表长度
    pub fn panel_len(&self, panel: FocusPanel) -> usize {
        match panel {
            FocusPanel::Courses => self.visible_courses().len(),
            FocusPanel::Units => self.selection.units().len(),
            FocusPanel::Files => self.selection.classes().len(),
        }
    }

    /// 列表变化后把三栏光标限制在范围内
    pub fn clamp_cursors(&mut self) {
        for panel in [FocusPanel::Courses, FocusPanel::Units, FocusPanel::Files] {
            let len = self.panel_len(panel);
            self.dashboard.clamp(panel, len);
        }
    }
}
