//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：帮助、错误弹窗的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `login.*`, `dashboard.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：快捷键说明
//!
//! 网关返回的文本与核心库的通知文本不做翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 登录页文本
    pub login: LoginTexts,
    /// 课程页文本
    pub dashboard: DashboardTexts,
    /// 快速跳转面板文本
    pub palette: PaletteTexts,
    /// 设置页面文本
    pub settings: SettingsTexts,
    /// 弹窗文本
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 快捷键说明（状态栏与帮助弹窗共用）
pub struct HintTexts {
    pub quit: &'static str,
    pub help: &'static str,
    pub switch_panel: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub download: &'static str,
    pub download_all: &'static str,
    pub resource_kind: &'static str,
    pub favorite: &'static str,
    pub favorites_only: &'static str,
    pub sort: &'static str,
    pub search: &'static str,
    pub refresh: &'static str,
    pub quick_nav: &'static str,
    pub triple_click: &'static str,
    pub settings: &'static str,
    pub next_field: &'static str,
    pub submit: &'static str,
    pub toggle_remember: &'static str,
    pub change_option: &'static str,
    pub back: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 登录页文本
pub struct LoginTexts {
    pub title: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub remember: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub missing_fields: &'static str,
}

/// 课程页文本
pub struct DashboardTexts {
    pub courses: &'static str,
    pub units: &'static str,
    pub files: &'static str,
    pub no_courses: &'static str,
    pub no_units: &'static str,
    pub no_files: &'static str,
    pub pick_course: &'static str,
    pub pick_unit: &'static str,
    pub search_prefix: &'static str,
    pub favorites_only: &'static str,
    pub ascending: &'static str,
    pub descending: &'static str,
    pub resource_kind: &'static str,
    pub slides: &'static str,
    pub notes: &'static str,
}

/// 快速跳转面板文本
pub struct PaletteTexts {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub no_matches: &'static str,
    pub footer: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub title: &'static str,
    pub theme: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
    pub language: &'static str,
}

// ============================================================================
// 弹窗
// ============================================================================

/// 弹窗文本
pub struct ModalTexts {
    pub help_title: &'static str,
    pub help_global: &'static str,
    pub help_courses: &'static str,
    pub help_close: &'static str,
    pub task_failed: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏消息
pub struct StatusBarTexts {
    pub download_busy: &'static str,
    pub saved_to: &'static str,
    pub session_expired: &'static str,
    pub favorite_failed: &'static str,
    pub preference_failed: &'static str,
    pub resource_kind_changed: &'static str,
}
