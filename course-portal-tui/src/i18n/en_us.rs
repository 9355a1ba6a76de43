//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, DashboardTexts, HintTexts, LoginTexts, ModalTexts, PaletteTexts, SettingsTexts,
    StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Course Portal",
        loading: "Loading...",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        quit: "Quit",
        help: "Help",
        switch_panel: "Switch panel",
        select: "Select",
        open: "Open",
        download: "Download",
        download_all: "Download all",
        resource_kind: "Slides/Notes",
        favorite: "Favorite",
        favorites_only: "Favorites only",
        sort: "Sort",
        search: "Search",
        refresh: "Refresh",
        quick_nav: "Quick jump",
        triple_click: "Triple click",
        settings: "Settings",
        next_field: "Next field",
        submit: "Log in",
        toggle_remember: "Remember me",
        change_option: "Change",
        back: "Back",
        close: "Close",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    login: LoginTexts {
        title: "Log in",
        username: "Username",
        password: "Password",
        remember: "Remember me",
        submit: "[ Log in ]",
        submitting: "Logging in...",
        missing_fields: "Enter username and password",
    },

    dashboard: DashboardTexts {
        courses: "Courses",
        units: "Units",
        files: "Files",
        no_courses: "No courses",
        no_units: "No units",
        no_files: "No files",
        pick_course: "Select a course",
        pick_unit: "Select a unit",
        search_prefix: "Search: ",
        favorites_only: "★ only",
        ascending: "A→Z",
        descending: "Z→A",
        resource_kind: "Type",
        slides: "Slides",
        notes: "Notes",
    },

    palette: PaletteTexts {
        title: "Jump to course",
        placeholder: "Type a course name or id",
        no_matches: "No matching courses",
        footer: "↑↓ move · Enter open · Esc close",
    },

    settings: SettingsTexts {
        title: "Settings",
        theme: "Theme",
        dark: "Dark",
        light: "Light",
        language: "Language",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "Help",
        help_global: "Global shortcuts",
        help_courses: "Courses",
        help_close: "Press Esc to close the help",
        task_failed: "A background task stopped unexpectedly",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        download_busy: "A download is already running",
        saved_to: "Saved to",
        session_expired: "Session expired, restart to log in again",
        favorite_failed: "Could not save favorites",
        preference_failed: "Could not save preference",
        resource_kind_changed: "Downloading",
    },
};
