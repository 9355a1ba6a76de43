//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, DashboardTexts, HintTexts, LoginTexts, ModalTexts, PaletteTexts, SettingsTexts,
    StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "课程门户",
        loading: "加载中...",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        quit: "退出",
        help: "帮助",
        switch_panel: "切换面板",
        select: "选择",
        open: "打开",
        download: "下载",
        download_all: "全部下载",
        resource_kind: "课件/笔记",
        favorite: "收藏",
        favorites_only: "仅看收藏",
        sort: "排序",
        search: "搜索",
        refresh: "刷新",
        quick_nav: "快速跳转",
        triple_click: "三连击",
        settings: "设置",
        next_field: "下一项",
        submit: "登录",
        toggle_remember: "记住我",
        change_option: "切换",
        back: "返回",
        close: "关闭",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    login: LoginTexts {
        title: "登录",
        username: "用户名",
        password: "密码",
        remember: "记住我",
        submit: "[ 登录 ]",
        submitting: "登录中...",
        missing_fields: "请输入用户名和密码",
    },

    dashboard: DashboardTexts {
        courses: "课程",
        units: "单元",
        files: "课时",
        no_courses: "暂无课程",
        no_units: "暂无单元",
        no_files: "暂无课时",
        pick_course: "请选择课程",
        pick_unit: "请选择单元",
        search_prefix: "搜索：",
        favorites_only: "仅 ★",
        ascending: "A→Z",
        descending: "Z→A",
        resource_kind: "类型",
        slides: "课件",
        notes: "笔记",
    },

    palette: PaletteTexts {
        title: "跳转到课程",
        placeholder: "输入课程名称或编号",
        no_matches: "没有匹配的课程",
        footer: "↑↓ 移动 · Enter 打开 · Esc 关闭",
    },

    settings: SettingsTexts {
        title: "设置",
        theme: "主题",
        dark: "深色",
        light: "浅色",
        language: "语言",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        help_title: "帮助",
        help_global: "全局快捷键",
        help_courses: "课程页",
        help_close: "按 Esc 关闭帮助",
        task_failed: "后台任务意外终止",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        download_busy: "已有下载正在进行",
        saved_to: "已保存到",
        session_expired: "会话已过期，请重新启动后登录",
        favorite_failed: "无法保存收藏",
        preference_failed: "无法保存设置",
        resource_kind_changed: "下载类型",
    },
};
