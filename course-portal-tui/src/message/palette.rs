use course_portal_core::engine::NavKey;

/// 快速跳转面板消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMessage {
    /// 打开面板（Ctrl+K）
    Open,
    /// 面板内的按键
    Key(NavKey),
    /// 鼠标悬停在候选项上
    Hover(usize),
    /// 鼠标点击候选项
    Click(usize),
}
