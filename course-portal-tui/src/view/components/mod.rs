//! 界面组件

pub mod command_palette;
pub mod modal;
pub mod statusbar;
pub mod toasts;

use ratatui::layout::Rect;

/// 在 `area` 中居中放置一个 `width` × `height` 的区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
