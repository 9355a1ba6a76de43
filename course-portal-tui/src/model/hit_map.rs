//! 鼠标命中区域
//!
//! View 层在渲染时登记可点击区域，Event 层据此把鼠标坐标翻译成目标。
//! 渲染只持有 `&App`，因此登记表放在 `RefCell` 中。

use ratatui::layout::{Position, Rect};

use super::FocusPanel;

/// 可点击目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// 三栏列表中的一行（index 为列表中的下标）
    Row { panel: FocusPanel, index: usize },
    /// 快速跳转面板中的候选项
    Candidate(usize),
    /// 快速跳转面板本身（非候选区域）
    Palette,
}

/// 本帧登记的命中区域
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn push(&mut self, area: Rect, target: HitTarget) {
        self.regions.push((area, target));
    }

    /// 坐标处的目标；后登记的区域（上层）优先
    pub fn target_at(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}
