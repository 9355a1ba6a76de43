//! 课程页状态
//!
//! 课程、单元、课时数据由核心库的 `SelectionMachine` 持有，
//! 这里只保存三栏的光标和课程列表的过滤条件。

use course_portal_core::engine::CourseFilter;

use crate::model::FocusPanel;

/// 课程页状态
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// 课程列表的搜索 / 收藏过滤 / 排序
    pub filter: CourseFilter,
    /// 正在输入搜索词
    pub searching: bool,
    pub course_cursor: usize,
    pub unit_cursor: usize,
    pub file_cursor: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定面板的光标
    pub fn cursor(&self, panel: FocusPanel) -> usize {
        match panel {
            FocusPanel::Courses => self.course_cursor,
            FocusPanel::Units => self.unit_cursor,
            FocusPanel::Files => self.file_cursor,
        }
    }

    pub fn cursor_mut(&mut self, panel: FocusPanel) -> &mut usize {
        match panel {
            FocusPanel::Courses => &mut self.course_cursor,
            FocusPanel::Units => &mut self.unit_cursor,
            FocusPanel::Files => &mut self.file_cursor,
        }
    }

    /// 把光标限制在列表长度内
    pub fn clamp(&mut self, panel: FocusPanel, len: usize) {
        let cursor = self.cursor_mut(panel);
        *cursor = (*cursor).min(len.saturating_sub(1));
    }
}
