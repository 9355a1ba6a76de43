/// 课程页的焦点面板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧课程列表
    #[default]
    Courses,
    /// 中间单元列表
    Units,
    /// 右侧课时列表
    Files,
}

impl FocusPanel {
    /// 右移一个面板（到最右停止）
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            FocusPanel::Courses => FocusPanel::Units,
            FocusPanel::Units | FocusPanel::Files => FocusPanel::Files,
        }
    }

    /// 左移一个面板（到最左停止）
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            FocusPanel::Courses | FocusPanel::Units => FocusPanel::Courses,
            FocusPanel::Files => FocusPanel::Units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_stops_at_edges() {
        assert_eq!(FocusPanel::Courses.prev(), FocusPanel::Courses);
        assert_eq!(FocusPanel::Courses.next(), FocusPanel::Units);
        assert_eq!(FocusPanel::Files.next(), FocusPanel::Files);
        assert_eq!(FocusPanel::Files.prev(), FocusPanel::Units);
    }
}
