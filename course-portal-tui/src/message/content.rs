use crate::model::FocusPanel;

/// 课程面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    /// 上一项
    SelectPrevious,
    /// 下一项
    SelectNext,
    /// 第一项
    SelectFirst,
    /// 最后一项
    SelectLast,
    /// 焦点移到右侧面板
    FocusNext,
    /// 焦点移到左侧面板
    FocusPrev,
    /// 确认当前项：选择课程 / 选择单元 / 下载单个课时
    Confirm,
    /// 点击列表中的一行
    Click { panel: FocusPanel, index: usize },

    /// 收藏 / 取消收藏当前课程
    ToggleFavorite,
    /// 切换排序方向
    ToggleSort,
    /// 切换“仅显示收藏”
    ToggleFavoritesOnly,
    /// 进入搜索输入
    StartSearch,
    /// 搜索输入字符
    SearchInput(char),
    /// 搜索删除字符
    SearchBackspace,
    /// 结束搜索输入（保留搜索词）
    EndSearch,
    /// 清空搜索词并结束输入
    ClearSearch,

    /// 下载当前单元的全部课时
    DownloadAll,
    /// 切换课件 / 笔记
    ToggleResourceKind,
    /// 重新加载课程列表
    Refresh,
}
