/// 设置页消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsMessage {
    /// 上一个设置项
    SelectPrevious,
    /// 下一个设置项
    SelectNext,
    /// 切换到上一个选项
    PrevOption,
    /// 切换到下一个选项
    NextOption,
}
