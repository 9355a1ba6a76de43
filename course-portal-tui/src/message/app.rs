use std::time::Instant;

use crate::model::HitTarget;

use super::{ContentMessage, LoginMessage, PaletteMessage, SettingsMessage, TaskMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 登录页消息
    Login(LoginMessage),

    /// 课程面板消息
    Content(ContentMessage),

    /// 快速跳转面板消息
    Palette(PaletteMessage),

    /// 设置页消息
    Settings(SettingsMessage),

    /// 后台任务完成
    Task(TaskMessage),

    /// 鼠标左键按下：计入三连击，并作用于命中的目标
    MouseDown {
        at: Instant,
        target: Option<HitTarget>,
    },

    /// 切换设置页 / 课程页
    ToggleSettings,

    /// 显示帮助
    ShowHelp,

    /// 关闭弹窗
    CloseModal,

    /// 时钟：处理到期的焦点请求和过期的提示
    Tick(Instant),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
