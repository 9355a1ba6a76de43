//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!
//!     src/util/mod.rs
//!         mod logging;        // 文件日志
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显：按键不会显示在终端上
//!         - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 应用在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     · Mouse Capture（鼠标捕获）
//!         - 点击、悬停事件由终端上报给应用
//!         - 三连击打开快速跳转面板
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!           否则终端会保持在原始模式，并继续上报鼠标事件。
//!
//!     · 日志
//!         原始模式下无法向终端打印日志，因此使用 simplelog 的 WriteLogger
//!         写入配置目录中的日志文件。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
