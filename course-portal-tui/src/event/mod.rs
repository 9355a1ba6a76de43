//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     handle_event 接收以下 Event 类型：
//!         Event::Key(KeyEvent)        // 键盘事件
//!         Event::Mouse(MouseEvent)    // 鼠标事件：点击、悬停、滚轮
//!         Event::Resize(..)           // 终端窗口大小发生变化，下一帧自动重绘
//!
//!     键盘事件的分发顺序：
//!         - 有弹窗打开时，只处理关闭弹窗
//!         - Ctrl+C 始终退出
//!         - 登录页 → handle_login_keys
//!         - 设置页 → handle_settings_keys
//!         - 课程页：
//!             快速跳转面板打开时 → handle_palette_keys（面板独占键盘）
//!             正在输入搜索词时   → handle_search_keys
//!             其余              → 全局快捷键 + handle_dashboard_keys
//!
//!     鼠标事件通过 App::hits（View 层每帧登记的命中区域）翻译成目标：
//!         左键按下    → AppMessage::MouseDown { at, target }（同时计入三连击）
//!         移动        → 快速跳转面板打开时，悬停高亮候选项
//!         滚轮        → 上下移动
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
