//!
//! src/message/mod.rs
//! Message 层：消息定义
//!
//! Message 是 Event 层与 Update 层之间的“契约”：
//! Event 层把按键、鼠标事件翻译成 Message，
//! 后台任务把网关结果包装成 Message，
//! Update 层消费 Message 并修改 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 应用主消息 AppMessage
//!         mod content;        // 课程面板消息（选择、收藏、下载）
//!         mod login;          // 登录表单消息
//!         mod palette;        // 快速跳转面板消息
//!         mod settings;       // 设置页消息
//!         mod task;           // 后台任务完成消息
//!
//!
//!     消息的两个来源：
//!
//!         用户输入 ──▶ event::handle_event ──▶ AppMessage ──┐
//!                                                          ├──▶ update::update
//!         后台任务 ──▶ mpsc 通道 ──▶ AppMessage::Task ──────┘
//!

mod app;
mod content;
mod login;
mod palette;
mod settings;
mod task;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use login::LoginMessage;
pub use palette::PaletteMessage;
pub use settings::SettingsMessage;
pub use task::TaskMessage;
