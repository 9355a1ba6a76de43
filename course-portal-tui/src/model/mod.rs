//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 课程页焦点（课程 / 单元 / 课时）
//!         mod hit_map;        // 鼠标命中区域
//!         mod page;           // 页面路由状态
//!
//!         pub mod state;      // 页面数据状态
//!
//!     交互相关的核心状态直接来自 course-portal-core：
//!         - SelectionMachine   课程 → 单元 → 课时 的选择与加载阶段
//!         - QuickNav           快速跳转面板
//!         - TapChain           三连击检测
//!         - DownloadGate       全局唯一的下载槽位
//!         - FavoritesService   收藏集合
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub page: Page,                     // 当前页面
//!             pub focus: FocusPanel,              // 课程页焦点
//!
//!             pub login: LoginState,              // 登录表单
//!             pub dashboard: DashboardState,      // 三栏光标与过滤条件
//!             pub settings: SettingsState,        // 设置页
//!             pub modal: ModalState,              // 弹窗
//!
//!             pub selection: SelectionMachine,    // 选择状态机
//!             pub quick_nav: QuickNav,            // 快速跳转
//!             ...
//!         }
//!

mod app;
mod focus;
mod hit_map;
mod page;

pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use hit_map::{HitMap, HitTarget};
pub use page::Page;
