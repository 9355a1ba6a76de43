//!
//! src/view/mod.rs
//! View 层：界面渲染
//!
//! View 层只读取 Model，不修改业务状态；
//! 唯一的例外是鼠标命中区域（`App::hits`），它在每帧渲染时重新登记。
//!
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 + 页面 + 状态栏 + 浮层）
//!         mod components;         // 状态栏、提示、快速跳转面板、弹窗
//!         mod pages;              // 登录、课程、设置页面
//!         pub mod theme;          // 主题颜色
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
