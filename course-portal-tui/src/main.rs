//!
//! src/main.rs
//! 课程门户 TUI 入口
//!
//!
//! 本应用采用 TEA（The Elm Architecture）架构：
//!
//!     Event  ──▶  Message  ──▶  Update  ──▶  Model  ──▶  View
//!       ▲                                                  │
//!       └──────────────────── 终端 ◀───────────────────────┘
//!
//! 与纯同步的 TEA 不同，网关请求在 tokio 任务中运行，
//! 完成后通过 mpsc 通道把 TaskMessage 投递回主循环：
//!
//!     Update ──spawn──▶ Backend 任务 ──TaskMessage──▶ 主循环（try_recv）──▶ Update
//!
//! 所有状态只在主循环中修改，任务之间的先后顺序由核心库的代数（generation）判定。
//!
//!
//! 启动顺序：
//!     1. 读取配置（config.json + 环境变量）
//!     2. 初始化文件日志（终端处于原始模式，日志不能写到终端）
//!     3. 组装 ServiceContext（网关、存储、凭证、通知、文件落地）
//!     4. 初始化终端（原始模式、备用屏幕、鼠标捕获）
//!     5. 运行主循环
//!     6. 恢复终端（无论成功失败都执行）
//!

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use tokio::sync::mpsc;

use util::{init_terminal, restore_terminal};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置
    let config = backend::AppConfig::load();

    // 2. 初始化日志
    util::init_logging(&config);
    log::info!("Starting course portal TUI against {}", config.gateway_url);

    // 3. 组装服务
    let (tx, mut rx) = mpsc::unbounded_channel();
    let notifications = backend::NotificationCenter::shared();
    let ctx = backend::build_context(&config, notifications.clone())?;
    let tasks = backend::TaskRunner::new(ctx, tx);

    let mut app = model::App::new(tasks, notifications);

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut rx);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("Main loop exited with error: {e:#}");
    }
    log::info!("Bye");

    result
}
