//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//!     while let Ok(msg) = rx.try_recv() {             // 取出后台任务投递的消息
//!         update::update(&mut app , msg)
//!     }
//!     update::update(&mut app , AppMessage::Tick)     // 到期的焦点请求、过期的通知
//! }

use std::time::{Duration, Instant};

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    rx: &mut UnboundedReceiver<AppMessage>,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app, Instant::now());

            // 5. 更新状态
            update::update(app, msg);
        }

        // 6. 后台任务结果
        while let Ok(msg) = rx.try_recv() {
            update::update(app, msg);
        }

        // 7. 时间驱动的状态
        update::update(app, AppMessage::Tick(Instant::now()));
    }

    Ok(())
}
