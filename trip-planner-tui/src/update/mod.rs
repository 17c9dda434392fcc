//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod trip_events;    // 行程事件列表（presenter 的上游）
//!
//! 主循环每处理完一条输入消息，就调用 drain() 把 presenter 回调与
//! 后台任务发来的消息全部处理掉，所以同一帧内不会出现两个编辑中的事件。
//!

mod trip_events;

use std::time::Instant;

use crate::message::AppMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Events(events_msg) => {
            trip_events::update(app, events_msg);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

/// 处理消息通道中积压的全部消息
pub fn drain(app: &mut App) {
    while let Some(msg) = app.try_recv() {
        update(app, msg);
    }
}

/// 推进所有组件的动画
pub fn tick(app: &mut App, now: Instant) {
    for presenter in &mut app.trip_events.presenters {
        presenter.tick(now);
    }
}
