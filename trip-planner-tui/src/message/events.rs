//! 行程事件列表消息

use std::sync::Arc;

use crossterm::event::KeyEvent;
use trip_planner_core::types::{EventSnapshot, TripCatalog, TripEvent, UpdateType, UserAction};
use trip_planner_core::CoreError;

/// 行程事件列表消息
#[derive(Debug)]
pub enum EventsMessage {
    // ===== 输入 =====
    /// 交给 presenter 的按键
    Key(KeyEvent),
    /// 选中上一条
    SelectPrev,
    /// 选中下一条
    SelectNext,
    /// 重新加载整个列表
    Reload,

    // ===== presenter 回调 =====
    /// 某个 presenter 进入了编辑模式
    ModeChanged { source: String },
    /// presenter 请求持久化
    DataChange {
        action: UserAction,
        update_type: UpdateType,
        event: TripEvent,
    },

    // ===== 后台任务结果 =====
    Loaded(Result<(Arc<TripCatalog>, Vec<EventSnapshot>), CoreError>),
    Saved {
        id: String,
        update_type: UpdateType,
        result: Result<EventSnapshot, CoreError>,
    },
    Deleted {
        id: String,
        result: Result<(), CoreError>,
    },
}
