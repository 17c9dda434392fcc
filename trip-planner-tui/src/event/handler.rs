//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, EventsMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 编辑中：所有按键交给 presenter（Esc 经由文档级监听处理）
    if app.trip_events.is_editing() {
        return AppMessage::Events(EventsMessage::Key(key));
    }

    if DefaultKeymap::QUIT.matches(&key) {
        AppMessage::Quit
    } else if DefaultKeymap::REFRESH.matches(&key) {
        AppMessage::Events(EventsMessage::Reload)
    } else if DefaultKeymap::CANCEL.matches(&key) {
        AppMessage::ClearStatus
    } else if DefaultKeymap::NAV_UP.matches(&key) {
        AppMessage::Events(EventsMessage::SelectPrev)
    } else if DefaultKeymap::NAV_DOWN.matches(&key) {
        AppMessage::Events(EventsMessage::SelectNext)
    } else {
        AppMessage::Events(EventsMessage::Key(key))
    }
}
