//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入转换为 Message。
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!     · handle_event    事件分发
//!
//!         判断：
//!             - Ctrl+C 任何时候都退出；
//!             - 有事件处于编辑模式时，其余按键全部交给 presenter
//!               （Esc 先经过文档级监听，被编辑中的 presenter 拦截）；
//!             - 否则处理列表快捷键：q 退出、Alt+r 重新加载、↑↓ 选择、
//!               Esc 清除状态消息，其余按键交给选中的 presenter（Enter / Alt+e 进入编辑）。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
