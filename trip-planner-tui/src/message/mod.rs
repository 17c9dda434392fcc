//!
//! src/message/mod.rs
//! Message 层：消息定义
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 应用主消息
//!         mod events;     // 行程事件列表消息
//!
//! 消息有两个来源：
//!     · Event 层把按键翻译成消息（handle_event）
//!     · presenter 回调与后台任务把消息发进 App 的消息通道，
//!       主循环在每次处理完输入后取出并交给 update
//!

mod app;
mod events;

pub use app::AppMessage;
pub use events::EventsMessage;
