//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;        // App 主状态
//!         mod state;      // 页面状态（行程事件列表）
//!
//! App 持有容器与文档句柄；每个 presenter 各自克隆一份，
//! 所以 presenter 对容器的修改在 view 层读取 app.container 时立即可见。
//!

mod app;
mod state;

pub use app::App;
pub use state::TripEventsState;
