//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logging;        // 日志写入文件
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!         pub use logging::{default_log_file, init_logging};
//!

mod logging;
mod terminal;

pub use logging::{default_log_file, init_logging};
pub use terminal::{init_terminal, restore_terminal, Term};
