//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 解耦，通过 trip-planner-core 完成校验与持久化。
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod core_service;       // 核心服务入口（TripBackend 的实现）
//!         mod trip_repository;    // 行程数据持久化（JSON 文件）
//!         mod config_service;     // 应用配置（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     UI 层只看到 TripBackend trait：
//!
//!         backend.update_event(event, update_type);     // 立即返回
//!
//!     CoreService 在 tokio 运行时上执行请求，完成后把结果发回主循环：
//!
//!         EventsMessage::Saved { id, update_type, result }
//!
//!     update 层再据此调用 presenter 的 init / destroy / set_aborting。
//!

mod config_service;
mod core_service;
mod trip_repository;

pub use config_service::{ConfigService, LocalConfigService};
pub use core_service::{CoreService, TripBackend};
pub use trip_repository::JsonTripRepository;
