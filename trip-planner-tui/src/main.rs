//! Trip Planner TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//! 列表中的每条行程事件由一个 presenter (`presenter/`) 管理，
//! 它在只读行与编辑表单两个组件 (`component/`) 之间切换。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件
//!     load config             // 主题、语言、数据文件、抖动时长
//!     tokio Runtime           // 持久化请求在这里执行
//!     init_terminal()
//!     model::App::new()       // 创建 APP 实例并请求加载数据
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod component;
mod event;
pub mod i18n;
mod message;
mod model;
mod presenter;
mod update;
mod util;
mod view;

use std::rc::Rc;
use std::sync::Arc;

use anyhow::Result;

use backend::{ConfigService, CoreService, JsonTripRepository, LocalConfigService, TripBackend};
use component::TuiComponentFactory;
use util::{default_log_file, init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志
    init_logging(&default_log_file())?;

    // 2. 加载配置，并写回补全了默认值的版本
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;
    if let Err(e) = config_service.save(&config) {
        log::warn!("Failed to write config: {e:#}");
    }
    view::theme::set_theme(config.theme);
    i18n::set_language(config.language());

    // 3. 异步运行时（只用于持久化）
    let runtime = tokio::runtime::Runtime::new()?;
    let repository = Arc::new(JsonTripRepository::new(config.data_file()));
    log::info!(
        "Starting Trip Planner TUI, data file {}",
        repository.path().display()
    );
    let handle = runtime.handle().clone();

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并加载数据
    let factory = Rc::new(TuiComponentFactory::new(config.shake_duration()));
    let mut app = model::App::new(factory, move |tx| {
        Box::new(CoreService::new(repository, handle, tx)) as Box<dyn TripBackend>
    });
    app.trip_events.loading = true;
    app.backend.load();

    // 6. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Trip Planner TUI exited with error: {e:#}");
    }
    result
}
