//! 核心服务
//!
//! 封装 trip-planner-core 的 `TripService`，在 tokio 运行时上执行持久化请求，
//! 结果以 `AppMessage` 的形式发回主循环。

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use trip_planner_core::traits::{TripDataClient, TripRepository};
use trip_planner_core::types::{TripEvent, UpdateType};
use trip_planner_core::TripService;

use crate::message::{AppMessage, EventsMessage};

/// UI 层使用的持久化后端
///
/// 所有请求立即返回，结果通过消息通道送达。
pub trait TripBackend {
    /// 编辑表单使用的目录查询
    fn data_client(&self) -> Arc<dyn TripDataClient>;

    /// 加载目录与全部事件，结果为 `EventsMessage::Loaded`
    fn load(&self);

    /// 保存事件，结果为 `EventsMessage::Saved`
    fn update_event(&self, event: TripEvent, update_type: UpdateType);

    /// 删除事件，结果为 `EventsMessage::Deleted`
    fn delete_event(&self, id: String);
}

/// TUI 核心服务
pub struct CoreService {
    service: Arc<TripService>,
    runtime: Handle,
    tx: UnboundedSender<AppMessage>,
}

impl CoreService {
    /// 创建核心服务实例
    pub fn new(
        repository: Arc<dyn TripRepository>,
        runtime: Handle,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            service: Arc::new(TripService::new(repository)),
            runtime,
            tx,
        }
    }

    /// 在运行时上执行任务，并把结果消息发回主循环
    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = EventsMessage> + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let msg = task.await;
            if tx.send(AppMessage::Events(msg)).is_err() {
                log::debug!("UI loop is gone, dropping backend result");
            }
        });
    }
}

impl TripBackend for CoreService {
    fn data_client(&self) -> Arc<dyn TripDataClient> {
        self.service.clone()
    }

    fn load(&self) {
        let service = Arc::clone(&self.service);
        self.spawn(async move {
            let result = service
                .load()
                .await
                .map(|snapshots| (service.catalog(), snapshots));
            EventsMessage::Loaded(result)
        });
    }

    fn update_event(&self, event: TripEvent, update_type: UpdateType) {
        let service = Arc::clone(&self.service);
        self.spawn(async move {
            let id = event.id.clone();
            let result = service.update_event(event).await;
            EventsMessage::Saved {
                id,
                update_type,
                result,
            }
        });
    }

    fn delete_event(&self, id: String) {
        let service = Arc::clone(&self.service);
        self.spawn(async move {
            let result = service.delete_event(&id).await;
            EventsMessage::Deleted { id, result }
        });
    }
}
