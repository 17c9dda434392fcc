//! 行程事件服务
//!
//! UI 请求的持久化入口：校验编辑结果、写入仓库，并返回可直接交给
//! presenter 的反规范化快照。

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::RwLock as AsyncRwLock;

use crate::error::{CoreError, CoreResult};
use crate::traits::{TripDataClient, TripRepository};
use crate::types::{Destination, EventSnapshot, EventType, Offer, TripCatalog, TripEvent};

/// 行程事件服务
pub struct TripService {
    repository: Arc<dyn TripRepository>,
    /// 参考目录（同步读取，供编辑表单查询）
    catalog: RwLock<Arc<TripCatalog>>,
    /// 已知事件（按 ID）
    events: AsyncRwLock<HashMap<String, TripEvent>>,
}

impl TripService {
    /// 创建服务实例
    #[must_use]
    pub fn new(repository: Arc<dyn TripRepository>) -> Self {
        Self {
            repository,
            catalog: RwLock::new(Arc::new(TripCatalog::default())),
            events: AsyncRwLock::new(HashMap::new()),
        }
    }

    /// 加载目录与全部事件，按开始时间排序返回快照
    pub async fn load(&self) -> CoreResult<Vec<EventSnapshot>> {
        let catalog = Arc::new(self.repository.load_catalog().await?);
        let mut events = self.repository.find_events().await?;
        events.sort_by_key(|e| e.date_from);

        log::info!(
            "Loaded {} events, {} destinations",
            events.len(),
            catalog.destinations.len()
        );

        *self.events.write().await = events
            .iter()
            .map(|e| (e.id.clone(), e.clone()))
            .collect();
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&catalog);

        Ok(events.into_iter().map(|e| catalog.snapshot(e)).collect())
    }

    /// 当前参考目录
    pub fn catalog(&self) -> Arc<TripCatalog> {
        Arc::clone(&*self.catalog.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// 更新事件
    ///
    /// 校验失败或事件不存在时返回错误，调用方据此触发失败反馈。
    pub async fn update_event(&self, event: TripEvent) -> CoreResult<EventSnapshot> {
        if !self.events.read().await.contains_key(&event.id) {
            return Err(CoreError::EventNotFound(event.id));
        }

        let catalog = self.catalog();
        Self::validate(&catalog, &event)?;

        self.repository.save_event(&event).await?;
        self.events
            .write()
            .await
            .insert(event.id.clone(), event.clone());

        log::info!("Event {} updated", event.id);
        Ok(catalog.snapshot(event))
    }

    /// 删除事件
    pub async fn delete_event(&self, id: &str) -> CoreResult<()> {
        if !self.events.read().await.contains_key(id) {
            return Err(CoreError::EventNotFound(id.to_string()));
        }

        self.repository.delete_event(id).await?;
        self.events.write().await.remove(id);

        log::info!("Event {id} deleted");
        Ok(())
    }

    fn validate(catalog: &TripCatalog, event: &TripEvent) -> CoreResult<()> {
        if event.date_to < event.date_from {
            return Err(CoreError::ValidationError(
                "end date is before start date".to_string(),
            ));
        }

        if catalog.destination_by_id(&event.destination).is_none() {
            return Err(CoreError::DestinationNotFound(event.destination.clone()));
        }

        let available = catalog.offers_for(event.event_type);
        if let Some(unknown) = event
            .offers
            .iter()
            .find(|id| !available.iter().any(|offer| &offer.id == *id))
        {
            return Err(CoreError::ValidationError(format!(
                "offer {unknown} is not available for {}",
                event.event_type.label()
            )));
        }

        Ok(())
    }
}

impl TripDataClient for TripService {
    fn offers_by_type(&self, event_type: EventType) -> Vec<Offer> {
        self.catalog().offers_by_type(event_type)
    }

    fn destination_by_name(&self, name: &str) -> Option<Destination> {
        TripDataClient::destination_by_name(self.catalog().as_ref(), name)
    }

    fn destination_by_id(&self, id: &str) -> Option<Destination> {
        TripDataClient::destination_by_id(self.catalog().as_ref(), id)
    }
}
