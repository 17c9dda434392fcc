//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::TripService;
use crate::traits::TripRepository;
use crate::types::{Destination, EventType, Offer, OfferGroup, Picture, TripCatalog, TripEvent};

// ===== MockTripRepository =====

pub struct MockTripRepository {
    catalog: TripCatalog,
    events: RwLock<HashMap<String, TripEvent>>,
    /// 如果 Some，save 时返回此错误（用于测试失败路径）
    save_error: RwLock<Option<String>>,
}

impl MockTripRepository {
    pub fn new(catalog: TripCatalog, events: Vec<TripEvent>) -> Self {
        Self {
            catalog,
            events: RwLock::new(events.into_iter().map(|e| (e.id.clone(), e)).collect()),
            save_error: RwLock::new(None),
        }
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }
}

#[async_trait]
impl TripRepository for MockTripRepository {
    async fn load_catalog(&self) -> CoreResult<TripCatalog> {
        Ok(self.catalog.clone())
    }

    async fn find_events(&self) -> CoreResult<Vec<TripEvent>> {
        Ok(self.events.read().await.values().cloned().collect())
    }

    async fn save_event(&self, event: &TripEvent) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        self.events
            .write()
            .await
            .insert(event.id.clone(), event.clone());
        Ok(())
    }

    async fn delete_event(&self, id: &str) -> CoreResult<()> {
        self.events.write().await.remove(id);
        Ok(())
    }
}

// ===== 工厂方法 =====

pub fn sample_catalog() -> TripCatalog {
    TripCatalog {
        destinations: vec![
            Destination {
                id: "dst-ams".to_string(),
                name: "Amsterdam".to_string(),
                description: "Canals and bicycles.".to_string(),
                pictures: vec![Picture {
                    src: "https://example.com/ams.jpg".to_string(),
                    description: "Canal".to_string(),
                }],
            },
            Destination {
                id: "dst-gva".to_string(),
                name: "Geneva".to_string(),
                description: "Lake and mountains.".to_string(),
                pictures: Vec::new(),
            },
        ],
        offers: vec![
            OfferGroup {
                event_type: EventType::Flight,
                offers: vec![
                    Offer {
                        id: "off-luggage".to_string(),
                        title: "Add luggage".to_string(),
                        price: 30,
                    },
                    Offer {
                        id: "off-comfort".to_string(),
                        title: "Switch to comfort".to_string(),
                        price: 100,
                    },
                ],
            },
            OfferGroup {
                event_type: EventType::Taxi,
                offers: vec![Offer {
                    id: "off-uber".to_string(),
                    title: "Order Uber".to_string(),
                    price: 20,
                }],
            },
        ],
    }
}

/// 以 ID 区分的示例事件：`evt-2` 晚于 `evt-1` 一天开始
pub fn sample_event(id: &str) -> TripEvent {
    let day = if id == "evt-2" { 19 } else { 18 };
    TripEvent {
        id: id.to_string(),
        event_type: EventType::Flight,
        destination: "dst-ams".to_string(),
        date_from: Utc.with_ymd_and_hms(2024, 3, day, 10, 30, 0).unwrap(),
        date_to: Utc.with_ymd_and_hms(2024, 3, day, 11, 0, 0).unwrap(),
        base_price: 160,
        offers: vec!["off-luggage".to_string()],
        is_favorite: false,
    }
}

/// 创建带示例数据的 TripService，同时返回底层 mock 仓库
pub fn create_test_trip_service() -> (TripService, Arc<MockTripRepository>) {
    let repo = Arc::new(MockTripRepository::new(
        sample_catalog(),
        vec![sample_event("evt-2"), sample_event("evt-1")],
    ));
    let svc = TripService::new(repo.clone());
    (svc, repo)
}
