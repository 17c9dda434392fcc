//! 行程数据仓库
//!
//! 使用单个 JSON 文件存储目录与事件
//! 实现 trip-planner-core 的 TripRepository trait

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Duration, DurationRound, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use trip_planner_core::traits::TripRepository;
use trip_planner_core::types::{
    Destination, EventType, Offer, OfferGroup, Picture, TripCatalog, TripEvent,
};
use trip_planner_core::{CoreError, CoreResult};

/// 获取默认数据文件路径
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trip-planner-tui")
        .join("trips.json")
}

/// 数据文件内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct TripData {
    #[serde(flatten)]
    catalog: TripCatalog,
    #[serde(default)]
    events: Vec<TripEvent>,
}

/// 基于 JSON 文件的行程仓库
pub struct JsonTripRepository {
    path: PathBuf,
    /// 内存缓存（首次访问时加载）
    cache: Mutex<Option<TripData>>,
}

impl JsonTripRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 从文件加载；文件不存在时写入示例数据
    async fn load_from_file(&self) -> CoreResult<TripData> {
        if !self.path.exists() {
            log::info!(
                "Data file {} not found, seeding sample data",
                self.path.display()
            );
            let data = sample_data(Utc::now());
            self.save_to_file(&data).await?;
            return Ok(data);
        }

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        let data: TripData = serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        Ok(data)
    }

    /// 保存到文件
    async fn save_to_file(&self, data: &TripData) -> CoreResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .await
                    .map_err(|e| CoreError::StorageError(e.to_string()))?;
            }
        }

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        Ok(())
    }

    /// 确保缓存已加载，返回其副本
    async fn snapshot(&self) -> CoreResult<TripData> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        Ok(cache.clone().unwrap_or_default())
    }

    /// 在缓存副本上执行修改，写入文件成功后才更新缓存
    async fn modify(&self, f: impl FnOnce(&mut TripData) + Send) -> CoreResult<()> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.load_from_file().await?);
        }
        let mut data = cache.clone().unwrap_or_default();

        f(&mut data);
        self.save_to_file(&data).await?;

        *cache = Some(data);
        Ok(())
    }
}

#[async_trait]
impl TripRepository for JsonTripRepository {
    async fn load_catalog(&self) -> CoreResult<TripCatalog> {
        Ok(self.snapshot().await?.catalog)
    }

    async fn find_events(&self) -> CoreResult<Vec<TripEvent>> {
        Ok(self.snapshot().await?.events)
    }

    async fn save_event(&self, event: &TripEvent) -> CoreResult<()> {
        let event = event.clone();
        self.modify(move |data| {
            match data.events.iter_mut().find(|e| e.id == event.id) {
                Some(existing) => *existing = event,
                None => data.events.push(event),
            }
        })
        .await
    }

    async fn delete_event(&self, id: &str) -> CoreResult<()> {
        let id = id.to_string();
        self.modify(move |data| data.events.retain(|e| e.id != id))
            .await
    }
}

// ===== 示例数据 =====

fn destination(id: &str, name: &str, description: &str, pictures: &[&str]) -> Destination {
    Destination {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        pictures: pictures
            .iter()
            .enumerate()
            .map(|(i, caption)| Picture {
                src: format!("https://picsum.photos/seed/{id}-{i}/300/200"),
                description: (*caption).to_string(),
            })
            .collect(),
    }
}

fn offers(event_type: EventType, items: &[(&str, u32)]) -> OfferGroup {
    OfferGroup {
        event_type,
        offers: items
            .iter()
            .map(|(title, price)| Offer {
                id: uuid::Uuid::new_v4().to_string(),
                title: (*title).to_string(),
                price: *price,
            })
            .collect(),
    }
}

/// 以 `now` 所在的小时为起点生成几条示例事件
fn sample_data(now: DateTime<Utc>) -> TripData {
    let catalog = TripCatalog {
        destinations: vec![
            destination(
                "amsterdam",
                "Amsterdam",
                "Canals, bicycles and narrow houses along the water.",
                &["Canal ring at dusk", "Rijksmuseum"],
            ),
            destination(
                "geneva",
                "Geneva",
                "A lakeside city at the foot of the Alps.",
                &["Jet d'Eau"],
            ),
            destination(
                "chamonix",
                "Chamonix",
                "Mountain village below Mont Blanc.",
                &["Aiguille du Midi", "Mer de Glace"],
            ),
            destination("rome", "Rome", "", &[]),
        ],
        offers: vec![
            offers(
                EventType::Taxi,
                &[("Upgrade to a business class", 120), ("Order Uber", 20)],
            ),
            offers(
                EventType::Flight,
                &[("Add luggage", 50), ("Switch to comfort", 80), ("Add meal", 15)],
            ),
            offers(EventType::Train, &[("Book a sleeper", 40)]),
            offers(EventType::CheckIn, &[("Add breakfast", 25)]),
            offers(
                EventType::Sightseeing,
                &[("Book tickets", 40), ("Lunch in city", 30)],
            ),
        ],
    };

    let start = now.duration_trunc(Duration::hours(1)).unwrap_or(now);
    let offer_ids = |event_type: EventType, count: usize| -> Vec<String> {
        catalog
            .offers_for(event_type)
            .iter()
            .take(count)
            .map(|offer| offer.id.clone())
            .collect()
    };
    let event = |event_type: EventType,
                 destination: &str,
                 (from_hour, minutes): (i64, i64),
                 price: u32,
                 offers: Vec<String>| {
        let date_from = start + Duration::hours(from_hour);
        TripEvent {
            id: uuid::Uuid::new_v4().to_string(),
            event_type,
            destination: destination.to_string(),
            date_from,
            date_to: date_from + Duration::minutes(minutes),
            base_price: price,
            offers,
            is_favorite: false,
        }
    };

    let events = vec![
        event(EventType::Taxi, "amsterdam", (2, 30), 20, offer_ids(EventType::Taxi, 1)),
        event(EventType::Flight, "geneva", (4, 95), 160, offer_ids(EventType::Flight, 2)),
        TripEvent {
            is_favorite: true,
            ..event(
                EventType::CheckIn,
                "chamonix",
                (30, 600),
                600,
                offer_ids(EventType::CheckIn, 1),
            )
        },
        event(EventType::Sightseeing, "chamonix", (50, 240), 80, Vec::new()),
    ];

    TripData { catalog, events }
}
