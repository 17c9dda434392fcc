//! 组件与 presenter 测试共用的样例数据

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use trip_planner_core::types::{
    Destination, EventType, Offer, OfferGroup, Picture, TripCatalog, TripEvent,
};

use super::EventCommon;

pub fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn press(code: KeyCode) -> KeyEvent {
    key(code, KeyModifiers::NONE)
}

fn offer(id: &str, title: &str, price: u32) -> Offer {
    Offer {
        id: id.to_string(),
        title: title.to_string(),
        price,
    }
}

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
                description: String::new(),
                pictures: Vec::new(),
            },
        ],
        offers: vec![
            OfferGroup {
                event_type: EventType::Flight,
                offers: vec![
                    offer("off-luggage", "Add luggage", 30),
                    offer("off-comfort", "Switch to comfort", 100),
                ],
            },
            OfferGroup {
                event_type: EventType::Taxi,
                offers: vec![offer("off-uber", "Order Uber", 20)],
            },
        ],
    }
}

pub fn sample_common() -> EventCommon {
    Arc::new(sample_catalog())
}

pub fn sample_event_with_id(id: &str) -> TripEvent {
    TripEvent {
        id: id.to_string(),
        event_type: EventType::Flight,
        destination: "dst-ams".to_string(),
        date_from: Utc.with_ymd_and_hms(2024, 3, 18, 10, 30, 0).unwrap(),
        date_to: Utc.with_ymd_and_hms(2024, 3, 18, 11, 0, 0).unwrap(),
        base_price: 160,
        offers: vec!["off-luggage".to_string()],
        is_favorite: false,
    }
}

pub fn sample_event() -> TripEvent {
    sample_event_with_id("evt-1")
}
