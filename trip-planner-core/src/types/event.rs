//! Trip event data model

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Offer;

/// Trip event type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Taxi,
    Bus,
    Train,
    Ship,
    Drive,
    Flight,
    CheckIn,
    Sightseeing,
    Restaurant,
}

impl EventType {
    /// All event types, in the order the edit form cycles through them
    pub const ALL: [EventType; 9] = [
        EventType::Taxi,
        EventType::Bus,
        EventType::Train,
        EventType::Ship,
        EventType::Drive,
        EventType::Flight,
        EventType::CheckIn,
        EventType::Sightseeing,
        EventType::Restaurant,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Self::Taxi => "Taxi",
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Ship => "Ship",
            Self::Drive => "Drive",
            Self::Flight => "Flight",
            Self::CheckIn => "Check-in",
            Self::Sightseeing => "Sightseeing",
            Self::Restaurant => "Restaurant",
        }
    }

    /// Single-glyph icon used in the list row
    pub fn icon(self) -> &'static str {
        match self {
            Self::Taxi => "🚕",
            Self::Bus => "🚌",
            Self::Train => "🚆",
            Self::Ship => "🚢",
            Self::Drive => "🚗",
            Self::Flight => "✈",
            Self::CheckIn => "🏨",
            Self::Sightseeing => "🏛",
            Self::Restaurant => "🍴",
        }
    }

    /// Next type (wraps around)
    #[must_use]
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous type (wraps around)
    #[must_use]
    pub fn prev(self) -> Self {
        let index = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Trip event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    /// Destination ID
    pub destination: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub base_price: u32,
    /// Selected offer IDs
    #[serde(default)]
    pub offers: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl TripEvent {
    /// Time between start and end (never negative)
    pub fn duration(&self) -> Duration {
        (self.date_to - self.date_from).max(Duration::zero())
    }

    /// Base price plus the price of every selected offer found in `available`
    pub fn total_price(&self, available: &[Offer]) -> u32 {
        available
            .iter()
            .filter(|offer| self.offers.contains(&offer.id))
            .fold(self.base_price, |sum, offer| sum.saturating_add(offer.price))
    }

    /// Whether the offer with this ID is selected
    pub fn has_offer(&self, offer_id: &str) -> bool {
        self.offers.iter().any(|id| id == offer_id)
    }
}

/// Format a duration the way the event list shows it
///
/// `01D 02H 30M` when it spans days, `02H 30M` under a day, `30M` under an hour.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes:02}M")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(from: (u32, u32), to: (u32, u32, u32)) -> TripEvent {
        TripEvent {
            id: "evt-1".to_string(),
            event_type: EventType::Flight,
            destination: "dst-1".to_string(),
            date_from: Utc.with_ymd_and_hms(2024, 3, from.0, from.1, 0, 0).unwrap(),
            date_to: Utc.with_ymd_and_hms(2024, 3, to.0, to.1, to.2, 0).unwrap(),
            base_price: 100,
            offers: vec!["off-1".to_string()],
            is_favorite: false,
        }
    }

    #[test]
    fn duration_formats_minutes_only() {
        let e = event((18, 10), (18, 10, 30));
        assert_eq!(format_duration(e.duration()), "30M");
    }

    #[test]
    fn duration_formats_hours() {
        let e = event((18, 10), (18, 12, 5));
        assert_eq!(format_duration(e.duration()), "02H 05M");
    }

    #[test]
    fn duration_formats_days() {
        let e = event((18, 10), (20, 11, 0));
        assert_eq!(format_duration(e.duration()), "02D 01H 00M");
    }

    #[test]
    fn negative_duration_clamps_to_zero() {
        let e = event((20, 10), (18, 10, 0));
        assert_eq!(e.duration(), Duration::zero());
    }

    #[test]
    fn total_price_counts_only_selected_offers() {
        let e = event((18, 10), (18, 11, 0));
        let offers = vec![
            Offer { id: "off-1".to_string(), title: "Luggage".to_string(), price: 30 },
            Offer { id: "off-2".to_string(), title: "Meal".to_string(), price: 15 },
        ];
        assert_eq!(e.total_price(&offers), 130);
    }

    #[test]
    fn event_type_cycles_both_ways() {
        assert_eq!(EventType::Restaurant.next(), EventType::Taxi);
        assert_eq!(EventType::Taxi.prev(), EventType::Restaurant);
        assert_eq!(EventType::Bus.next().prev(), EventType::Bus);
    }

    #[test]
    fn deserializes_wire_format() {
        let json = r#"{
            "id": "evt-9",
            "type": "check-in",
            "destination": "dst-2",
            "date_from": "2024-03-18T10:30:00Z",
            "date_to": "2024-03-19T11:00:00Z",
            "base_price": 600,
            "offers": [],
            "is_favorite": true
        }"#;
        let parsed: TripEvent = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.event_type, EventType::CheckIn);
        assert!(parsed.is_favorite);
    }
}
