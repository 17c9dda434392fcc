//! Reference data: destinations and offers

use serde::{Deserialize, Serialize};

use super::{EventType, TripEvent};
use crate::traits::TripDataClient;

/// Destination picture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub src: String,
    pub description: String,
}

/// Destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pictures: Vec<Picture>,
}

/// Optional extra that can be added to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    pub price: u32,
}

/// Offers available for one event type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferGroup {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub offers: Vec<Offer>,
}

/// Shared reference catalog (destinations and offers)
///
/// Loaded once from the repository and shared read-only with every view
/// component as `Arc<TripCatalog>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripCatalog {
    pub destinations: Vec<Destination>,
    pub offers: Vec<OfferGroup>,
}

impl TripCatalog {
    /// Offers available for an event type (empty when the type has none)
    pub fn offers_for(&self, event_type: EventType) -> &[Offer] {
        self.offers
            .iter()
            .find(|group| group.event_type == event_type)
            .map(|group| group.offers.as_slice())
            .unwrap_or_default()
    }

    pub fn destination_by_id(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    pub fn destination_by_name(&self, name: &str) -> Option<&Destination> {
        self.destinations
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
    }

    /// Denormalize an event with the reference data it needs for display
    pub fn snapshot(&self, event: TripEvent) -> EventSnapshot {
        EventSnapshot {
            offers: self.offers_for(event.event_type).to_vec(),
            destination: self.destination_by_id(&event.destination).cloned(),
            event,
        }
    }
}

impl TripDataClient for TripCatalog {
    fn offers_by_type(&self, event_type: EventType) -> Vec<Offer> {
        self.offers_for(event_type).to_vec()
    }

    fn destination_by_name(&self, name: &str) -> Option<Destination> {
        TripCatalog::destination_by_name(self, name).cloned()
    }

    fn destination_by_id(&self, id: &str) -> Option<Destination> {
        TripCatalog::destination_by_id(self, id).cloned()
    }
}

/// An event bundled with its denormalized reference data
///
/// This is what the UI hands to a presenter on every `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSnapshot {
    pub event: TripEvent,
    /// Offers available for the event's type
    pub offers: Vec<Offer>,
    /// Destination detail, if the destination ID is known
    pub destination: Option<Destination>,
}

impl EventSnapshot {
    /// Offers that are both available and selected
    pub fn selected_offers(&self) -> impl Iterator<Item = &Offer> {
        self.offers
            .iter()
            .filter(|offer| self.event.has_offer(&offer.id))
    }
}
