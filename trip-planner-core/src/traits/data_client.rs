//! Synchronous catalog lookups used by the edit form

use crate::types::{Destination, EventType, Offer};

/// Data-access client handed to the edit form
///
/// The form calls it when the user switches the event type or destination,
/// to resolve the offers and destination detail that go with the new choice.
/// Lookups are answered from an in-memory catalog, so they never block.
pub trait TripDataClient: Send + Sync {
    /// Offers available for an event type
    fn offers_by_type(&self, event_type: EventType) -> Vec<Offer>;

    /// Destination detail by display name
    fn destination_by_name(&self, name: &str) -> Option<Destination>;

    /// Destination detail by ID
    fn destination_by_id(&self, id: &str) -> Option<Destination>;
}
