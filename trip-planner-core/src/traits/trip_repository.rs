//! Trip event persistence abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{TripCatalog, TripEvent};

/// Trip data warehouse Trait
///
/// Platform implementation:
/// - TUI: `JsonTripRepository` (JSON file)
#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Load the reference catalog (destinations and offers)
    async fn load_catalog(&self) -> CoreResult<TripCatalog>;

    /// Get all trip events
    async fn find_events(&self) -> CoreResult<Vec<TripEvent>>;

    /// Save event (new or update)
    ///
    /// # Arguments
    /// * `event` - Event data
    async fn save_event(&self, event: &TripEvent) -> CoreResult<()>;

    /// Delete event
    ///
    /// # Arguments
    /// * `id` - Event ID
    async fn delete_event(&self, id: &str) -> CoreResult<()>;
}
