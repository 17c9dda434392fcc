//! Trip Planner Core Library
//!
//! Provides the platform-independent half of the trip event editor:
//! - Domain types (trip events, destinations, offers) and the action vocabulary
//! - Storage abstraction (`TripRepository`) and catalog lookups (`TripDataClient`)
//! - `TripService`, which validates and persists edits requested by the UI
//!
//! The storage layer is abstracted through traits so the terminal UI can plug in
//! its own file-backed repository.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::TripService;
pub use traits::{TripDataClient, TripRepository};
