//! 页面状态

mod trip_events;

pub use trip_events::TripEventsState;
