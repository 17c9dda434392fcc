pub mod trip_events;
