//! Storage layer abstraction trait definition

mod data_client;
mod trip_repository;

pub use data_client::TripDataClient;
pub use trip_repository::TripRepository;
