//! 服务层模块

mod trip_service;

pub use trip_service::TripService;
