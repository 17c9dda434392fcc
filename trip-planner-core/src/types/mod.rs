//! 类型定义模块

mod action;
mod catalog;
mod event;

pub use action::{UpdateType, UserAction};
pub use catalog::{Destination, EventSnapshot, Offer, OfferGroup, Picture, TripCatalog};
pub use event::{format_duration, EventType, TripEvent};
