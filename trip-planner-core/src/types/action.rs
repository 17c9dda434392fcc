//! Action vocabulary dispatched from the UI to the upstream owner

use serde::{Deserialize, Serialize};

/// What the user asked to happen to a trip event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserAction {
    /// Persist an edited event
    UpdateEvent,
    /// Remove an event
    DeleteEvent,
}

/// Granularity hint for how much of the list the owner should refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateType {
    /// Only the affected item changes
    Patch,
    /// The affected item is rebuilt from confirmed data
    Minor,
    /// The whole list is reloaded
    Major,
}

impl UpdateType {
    /// Whether the owner must reload every item
    pub fn reloads_list(self) -> bool {
        matches!(self, Self::Major)
    }
}
