//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Trip event not found
    #[error("Event not found: {0}")]
    EventNotFound(String),

    /// Destination not found in the catalog
    #[error("Destination not found: {0}")]
    DestinationNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Whether the error is expected (bad user input, missing resource).
    /// Expected errors are logged at `warn`, the rest at `error`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::EventNotFound(_) | Self::DestinationNotFound(_) | Self::ValidationError(_) => {
                true
            }
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
