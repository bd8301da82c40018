//! Core domain errors.

use thiserror::Error;

/// Core domain errors for the task lists model.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Snapshot data could not be parsed into a list.
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Invalid input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidSnapshot(err.to_string())
    }
}
