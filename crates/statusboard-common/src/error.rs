//! Shared error type for the status board bot.

use thiserror::Error;

/// Result type alias for status board operations.
pub type Result<T> = std::result::Result<T, StatusBoardError>;

/// Main error type shared across the workspace crates.
#[derive(Error, Debug)]
pub enum StatusBoardError {
    /// Configuration related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure writing the persisted board state.
    #[error("Storage error: {message}")]
    Storage {
        /// What went wrong.
        message: String,
        /// Underlying cause.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StatusBoardError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new storage error with a source.
    pub fn storage(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}
