//! Error types for the kalendr ecosystem.

use thiserror::Error;

/// Errors that can occur in kalendr-core operations.
#[derive(Error, Debug)]
pub enum KalendrError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for kalendr-core operations.
pub type KalendrResult<T> = Result<T, KalendrError>;
