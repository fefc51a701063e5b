//! Core error types

use thiserror::Error;

/// Core error type for mvplan
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// Coordinate outside the valid latitude/longitude range
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
