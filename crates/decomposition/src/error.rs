//! Error types for grid decomposition.

use thiserror::Error;

/// Errors that can occur while decomposing or splitting an area.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecompositionError {
    /// `split` asked for 0 or 1 parts, or for more parts than there are rows
    #[error("Cannot split a grid of {rows} rows into {requested} parts")]
    InvalidPartitionCount {
        /// Number of parts requested
        requested: usize,
        /// Rows available in the grid
        rows: usize,
    },

    /// Malformed dimensions or bounds
    #[error("Geometry error: {0}")]
    Geometry(String),
}

/// Result type for decomposition operations.
pub type Result<T> = std::result::Result<T, DecompositionError>;
