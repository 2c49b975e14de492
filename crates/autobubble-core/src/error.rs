//! Error types for autobubble-core
//!
//! Provides a unified error type for the shared data structures.
//! Each variant captures enough context for diagnostics without exposing
//! internal representation details.

use thiserror::Error;

/// autobubble-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid mask dimensions
    #[error("invalid mask dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length does not match the mask dimensions
    #[error("buffer length mismatch: expected {expected} bytes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
