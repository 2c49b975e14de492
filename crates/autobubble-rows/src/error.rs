//! Error types for autobubble-rows

use thiserror::Error;

/// Errors that can occur during row segmentation
#[derive(Debug, Error)]
pub enum RowsError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] autobubble_core::Error),

    /// Mask coordinates do not fit the signed row representation
    #[error("mask too large: {width}x{height} exceeds i32 coordinates")]
    MaskTooLarge { width: u32, height: u32 },
}

/// Result type for row operations
pub type RowsResult<T> = Result<T, RowsError>;
