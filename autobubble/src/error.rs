//! Error types for the autobubble facade

use crate::host::{ConfigError, HostError};
use thiserror::Error;

/// Errors from any stage of bubble generation
#[derive(Debug, Error)]
pub enum AutobubbleError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] autobubble_core::Error),

    /// Row segmentation failed
    #[error("rows error: {0}")]
    Rows(#[from] autobubble_rows::RowsError),

    /// Bubble geometry failed
    #[error("shape error: {0}")]
    Shape(#[from] autobubble_shape::ShapeError),

    /// Mask or canvas I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] autobubble_io::IoError),

    /// Layer-name directives could not be parsed
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The host rejected an operation
    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Result type for facade operations
pub type Result<T> = std::result::Result<T, AutobubbleError>;
