//! Error types for autobubble-shape

use thiserror::Error;

/// Errors that can occur while composing bubble geometry
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] autobubble_core::Error),

    /// Every candidate center was degenerate or admitted no enclosing radii
    #[error("no valid ellipse among {combinations} candidate combinations")]
    NoValidEllipse { combinations: usize },

    /// Too many rows for the combinatorial ellipse search
    #[error("too many rows for ellipse search: {rows} > {max}")]
    TooManyRows { rows: usize, max: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;
