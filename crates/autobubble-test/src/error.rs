//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// ASCII-art rows have different lengths
    #[error("ragged mask art: row {row} has {actual} columns, expected {expected}")]
    RaggedArt {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Mask construction failed
    #[error("mask error: {0}")]
    Core(#[from] autobubble_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
