//! I/O error types
//!
//! Each decoder or encoder failure from the `png` crate is mapped into an
//! `IoError` variant, so callers handle one error type.

use thiserror::Error;

/// Error type for mask and canvas I/O.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a PNG, or the PNG carries no alpha channel
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The PNG decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. buffer size mismatch)
    #[error("core error: {0}")]
    Core(#[from] autobubble_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
