//! autobubble - Speech bubbles around text layers
//!
//! Given the opacity mask of a text layer, autobubble computes the outline
//! of a speech bubble behind it, either as a set of rectangles hugging each
//! line of text or as a single ellipse, and draws it through an image
//! editor [`Host`](host::Host).
//!
//! # Overview
//!
//! - [`build_rectangles`] / [`fit_ellipse`] - Mask to geometry
//! - [`host`] - Host trait, layer-name directives, batch driver, and an
//!   in-memory canvas
//!
//! # Example
//!
//! ```
//! use autobubble::{AlphaMask, Rectangle, fit_ellipse};
//!
//! let mut mask = AlphaMask::new(100, 60);
//! mask.fill_rect(&Rectangle::new_unchecked(20, 10, 60, 8));
//! mask.fill_rect(&Rectangle::new_unchecked(10, 25, 80, 8));
//!
//! let ellipse = fit_ellipse(&mask).unwrap();
//! assert!(ellipse.width >= 80.0);
//! ```

pub mod error;
pub mod host;
pub mod pipeline;

pub use error::{AutobubbleError, Result};
pub use pipeline::{build_rectangles, build_rectangles_at, fit_ellipse, fit_ellipse_with};

// Re-export core types (primary data structures used everywhere)
pub use autobubble_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use autobubble_io as io;
pub use autobubble_rows as rows;
pub use autobubble_shape as shape;
