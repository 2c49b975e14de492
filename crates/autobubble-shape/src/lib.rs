//! autobubble-shape - Bubble geometry from text rows
//!
//! This crate turns a list of text rows into the outline of a speech
//! bubble:
//!
//! - **Rectangles** - One padded rectangle per row, plus connectors
//!   between rows that sit close together
//! - **Ellipse** - A near-minimal axis-aligned ellipse enclosing the
//!   corners of every row
//!
//! # Examples
//!
//! ```
//! use autobubble_core::TextRow;
//! use autobubble_shape::{build_rectangles, fit_ellipse};
//!
//! let rows = [TextRow::new(0, 10, 0, 60), TextRow::new(14, 24, 5, 55)];
//!
//! let rects = build_rectangles(&rows, 4, 2, (0, 0)).unwrap();
//! assert_eq!(rects.len(), 3);
//!
//! let ellipse = fit_ellipse(&rows).unwrap();
//! assert!(ellipse.width > 60.0);
//! ```

pub mod ellipse;
pub mod error;
pub mod rectangles;

// Re-export core types
pub use autobubble_core;

pub use ellipse::{
    DEFAULT_MAX_ROWS, EllipseOptions, edge_points, fit_ellipse, fit_ellipse_with, fit_points,
};
pub use error::{ShapeError, ShapeResult};
pub use rectangles::{build_rectangles, connect_threshold};
