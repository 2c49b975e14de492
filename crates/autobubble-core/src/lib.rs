//! autobubble-core - Shared data structures for speech-bubble generation
//!
//! This crate provides the value types passed between the stages of the
//! bubble pipeline:
//!
//! - [`OpacityMask`] / [`AlphaMask`] - Binary opacity view over a text layer
//! - [`TextRow`] / [`RowList`] - Per-band bounding boxes
//! - [`Rectangle`] / [`Rects`] - Rectangular bubble geometry
//! - [`Point2D`] / [`PointSet`] - Floating-point sample points
//! - [`Ellipse`] - Elliptical bubble geometry
//! - [`Color`] - RGBA fill color

pub mod color;
pub mod ellipse;
pub mod error;
pub mod mask;
pub mod point;
pub mod rect;
pub mod row;

pub use color::Color;
pub use ellipse::Ellipse;
pub use error::{Error, Result};
pub use mask::{AlphaMask, OpacityMask};
pub use point::{Point2D, PointSet};
pub use rect::{Rectangle, Rects};
pub use row::{RowList, TextRow};
