//! autobubble-rows - Text band analysis for autobubble
//!
//! This crate turns a text layer's opacity mask into a list of per-band
//! bounding boxes and cleans up their edges:
//!
//! - **Row segmentation** - Splitting the mask into horizontal text bands
//! - **Jag correction** - Snapping small left/right edge misalignments
//!   between consecutive bands
//!
//! # Examples
//!
//! ```
//! use autobubble_core::{AlphaMask, Rectangle};
//! use autobubble_rows::{correct_rows, segment_rows};
//!
//! let mut mask = AlphaMask::new(60, 40);
//! mask.fill_rect(&Rectangle::new_unchecked(10, 5, 40, 6));
//! mask.fill_rect(&Rectangle::new_unchecked(12, 15, 37, 6));
//!
//! let mut rows = segment_rows(&mask).unwrap();
//! correct_rows(&mut rows, 4);
//! assert_eq!(rows[1].left, 10);
//! assert_eq!(rows[1].right, 50);
//! ```

pub mod correct;
pub mod error;
pub mod segment;

// Re-export core types
pub use autobubble_core;

pub use correct::{CorrectOptions, Jag, Propagation, correct_rows, correct_rows_with, jag};
pub use error::{RowsError, RowsResult};
pub use segment::{SegmentOptions, TrailingBand, segment_rows, segment_rows_with};
