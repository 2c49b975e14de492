//! TextRow - Bounding box of one horizontal band of text
//!
//! Coordinates follow the segmentation scan: `top` and `bottom` are both
//! inclusive pixel rows, while `right` is one past the rightmost opaque
//! column.

use crate::point::Point2D;

/// One band of text and its tight horizontal extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextRow {
    /// First row containing text (inclusive)
    pub top: i32,
    /// Last row containing text (inclusive)
    pub bottom: i32,
    /// Leftmost opaque column (inclusive)
    pub left: i32,
    /// One past the rightmost opaque column (exclusive)
    pub right: i32,
}

/// Rows in top-to-bottom order.
pub type RowList = Vec<TextRow>;

impl TextRow {
    /// Create a new row
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Horizontal extent, `right - left`
    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Vertical extent as used by the composers, `bottom - top`
    #[inline]
    pub fn span(&self) -> i32 {
        self.bottom - self.top
    }

    /// Top-left and top-right corners
    pub fn top_corners(&self) -> [Point2D; 2] {
        [
            Point2D::new(self.left as f64, self.top as f64),
            Point2D::new(self.right as f64, self.top as f64),
        ]
    }

    /// Bottom-left and bottom-right corners
    pub fn bottom_corners(&self) -> [Point2D; 2] {
        [
            Point2D::new(self.left as f64, self.bottom as f64),
            Point2D::new(self.right as f64, self.bottom as f64),
        ]
    }
}
