//! Row segmentation
//!
//! Splits a text mask into horizontal bands and measures the tight
//! horizontal extent of each band.
//!
//! # Algorithm Overview
//!
//! 1. **Row scan**: mark every pixel row that contains at least one opaque pixel
//! 2. **Band tracking**: a transparent -> opaque transition opens a band,
//!    opaque -> transparent closes it one row earlier
//! 3. **Extent**: for a closed band, the first opaque column scanning from
//!    the left and from the right give `left` and `right` (exclusive)
//!
//! A band still open when the scan reaches the bottom edge is handled by
//! [`TrailingBand`].

use crate::{RowsError, RowsResult};
use autobubble_core::{OpacityMask, RowList, TextRow};

/// What to do with a band that touches the bottom edge of the mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingBand {
    /// Do not emit the band
    #[default]
    Drop,
    /// Close the band at the last row of the mask
    Close,
}

/// Options for row segmentation
#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    /// Policy for a band that is still open at the bottom edge
    pub trailing_band: TrailingBand,
}

impl SegmentOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trailing band policy
    pub fn with_trailing_band(mut self, policy: TrailingBand) -> Self {
        self.trailing_band = policy;
        self
    }
}

/// Segment a mask into text rows with default options.
///
/// # Example
/// ```
/// use autobubble_core::{AlphaMask, Rectangle};
/// use autobubble_rows::segment_rows;
///
/// let mut mask = AlphaMask::new(20, 20);
/// mask.fill_rect(&Rectangle::new_unchecked(5, 5, 10, 4));
/// let rows = segment_rows(&mask).unwrap();
/// assert_eq!(rows.len(), 1);
/// assert_eq!((rows[0].top, rows[0].bottom), (5, 8));
/// ```
pub fn segment_rows<M: OpacityMask + ?Sized>(mask: &M) -> RowsResult<RowList> {
    segment_rows_with(mask, &SegmentOptions::default())
}

/// Segment a mask into text rows.
///
/// Rows are returned top to bottom and never overlap vertically.
///
/// # Errors
///
/// Returns [`RowsError::MaskTooLarge`] if a mask dimension does not fit
/// in `i32`.
pub fn segment_rows_with<M: OpacityMask + ?Sized>(
    mask: &M,
    options: &SegmentOptions,
) -> RowsResult<RowList> {
    let width = mask.width();
    let height = mask.height();
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(RowsError::MaskTooLarge { width, height });
    }

    let mut rows = RowList::new();
    let mut open: Option<u32> = None;

    for y in 0..height {
        match (open, mask.row_has_opaque(y)) {
            (None, true) => open = Some(y),
            (Some(top), false) => {
                rows.extend(close_band(mask, top, y - 1));
                open = None;
            }
            _ => {}
        }
    }

    if let Some(top) = open {
        match options.trailing_band {
            TrailingBand::Drop => {
                log::debug!("dropping band open at bottom edge (top = {top})");
            }
            TrailingBand::Close => rows.extend(close_band(mask, top, height - 1)),
        }
    }

    log::debug!("segmented {}x{} mask into {} rows", width, height, rows.len());
    Ok(rows)
}

/// Measure the horizontal extent of the band `[top, bottom]`.
///
/// Returns `None` only if the band holds no opaque pixel, which the scan
/// in [`segment_rows_with`] never produces.
fn close_band<M: OpacityMask + ?Sized>(mask: &M, top: u32, bottom: u32) -> Option<TextRow> {
    let column_has_text = |x: u32| (top..=bottom).any(|y| mask.is_opaque(x, y));

    let left = (0..mask.width()).find(|&x| column_has_text(x))?;
    let right = (0..mask.width()).rev().find(|&x| column_has_text(x))?;

    Some(TextRow::new(
        top as i32,
        bottom as i32,
        left as i32,
        right as i32 + 1,
    ))
}
