//! Mask-to-geometry pipelines
//!
//! Both pipelines start by segmenting the mask into rows. The rectangular
//! one then snaps edge jags and composes rectangles; the round one fits an
//! ellipse. An empty mask yields empty geometry, never an error.

use crate::Result;
use autobubble_core::{Ellipse, OpacityMask, Rects};
use autobubble_rows::{correct_rows, segment_rows};
use autobubble_shape::EllipseOptions;

/// Rectangles of a bubble around the text in `mask`.
///
/// # Example
/// ```
/// use autobubble::{AlphaMask, Rectangle, build_rectangles};
///
/// let mut mask = AlphaMask::new(40, 20);
/// mask.fill_rect(&Rectangle::new_unchecked(5, 5, 20, 6));
/// let rects = build_rectangles(&mask, 3, 3, 4).unwrap();
/// assert_eq!(rects.rects(), &[Rectangle::new_unchecked(2, 2, 26, 11)]);
/// ```
pub fn build_rectangles<M: OpacityMask + ?Sized>(
    mask: &M,
    xpad: u32,
    ypad: u32,
    min_step: u32,
) -> Result<Rects> {
    build_rectangles_at(mask, xpad, ypad, min_step, (0, 0))
}

/// Like [`build_rectangles`], with every rectangle translated by `offset`.
pub fn build_rectangles_at<M: OpacityMask + ?Sized>(
    mask: &M,
    xpad: u32,
    ypad: u32,
    min_step: u32,
    offset: (i32, i32),
) -> Result<Rects> {
    let mut rows = segment_rows(mask)?;
    correct_rows(&mut rows, min_step);
    Ok(autobubble_shape::build_rectangles(&rows, xpad, ypad, offset)?)
}

/// Ellipse of a bubble around the text in `mask`.
pub fn fit_ellipse<M: OpacityMask + ?Sized>(mask: &M) -> Result<Ellipse> {
    fit_ellipse_with(mask, &EllipseOptions::default())
}

/// Like [`fit_ellipse`], with explicit search options.
pub fn fit_ellipse_with<M: OpacityMask + ?Sized>(
    mask: &M,
    options: &EllipseOptions,
) -> Result<Ellipse> {
    let rows = segment_rows(mask)?;
    Ok(autobubble_shape::fit_ellipse_with(&rows, options)?)
}
