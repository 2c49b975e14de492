//! Rectangular bubble composition
//!
//! Each text row becomes one padded rectangle. Rows that sit close together
//! vertically are additionally joined by a connector spanning their shared
//! horizontal range, so the union reads as a single bubble.

use crate::{ShapeError, ShapeResult};
use autobubble_core::{Rectangle, Rects, TextRow};

/// Build the rectangles of a rectangular bubble.
///
/// # Arguments
/// * `rows` - Text rows, top to bottom
/// * `xpad` - Horizontal padding added on both sides
/// * `ypad` - Vertical padding added above and below each row
/// * `offset` - Placement of the mask in the output canvas
///
/// Rows are joined when the gap between them is smaller than half the
/// mean row span. A pair with no horizontal overlap gets no connector.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidParameters`] if a padding does not fit in
/// `i32`, or a padded and offset rectangle would leave `i32` coordinates.
pub fn build_rectangles(
    rows: &[TextRow],
    xpad: u32,
    ypad: u32,
    offset: (i32, i32),
) -> ShapeResult<Rects> {
    let xpad = to_coord(xpad, "xpad")?;
    let ypad = to_coord(ypad, "ypad")?;

    let mut rects = Rects::with_capacity(rows.len() * 2);
    if rows.is_empty() {
        return Ok(rects);
    }

    let threshold = connect_threshold(rows);

    for (i, row) in rows.iter().enumerate() {
        let body = Rectangle::new_unchecked(row.left, row.top, row.width(), row.span());
        rects.push(place(body, xpad, ypad, offset)?);

        if i == 0 {
            continue;
        }
        let prev = &rows[i - 1];
        if f64::from(row.top - prev.bottom) < threshold
            && let Some(connector) = connector(prev, row)
        {
            rects.push(place(connector, xpad, 0, offset)?);
        }
    }

    Ok(rects)
}

/// Half of the mean `bottom - top` over all rows.
pub fn connect_threshold(rows: &[TextRow]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let total: f64 = rows.iter().map(|r| f64::from(r.span())).sum();
    total / rows.len() as f64 / 2.0
}

/// Unpadded connector between two vertically adjacent rows.
///
/// Spans the horizontal overlap of the rows and the vertical gap between
/// them. Returns `None` when the rows do not overlap horizontally.
fn connector(upper: &TextRow, lower: &TextRow) -> Option<Rectangle> {
    let x = upper.left.max(lower.left);
    let w = upper.right.min(lower.right) - x;
    if w <= 0 {
        return None;
    }
    Some(Rectangle::new_unchecked(
        x,
        upper.bottom,
        w,
        lower.top - upper.bottom,
    ))
}

fn place(
    rect: Rectangle,
    xpad: i32,
    ypad: i32,
    (dx, dy): (i32, i32),
) -> ShapeResult<Rectangle> {
    rect.pad(xpad, ypad)
        .and_then(|r| r.translate(dx, dy))
        .map_err(|e| ShapeError::InvalidParameters(e.to_string()))
}

fn to_coord(value: u32, name: &str) -> ShapeResult<i32> {
    i32::try_from(value)
        .map_err(|_| ShapeError::InvalidParameters(format!("{name} too large: {value}")))
}
