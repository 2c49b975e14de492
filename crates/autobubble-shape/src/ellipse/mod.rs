//! Elliptical bubble fitting
//!
//! Finds an axis-aligned ellipse enclosing the corner points of every text
//! row, with area close to minimal among the candidates evaluated.
//!
//! # Algorithm Overview
//!
//! 1. **Edge points**: the upper half of the rows contributes top corners,
//!    the lower half bottom corners
//! 2. **Candidates**: every 4-point combination yields a candidate center
//!    (see [`center`])
//! 3. **Radii**: each center gets the smallest enclosing semi-axes the
//!    numeric search finds (see [`radius`])
//! 4. **Selection**: the candidate with the smallest area wins; earlier
//!    candidates win ties
//!
//! The search is `O(n^4)` in the number of rows, so [`EllipseOptions`]
//! caps the row count by default.

pub mod center;
pub mod radius;

use crate::{ShapeError, ShapeResult};
use autobubble_core::{Ellipse, Point2D, PointSet, TextRow};

pub use center::{Quad, estimate_center};
pub use radius::{Radii, encloses, search_radii};

/// Default cap on the number of rows fed to the combinatorial search
pub const DEFAULT_MAX_ROWS: usize = 12;

/// Options for ellipse fitting
#[derive(Debug, Clone)]
pub struct EllipseOptions {
    /// Maximum number of rows accepted, `None` for no limit
    pub max_rows: Option<usize>,
}

impl Default for EllipseOptions {
    fn default() -> Self {
        Self {
            max_rows: Some(DEFAULT_MAX_ROWS),
        }
    }
}

impl EllipseOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row cap
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Validate options
    pub fn validate(&self) -> ShapeResult<()> {
        if self.max_rows == Some(0) {
            return Err(ShapeError::InvalidParameters(
                "max_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Corner points sampled from the rows.
///
/// The first `ceil(n / 2)` rows give their top corners and the remaining
/// rows their bottom corners. A single row gives all four corners.
pub fn edge_points(rows: &[TextRow]) -> PointSet {
    let mut points = PointSet::with_capacity(rows.len().max(2) * 2);
    if let [row] = rows {
        for p in row.top_corners().into_iter().chain(row.bottom_corners()) {
            points.push(p);
        }
        return points;
    }

    let upper = rows.len().div_ceil(2);
    for (i, row) in rows.iter().enumerate() {
        let corners = if i < upper {
            row.top_corners()
        } else {
            row.bottom_corners()
        };
        for p in corners {
            points.push(p);
        }
    }
    points
}

/// Fit an ellipse to text rows with default options.
pub fn fit_ellipse(rows: &[TextRow]) -> ShapeResult<Ellipse> {
    fit_ellipse_with(rows, &EllipseOptions::default())
}

/// Fit an ellipse to text rows.
///
/// Returns the all-zero [`Ellipse`] for an empty row list.
///
/// # Errors
///
/// - [`ShapeError::TooManyRows`] if `rows` exceeds `options.max_rows`
/// - [`ShapeError::NoValidEllipse`] if every candidate is degenerate
pub fn fit_ellipse_with(rows: &[TextRow], options: &EllipseOptions) -> ShapeResult<Ellipse> {
    options.validate()?;
    if rows.is_empty() {
        return Ok(Ellipse::default());
    }
    if let Some(max) = options.max_rows
        && rows.len() > max
    {
        return Err(ShapeError::TooManyRows {
            rows: rows.len(),
            max,
        });
    }

    fit_points(edge_points(rows).points())
}

/// Fit an ellipse enclosing `points`.
///
/// Every 4-point combination, in lexicographic index order, proposes a
/// center; the smallest enclosing ellipse over all proposals is returned.
///
/// # Errors
///
/// Returns [`ShapeError::NoValidEllipse`] when no combination produces an
/// enclosing ellipse, including when there are fewer than 4 points.
pub fn fit_points(points: &[Point2D]) -> ShapeResult<Ellipse> {
    let n = points.len();
    let mut best: Option<(Point2D, Radii)> = None;
    let mut combinations = 0usize;
    let mut skipped = 0usize;

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                for l in k + 1..n {
                    combinations += 1;
                    let quad = [points[i], points[j], points[k], points[l]];
                    let Some((center, radii)) = estimate_center(&quad)
                        .and_then(|c| search_radii(points, &quad, c).map(|r| (c, r)))
                    else {
                        skipped += 1;
                        continue;
                    };
                    if best.is_none_or(|(_, b)| radii.area() < b.area()) {
                        best = Some((center, radii));
                    }
                }
            }
        }
    }

    log::debug!(
        "ellipse search: {} points, {} combinations, {} degenerate",
        n,
        combinations,
        skipped
    );

    let (center, radii) = best.ok_or(ShapeError::NoValidEllipse { combinations })?;
    Ok(Ellipse::from_radii(center, radii.rx, radii.ry))
}
