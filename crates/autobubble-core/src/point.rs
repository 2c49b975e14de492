//! Point2D, PointSet - Floating-point sample points
//!
//! Used by the ellipse search, which works on band corners converted to
//! `f64` coordinates.

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect this point through `pivot`.
    #[inline]
    pub fn reflect_through(&self, pivot: Point2D) -> Point2D {
        Point2D::new(2.0 * pivot.x - self.x, 2.0 * pivot.y - self.y)
    }
}

/// Array of points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2D>,
}

impl PointSet {
    /// Create a new empty set.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a set with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get a point by index.
    pub fn get(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    /// Add a point.
    pub fn push(&mut self, p: Point2D) {
        self.points.push(p);
    }

    /// Get all points as a slice.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Compute the bounding box.
    ///
    /// Returns `(x_min, y_min, x_max, y_max)`, or `None` if empty.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        bounding_box(&self.points)
    }

    /// Compute the centroid.
    ///
    /// Returns `None` if empty.
    pub fn centroid(&self) -> Option<Point2D> {
        centroid(&self.points)
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }
}

impl FromIterator<Point2D> for PointSet {
    fn from_iter<T: IntoIterator<Item = Point2D>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Bounding box `(x_min, y_min, x_max, y_max)` of a slice of points.
pub fn bounding_box(points: &[Point2D]) -> Option<(f64, f64, f64, f64)> {
    let first = points.first()?;
    let init = (first.x, first.y, first.x, first.y);
    Some(points.iter().fold(init, |(x0, y0, x1, y1), p| {
        (x0.min(p.x), y0.min(p.y), x1.max(p.x), y1.max(p.y))
    }))
}

/// Arithmetic mean of a slice of points.
pub fn centroid(points: &[Point2D]) -> Option<Point2D> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point2D::new(sx / n, sy / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_and_centroid() {
        let pts: PointSet = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, -2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(pts.bounding_box(), Some((0.0, -2.0, 4.0, 2.0)));
        assert_eq!(pts.centroid(), Some(Point2D::new(2.0, 0.0)));
        assert!(PointSet::new().centroid().is_none());
    }

    #[test]
    fn test_reflect_through() {
        let p = Point2D::new(1.0, 3.0).reflect_through(Point2D::new(2.0, 2.0));
        assert_eq!(p, Point2D::new(3.0, 1.0));
    }
}
