//! Candidate center estimation
//!
//! Four edge points are treated as the corners of a quadrilateral. The
//! points are assigned NW/SW/NE/SE roles, the two diagonals NW-SE and
//! SW-NE are intersected, and that intersection is reflected through the
//! centroid of the four points. For a parallelogram the intersection and
//! the centroid coincide; for a trapezoid (a short line over a long one)
//! the reflection pushes the center toward the wider side.

use autobubble_core::Point2D;
use autobubble_core::point::centroid;

const EPSILON: f64 = 1e-9;

/// A non-vertical line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Line {
    slope: f64,
    intercept: f64,
}

impl Line {
    /// Line through two points, or `None` if it is vertical.
    fn through(a: Point2D, b: Point2D) -> Option<Line> {
        let dx = b.x - a.x;
        if dx.abs() < EPSILON {
            return None;
        }
        let slope = (b.y - a.y) / dx;
        Some(Line {
            slope,
            intercept: a.y - slope * a.x,
        })
    }

    /// Intersection point, or `None` for parallel lines.
    fn intersect(&self, other: &Line) -> Option<Point2D> {
        let ds = self.slope - other.slope;
        if ds.abs() < EPSILON {
            return None;
        }
        let x = (other.intercept - self.intercept) / ds;
        Some(Point2D::new(x, self.slope * x + self.intercept))
    }
}

/// Corners of a quadrilateral by compass role. North is smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub nw: Point2D,
    pub sw: Point2D,
    pub ne: Point2D,
    pub se: Point2D,
}

impl Quad {
    /// Assign roles: the two smallest `x` (ties broken by `y`) are west,
    /// and within each side the smaller `y` is north.
    pub fn from_points(points: &[Point2D; 4]) -> Quad {
        let mut sorted = *points;
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));

        let split = |p: Point2D, q: Point2D| if p.y <= q.y { (p, q) } else { (q, p) };
        let (nw, sw) = split(sorted[0], sorted[1]);
        let (ne, se) = split(sorted[2], sorted[3]);
        Quad { nw, sw, ne, se }
    }

    /// Intersection of the NW-SE and SW-NE diagonals.
    ///
    /// Returns `None` if either diagonal is vertical or they are parallel.
    pub fn diagonal_intersection(&self) -> Option<Point2D> {
        let d1 = Line::through(self.nw, self.se)?;
        let d2 = Line::through(self.sw, self.ne)?;
        d1.intersect(&d2)
    }
}

/// Estimate an ellipse center from four edge points.
///
/// Returns `None` when no estimate is possible (vertical or parallel
/// diagonals).
pub fn estimate_center(points: &[Point2D; 4]) -> Option<Point2D> {
    let quad = Quad::from_points(points);
    let crossing = quad.diagonal_intersection()?;
    let mid = centroid(points)?;
    let center = crossing.reflect_through(mid);
    (center.x.is_finite() && center.y.is_finite()).then_some(center)
}
