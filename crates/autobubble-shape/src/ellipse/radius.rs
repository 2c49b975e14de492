//! Radius search for a fixed center
//!
//! Given a center, find semi-axes `(rx, ry)` such that every edge point
//! satisfies `((x - cx) / rx)^2 + ((y - cy) / ry)^2 <= 1`, with the product
//! `rx * ry` as small as the search can make it.
//!
//! # Algorithm Overview
//!
//! 1. **Uniform scaling**: starting from the extent of the four candidate
//!    points around the center, scale both semi-axes together. Shrink by
//!    [`SHRINK_FACTOR`] while every point fits, grow while any point is
//!    outside, and bisect geometrically once a fitting and a failing scale
//!    are known.
//! 2. **Refinement**: repeatedly shrink the shorter semi-axis by
//!    [`REFINE_FACTOR`] and search the smallest longer semi-axis that still
//!    encloses everything. Stop at the first round that finds no fit or no
//!    smaller area.

use autobubble_core::Point2D;
use autobubble_core::point::bounding_box;

/// Geometric step used while no bracket is known
pub const SHRINK_FACTOR: f64 = 0.75;

/// Number of fit tests per scale search
pub const SCALE_STEPS: usize = 20;

/// Maximum number of refinement rounds
pub const REFINE_ROUNDS: usize = 40;

/// Shrink applied to the shorter semi-axis in each refinement round
pub const REFINE_FACTOR: f64 = 0.95;

/// Semi-axes of an axis-aligned ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radii {
    pub rx: f64,
    pub ry: f64,
}

impl Radii {
    /// Area up to the constant factor pi.
    #[inline]
    pub fn area(&self) -> f64 {
        self.rx * self.ry
    }
}

/// Whether every point lies inside the ellipse `(center, rx, ry)`.
pub fn encloses(points: &[Point2D], center: Point2D, rx: f64, ry: f64) -> bool {
    if !(rx > 0.0 && ry > 0.0) {
        return false;
    }
    points.iter().all(|p| {
        let dx = (p.x - center.x) / rx;
        let dy = (p.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    })
}

/// Smallest scale for which `fits` holds, found within [`SCALE_STEPS`] tests
/// starting at scale 1.
///
/// `fits` must be monotone: once it holds for a scale it holds for every
/// larger one.
fn min_fitting_scale(mut fits: impl FnMut(f64) -> bool) -> Option<f64> {
    let mut fit: Option<f64> = None;
    let mut miss: Option<f64> = None;
    let mut scale = 1.0;

    for _ in 0..SCALE_STEPS {
        if fits(scale) {
            fit = Some(scale);
        } else {
            miss = Some(scale);
        }
        scale = match (fit, miss) {
            (Some(f), Some(m)) => (f * m).sqrt(),
            (Some(f), None) => f * SHRINK_FACTOR,
            (None, _) => scale / SHRINK_FACTOR,
        };
    }

    fit
}

/// Search enclosing semi-axes around `center`.
///
/// `seed` are the candidate's own four points; they set the starting
/// aspect ratio. `points` are all edge points, which the result must
/// enclose. Returns `None` if no enclosing ellipse is found within budget.
pub fn search_radii(points: &[Point2D], seed: &[Point2D], center: Point2D) -> Option<Radii> {
    let (x0, y0, x1, y1) = bounding_box(seed)?;
    let a0 = (center.x - x0).abs().max((x1 - center.x).abs());
    let b0 = (center.y - y0).abs().max((y1 - center.y).abs());
    if !(a0 > 0.0 && b0 > 0.0) {
        return None;
    }

    let scale = min_fitting_scale(|s| encloses(points, center, a0 * s, b0 * s))?;
    let mut best = Radii {
        rx: a0 * scale,
        ry: b0 * scale,
    };

    for _ in 0..REFINE_ROUNDS {
        let Some(candidate) = refine_once(points, center, best) else {
            break;
        };
        if candidate.area() < best.area() {
            best = candidate;
        } else {
            break;
        }
    }

    Some(best)
}

/// Shrink the shorter semi-axis and re-fit the longer one.
fn refine_once(points: &[Point2D], center: Point2D, current: Radii) -> Option<Radii> {
    if current.rx <= current.ry {
        let rx = current.rx * REFINE_FACTOR;
        let s = min_fitting_scale(|s| encloses(points, center, rx, current.ry * s))?;
        Some(Radii {
            rx,
            ry: current.ry * s,
        })
    } else {
        let ry = current.ry * REFINE_FACTOR;
        let s = min_fitting_scale(|s| encloses(points, center, current.rx * s, ry))?;
        Some(Radii {
            rx: current.rx * s,
            ry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2D> {
        vec![
            Point2D::new(-5.0, -5.0),
            Point2D::new(5.0, -5.0),
            Point2D::new(-5.0, 5.0),
            Point2D::new(5.0, 5.0),
        ]
    }

    #[test]
    fn test_encloses_rejects_zero_radius() {
        assert!(!encloses(&square(), Point2D::default(), 0.0, 10.0));
        assert!(encloses(&[], Point2D::default(), 1.0, 1.0));
    }

    #[test]
    fn test_min_fitting_scale_converges() {
        let s = min_fitting_scale(|s| s >= 2.0).unwrap();
        assert!(s >= 2.0 && s < 2.001, "scale {s}");
        let s = min_fitting_scale(|s| s >= 0.3).unwrap();
        assert!(s >= 0.3 && s < 0.3003, "scale {s}");
    }

    #[test]
    fn test_min_fitting_scale_gives_up() {
        assert!(min_fitting_scale(|_| false).is_none());
    }

    #[test]
    fn test_square_gives_circumscribed_circle() {
        let pts = square();
        let r = search_radii(&pts, &pts, Point2D::default()).unwrap();
        let expected = 50f64.sqrt();
        assert!((r.rx - expected).abs() < 1e-3, "rx {}", r.rx);
        assert!((r.ry - expected).abs() < 1e-3, "ry {}", r.ry);
        assert!(encloses(&pts, Point2D::default(), r.rx, r.ry));
    }

    #[test]
    fn test_refinement_never_increases_area() {
        let pts = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(100.0, 0.0),
            Point2D::new(10.0, 30.0),
            Point2D::new(90.0, 30.0),
            Point2D::new(45.0, 34.0),
        ];
        let center = Point2D::new(50.0, 15.0);
        let r = search_radii(&pts, &pts[..4], center).unwrap();
        assert!(encloses(&pts, center, r.rx, r.ry));
        let a0 = 50.0;
        let b0 = 15.0;
        let uniform = min_fitting_scale(|s| encloses(&pts, center, a0 * s, b0 * s)).unwrap();
        assert!(r.area() <= a0 * b0 * uniform * uniform);
    }

    #[test]
    fn test_degenerate_seed() {
        let pts = vec![Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)];
        assert!(search_radii(&pts, &pts, Point2D::new(5.0, 0.0)).is_none());
        assert!(search_radii(&pts, &[], Point2D::new(5.0, 0.0)).is_none());
    }

    #[test]
    fn test_seed_extent_uses_farther_side() {
        // center near the left of the seed box: a0 = 8, b0 = 2
        let seed = vec![Point2D::new(0.0, -2.0), Point2D::new(10.0, 2.0)];
        let center = Point2D::new(2.0, 0.0);
        let r = search_radii(&seed, &seed, center).unwrap();
        assert!(encloses(&seed, center, r.rx, r.ry));
        assert!(r.rx > r.ry);
    }
}
