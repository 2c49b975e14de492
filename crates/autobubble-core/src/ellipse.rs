//! Ellipse - Axis-aligned ellipse described by center and full extents

use crate::point::Point2D;
use crate::rect::Rectangle;

/// An axis-aligned ellipse.
///
/// `width` and `height` are full diameters, not radii. The all-zero value
/// ([`Ellipse::default`]) means "no bubble to draw".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ellipse {
    pub center_x: f64,
    pub center_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Ellipse {
    /// Create an ellipse from its center and semi-axes.
    pub fn from_radii(center: Point2D, rx: f64, ry: f64) -> Self {
        Self {
            center_x: center.x,
            center_y: center.y,
            width: 2.0 * rx,
            height: 2.0 * ry,
        }
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.center_x, self.center_y)
    }

    /// Horizontal semi-axis
    #[inline]
    pub fn rx(&self) -> f64 {
        self.width / 2.0
    }

    /// Vertical semi-axis
    #[inline]
    pub fn ry(&self) -> f64 {
        self.height / 2.0
    }

    /// Whether there is nothing to draw
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Area, `pi * rx * ry`
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.rx() * self.ry()
    }

    /// Normalized radial distance of `p`: `<= 1` inside, `> 1` outside.
    ///
    /// Returns infinity for an empty ellipse.
    pub fn radial(&self, p: Point2D) -> f64 {
        if self.is_empty() {
            return f64::INFINITY;
        }
        let dx = (p.x - self.center_x) / self.rx();
        let dy = (p.y - self.center_y) / self.ry();
        dx * dx + dy * dy
    }

    /// Whether `p` lies inside or on the ellipse.
    pub fn contains(&self, p: Point2D) -> bool {
        self.radial(p) <= 1.0
    }

    /// Translate the center by (dx, dy).
    pub fn translate(&self, dx: f64, dy: f64) -> Ellipse {
        Ellipse {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..*self
        }
    }

    /// Smallest integer rectangle enclosing the ellipse.
    ///
    /// Coordinates saturate at the `i32` range.
    pub fn bounding_rect(&self) -> Rectangle {
        let x0 = (self.center_x - self.rx()).floor() as i32;
        let y0 = (self.center_y - self.ry()).floor() as i32;
        let x1 = (self.center_x + self.rx()).ceil() as i32;
        let y1 = (self.center_y + self.ry()).ceil() as i32;
        Rectangle::new_unchecked(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}
