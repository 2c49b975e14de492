//! Rectangle, Rects - Axis-aligned selection boxes
//!
//! A rectangular bubble is described as a list of rectangles whose union
//! is the bubble outline.

use crate::error::{Error, Result};

/// An axis-aligned rectangle
///
/// Small and frequently copied, so it is a plain `Copy` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Rectangle {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rectangle dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the union (bounding box) of two rectangles
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rectangle {
            x,
            y,
            w: right - x,
            h: bottom - y,
        }
    }

    /// Translate the rectangle by (dx, dy)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the moved rectangle does not
    /// fit in `i32` coordinates.
    pub fn translate(&self, dx: i32, dy: i32) -> Result<Rectangle> {
        let x = self.x.checked_add(dx);
        let y = self.y.checked_add(dy);
        match (x, y) {
            (Some(x), Some(y)) => Rectangle::fitted(x, y, self.w, self.h),
            _ => Err(Error::InvalidParameter(format!(
                "translation ({dx}, {dy}) overflows rectangle at ({}, {})",
                self.x, self.y
            ))),
        }
    }

    /// Grow the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the padded rectangle does not
    /// fit in `i32` coordinates.
    pub fn pad(&self, dx: i32, dy: i32) -> Result<Rectangle> {
        let grow = |origin: i32, extent: i32, d: i32| {
            let twice = d.checked_mul(2)?;
            Some((origin.checked_sub(d)?, extent.checked_add(twice)?))
        };
        match (grow(self.x, self.w, dx), grow(self.y, self.h, dy)) {
            (Some((x, w)), Some((y, h))) => Rectangle::fitted(x, y, w, h),
            _ => Err(Error::InvalidParameter(format!(
                "padding ({dx}, {dy}) overflows rectangle of size {}x{}",
                self.w, self.h
            ))),
        }
    }

    /// A rectangle whose right and bottom edges are representable.
    fn fitted(x: i32, y: i32, w: i32, h: i32) -> Result<Rectangle> {
        if x.checked_add(w).is_none() || y.checked_add(h).is_none() {
            return Err(Error::InvalidParameter(format!(
                "rectangle ({x}, {y}, {w}, {h}) extends past i32 coordinates"
            )));
        }
        Ok(Rectangle { x, y, w, h })
    }

    /// Clip the rectangle to `[0, width) x [0, height)`
    pub fn clip(&self, width: i32, height: i32) -> Option<Rectangle> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let right = self.right().min(width);
        let bottom = self.bottom().min(height);

        if x < right && y < bottom {
            Some(Rectangle {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }
}

/// Ordered list of rectangles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rects {
    rects: Vec<Rectangle>,
}

impl Rects {
    /// Create a new empty list
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    /// Create a list with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rects: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of rectangles
    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Get a rectangle by index
    pub fn get(&self, index: usize) -> Option<&Rectangle> {
        self.rects.get(index)
    }

    /// Add a rectangle
    pub fn push(&mut self, r: Rectangle) {
        self.rects.push(r);
    }

    /// Get all rectangles as a slice
    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    /// Check whether any rectangle contains the point
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.rects.iter().any(|r| r.contains_point(x, y))
    }

    /// Compute the bounding box of all rectangles
    pub fn bounding_box(&self) -> Option<Rectangle> {
        let (first, rest) = self.rects.split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union(r)))
    }

    /// Translate every rectangle by (dx, dy)
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the list unchanged, if any rectangle
    /// would leave `i32` coordinates.
    pub fn translate(&mut self, dx: i32, dy: i32) -> Result<()> {
        let moved = self
            .rects
            .iter()
            .map(|r| r.translate(dx, dy))
            .collect::<Result<Vec<_>>>()?;
        self.rects = moved;
        Ok(())
    }

    /// Create an iterator over rectangles
    pub fn iter(&self) -> impl Iterator<Item = &Rectangle> {
        self.rects.iter()
    }
}

impl FromIterator<Rectangle> for Rects {
    fn from_iter<T: IntoIterator<Item = Rectangle>>(iter: T) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Rects {
    type Item = Rectangle;
    type IntoIter = std::vec::IntoIter<Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.into_iter()
    }
}

impl<'a> IntoIterator for &'a Rects {
    type Item = &'a Rectangle;
    type IntoIter = std::slice::Iter<'a, Rectangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.rects.iter()
    }
}
