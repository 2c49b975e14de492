//! OpacityMask, AlphaMask - Binary opacity views over a raster
//!
//! A text layer is reduced to a single question per pixel: is anything
//! drawn here? Alpha is treated as binary; any non-zero alpha counts as
//! opaque.
//!
//! # Pixel layout
//!
//! [`AlphaMask`] stores one alpha byte per pixel, row-major, with no
//! padding between rows.

use crate::error::{Error, Result};
use crate::rect::Rectangle;

/// Read-only per-pixel opacity queries over a `width x height` raster.
///
/// Callers must only query `0 <= x < width()` and `0 <= y < height()`.
pub trait OpacityMask {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Whether the pixel at `(x, y)` is opaque.
    fn is_opaque(&self, x: u32, y: u32) -> bool;

    /// Whether any pixel in row `y` is opaque.
    fn row_has_opaque(&self, y: u32) -> bool {
        (0..self.width()).any(|x| self.is_opaque(x, y))
    }
}

impl<M: OpacityMask + ?Sized> OpacityMask for &M {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn is_opaque(&self, x: u32, y: u32) -> bool {
        (**self).is_opaque(x, y)
    }

    fn row_has_opaque(&self, y: u32) -> bool {
        (**self).row_has_opaque(y)
    }
}

/// An owned 8-bit alpha raster.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Create a fully transparent mask.
    ///
    /// Zero-sized masks are allowed; they contain no rows of text.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        }
    }

    /// Create a mask from one alpha byte per pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width * height` overflows,
    /// or [`Error::DimensionMismatch`] if `data.len() != width * height`.
    pub fn from_alpha(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height, 1)?;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a mask from interleaved RGBA bytes, keeping only alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the buffer size overflows,
    /// or [`Error::DimensionMismatch`] if `rgba.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = buffer_len(width, height, 4)?;
        if rgba.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        let data = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the alpha value at `(x, y)`, or `None` outside the mask.
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Set the alpha value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the pixel lies outside the mask.
    pub fn set_alpha(&mut self, x: u32, y: u32, alpha: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = alpha;
        Ok(())
    }

    /// Make every pixel of `rect` fully opaque, clipped to the mask.
    pub fn fill_rect(&mut self, rect: &Rectangle) {
        let Some(clipped) = rect.clip(self.width as i32, self.height as i32) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            let start = self.index(clipped.x as u32, y as u32);
            self.data[start..start + clipped.w as usize].fill(u8::MAX);
        }
    }

    /// Number of opaque pixels.
    pub fn count_opaque(&self) -> usize {
        self.data.iter().filter(|&&a| a != 0).count()
    }

    /// Raw alpha bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

impl OpacityMask for AlphaMask {
    #[inline]
    fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn is_opaque(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y)] != 0
    }

    fn row_has_opaque(&self, y: u32) -> bool {
        let start = self.index(0, y);
        self.data[start..start + self.width as usize]
            .iter()
            .any(|&a| a != 0)
    }
}

/// Bytes needed for `width x height` pixels of `bytes_per_pixel` each.
fn buffer_len(width: u32, height: u32, bytes_per_pixel: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(bytes_per_pixel))
        .ok_or(Error::InvalidDimension { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let mask = AlphaMask::new(4, 3);
        assert_eq!(mask.width(), 4);
        assert_eq!(mask.height(), 3);
        assert_eq!(mask.count_opaque(), 0);
        assert!(!(0..3).any(|y| mask.row_has_opaque(y)));
    }

    #[test]
    fn test_from_alpha_length_mismatch() {
        let err = AlphaMask::from_alpha(2, 2, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_from_rgba_size_overflow() {
        let err = AlphaMask::from_rgba(u32::MAX, u32::MAX, &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimension { .. }));
    }

    #[test]
    fn test_from_rgba_keeps_alpha() {
        let rgba = [255, 0, 0, 0, 0, 0, 0, 7];
        let mask = AlphaMask::from_rgba(2, 1, &rgba).unwrap();
        assert!(!mask.is_opaque(0, 0));
        assert!(mask.is_opaque(1, 0));
        assert_eq!(mask.alpha(1, 0), Some(7));
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut mask = AlphaMask::new(5, 5);
        mask.fill_rect(&Rectangle::new_unchecked(3, 3, 10, 10));
        assert_eq!(mask.count_opaque(), 4);
        assert!(mask.is_opaque(4, 4));
        assert!(!mask.is_opaque(2, 2));
    }

    #[test]
    fn test_set_alpha_out_of_bounds() {
        let mut mask = AlphaMask::new(2, 2);
        assert!(mask.set_alpha(2, 0, 1).is_err());
        mask.set_alpha(1, 1, 1).unwrap();
        assert!(mask.row_has_opaque(1));
    }

    #[test]
    fn test_borrowed_mask_delegates() {
        let mut mask = AlphaMask::new(3, 1);
        mask.set_alpha(2, 0, 255).unwrap();
        fn last_column_opaque<M: OpacityMask>(m: M) -> bool {
            m.is_opaque(m.width() - 1, 0)
        }
        assert!(last_column_opaque(&mask));
    }
}
