//! Color - 8-bit RGBA fill colors
//!
//! # Packed format
//!
//! [`Color::to_u32`] packs as `0xRRGGBBAA` (red in MSB, alpha in LSB).

use crate::error::{Error, Result};

/// Red channel shift in the packed form
pub const RED_SHIFT: u32 = 24;
/// Green channel shift in the packed form
pub const GREEN_SHIFT: u32 = 16;
/// Blue channel shift in the packed form
pub const BLUE_SHIFT: u32 = 8;
/// Alpha channel shift in the packed form
pub const ALPHA_SHIFT: u32 = 0;

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as `0xRRGGBBAA`.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << RED_SHIFT)
            | ((self.g as u32) << GREEN_SHIFT)
            | ((self.b as u32) << BLUE_SHIFT)
            | ((self.a as u32) << ALPHA_SHIFT)
    }

    /// Unpack from `0xRRGGBBAA`.
    #[inline]
    pub fn from_u32(pixel: u32) -> Self {
        Self {
            r: ((pixel >> RED_SHIFT) & 0xff) as u8,
            g: ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            b: ((pixel >> BLUE_SHIFT) & 0xff) as u8,
            a: ((pixel >> ALPHA_SHIFT) & 0xff) as u8,
        }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for any other shape of input.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::InvalidParameter(format!("invalid hex color: {s:?}"));
        if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}
