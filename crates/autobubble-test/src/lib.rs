//! autobubble-test - Regression test framework for autobubble
//!
//! Regression tests accumulate checks in a [`RegParams`] and report all
//! failures at once from [`RegParams::cleanup`]. Fixture masks are written
//! as ASCII art so a test reads like the raster it describes.
//!
//! # Usage
//!
//! ```ignore
//! use autobubble_test::{RegParams, mask_from_art};
//!
//! let mask = mask_from_art(&["....", ".##.", "...."]).unwrap();
//! let mut rp = RegParams::new("segment");
//! rp.compare_values(1.0, rows.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to print every checked value

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use autobubble_core::{AlphaMask, Rectangle};

/// Build a mask from ASCII art.
///
/// `#` (or any character other than `.` and space) is opaque; `.` and
/// space are transparent. All rows must have the same length.
pub fn mask_from_art(art: &[&str]) -> TestResult<AlphaMask> {
    let width = art.first().map_or(0, |row| row.chars().count());
    let mut data = Vec::with_capacity(width * art.len());
    for (row, line) in art.iter().enumerate() {
        let actual = line.chars().count();
        if actual != width {
            return Err(TestError::RaggedArt {
                row,
                expected: width,
                actual,
            });
        }
        data.extend(
            line.chars()
                .map(|c| if c == '.' || c == ' ' { 0 } else { u8::MAX }),
        );
    }
    Ok(AlphaMask::from_alpha(width as u32, art.len() as u32, data)?)
}

/// Build a `width x height` mask with the given rectangles made opaque.
pub fn mask_with_blocks(width: u32, height: u32, blocks: &[Rectangle]) -> AlphaMask {
    let mut mask = AlphaMask::new(width, height);
    for block in blocks {
        mask.fill_rect(block);
    }
    mask
}
