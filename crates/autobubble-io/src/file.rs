//! File-path entry points

use crate::png::{PNG_SIGNATURE, read_png_mask, write_rgba_png};
use crate::{IoError, IoResult};
use autobubble_core::AlphaMask;
use std::fs::{self, File};
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Read a mask from a PNG file.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the file does not start with
/// the PNG signature.
pub fn read_mask_file<P: AsRef<Path>>(path: P) -> IoResult<AlphaMask> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    if !data.starts_with(PNG_SIGNATURE) {
        return Err(IoError::UnsupportedFormat(format!(
            "{}: not a PNG file",
            path.display()
        )));
    }
    read_png_mask(Cursor::new(data))
}

/// Write an 8-bit RGBA buffer to a PNG file.
pub fn write_rgba_file<P: AsRef<Path>>(
    path: P,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> IoResult<()> {
    let file = File::create(path)?;
    write_rgba_png(width, height, rgba, BufWriter::new(file))
}
