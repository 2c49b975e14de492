//! PNG support
//!
//! Text layers are exported as PNGs with an alpha channel; only the alpha
//! samples are kept. Canvases are written back as 8-bit RGBA.

use crate::{IoError, IoResult};
use autobubble_core::AlphaMask;
use png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// PNG file signature: 89 50 4E 47 0D 0A 1A 0A
pub const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// Read the alpha channel of a PNG as a mask.
///
/// Supports RGBA and grayscale-alpha images at 8 or 16 bits per sample.
/// For 16-bit samples the most significant byte is kept.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for images without an alpha
/// channel, and [`IoError::DecodeError`] for malformed data.
pub fn read_png_mask<R: BufRead + Seek>(reader: R) -> IoResult<AlphaMask> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Byte offset of the alpha sample within a pixel, and the pixel stride
    let (alpha_offset, stride) = match (color_type, bit_depth) {
        (ColorType::Rgba, BitDepth::Eight) => (3, 4),
        (ColorType::Rgba, BitDepth::Sixteen) => (6, 8),
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => (1, 2),
        (ColorType::GrayscaleAlpha, BitDepth::Sixteen) => (2, 4),
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNG without alpha channel: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut alpha = Vec::with_capacity(width as usize * height as usize);
    for row in data.chunks_exact(bytes_per_row).take(height as usize) {
        alpha.extend(
            row.chunks_exact(stride)
                .take(width as usize)
                .map(|px| px[alpha_offset]),
        );
    }

    Ok(AlphaMask::from_alpha(width, height, alpha)?)
}

/// Write an 8-bit RGBA buffer as a PNG.
///
/// `rgba` holds `width * height` pixels, row-major, four bytes each.
pub fn write_rgba_png<W: Write>(width: u32, height: u32, rgba: &[u8], writer: W) -> IoResult<()> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(IoError::Core(autobubble_core::Error::DimensionMismatch {
            expected,
            actual: rgba.len(),
        }));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(rgba)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}
