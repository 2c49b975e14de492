//! autobubble-io - Mask input and canvas output
//!
//! Text layers arrive as PNG files whose alpha channel marks the drawn
//! text. This crate decodes them into [`AlphaMask`](autobubble_core::AlphaMask)
//! values and writes rendered canvases back out as RGBA PNGs.
//!
//! # Examples
//!
//! ```no_run
//! use autobubble_io::read_mask_file;
//!
//! let mask = read_mask_file("layer.png").unwrap();
//! println!("{} opaque pixels", mask.count_opaque());
//! ```

pub mod error;
pub mod file;
pub mod png;

pub use error::{IoError, IoResult};
pub use file::{read_mask_file, write_rgba_file};
pub use png::{read_png_mask, write_rgba_png};
