//! In-memory host
//!
//! A software canvas that implements [`Host`]: layers are RGBA buffers the
//! size of the canvas, and a pixel is inside the selection when its center
//! `(x + 0.5, y + 0.5)` is.

use super::{Host, HostError, HostResult, LayerId};
use crate::Result;
use autobubble_core::{Color, Ellipse, Point2D, Rectangle, Rects};
use std::path::Path;

#[derive(Debug, Clone)]
enum Selection {
    None,
    Rects(Rects),
    Ellipse(Ellipse),
}

impl Selection {
    fn contains(&self, x: u32, y: u32) -> bool {
        match self {
            Selection::None => false,
            Selection::Rects(rects) => rects.contains_point(x as i32, y as i32),
            Selection::Ellipse(ellipse) => {
                ellipse.contains(Point2D::new(f64::from(x) + 0.5, f64::from(y) + 0.5))
            }
        }
    }

    /// Rectangle holding every selected pixel, if any.
    fn bounds(&self) -> Option<Rectangle> {
        match self {
            Selection::None => None,
            Selection::Rects(rects) => rects.bounding_box(),
            Selection::Ellipse(ellipse) if ellipse.is_empty() => None,
            Selection::Ellipse(ellipse) => Some(ellipse.bounding_rect()),
        }
    }
}

#[derive(Debug, Clone)]
struct RasterLayer {
    name: String,
    rgba: Vec<u8>,
}

/// A canvas of RGBA layers held in memory.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    width: u32,
    height: u32,
    foreground: Color,
    layers: Vec<RasterLayer>,
    selection: Selection,
}

impl MemoryHost {
    /// Create an empty canvas with a black foreground color.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            foreground: Color::BLACK,
            layers: Vec::new(),
            selection: Selection::None,
        }
    }

    /// Canvas width
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of layers created so far
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Name of a layer
    pub fn layer_name(&self, id: LayerId) -> Option<&str> {
        self.layers.get(id.0).map(|l| l.name.as_str())
    }

    /// Whether anything is selected
    pub fn has_selection(&self) -> bool {
        !matches!(self.selection, Selection::None)
    }

    /// Color of one pixel of a layer, `None` outside the canvas.
    pub fn pixel(&self, id: LayerId, x: u32, y: u32) -> Option<Color> {
        let layer = self.layers.get(id.0)?;
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        let px = &layer.rgba[i..i + 4];
        Some(Color::rgba(px[0], px[1], px[2], px[3]))
    }

    /// Number of pixels of a layer with non-zero alpha.
    pub fn painted_pixels(&self, id: LayerId) -> HostResult<usize> {
        let layer = self.layer(id)?;
        Ok(layer.rgba.chunks_exact(4).filter(|px| px[3] != 0).count())
    }

    /// Raw RGBA bytes of a layer.
    pub fn layer_rgba(&self, id: LayerId) -> HostResult<&[u8]> {
        Ok(&self.layer(id)?.rgba)
    }

    /// Write a layer to a PNG file.
    pub fn save_layer<P: AsRef<Path>>(&self, id: LayerId, path: P) -> Result<()> {
        let layer = self.layer(id)?;
        autobubble_io::write_rgba_file(path, self.width, self.height, &layer.rgba)?;
        Ok(())
    }

    fn layer(&self, id: LayerId) -> HostResult<&RasterLayer> {
        self.layers.get(id.0).ok_or(HostError::UnknownLayer(id))
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

impl Host for MemoryHost {
    fn foreground(&self) -> Color {
        self.foreground
    }

    fn set_foreground(&mut self, color: Color) -> HostResult<()> {
        self.foreground = color;
        Ok(())
    }

    fn create_bubble_layer(&mut self, name: &str) -> HostResult<LayerId> {
        let len = self.width as usize * self.height as usize * 4;
        self.layers.push(RasterLayer {
            name: name.to_string(),
            rgba: vec![0; len],
        });
        Ok(LayerId(self.layers.len() - 1))
    }

    fn select_rectangles(&mut self, rects: &Rects) -> HostResult<()> {
        self.selection = Selection::Rects(rects.clone());
        Ok(())
    }

    fn select_ellipse(&mut self, ellipse: &Ellipse) -> HostResult<()> {
        self.selection = Selection::Ellipse(*ellipse);
        Ok(())
    }

    fn fill_selection(&mut self, layer: LayerId) -> HostResult<()> {
        if layer.0 >= self.layers.len() {
            return Err(HostError::UnknownLayer(layer));
        }
        let fill = [
            self.foreground.r,
            self.foreground.g,
            self.foreground.b,
            self.foreground.a,
        ];
        let canvas_w = i32::try_from(self.width).unwrap_or(i32::MAX);
        let canvas_h = i32::try_from(self.height).unwrap_or(i32::MAX);
        let Some(area) = self
            .selection
            .bounds()
            .and_then(|b| b.clip(canvas_w, canvas_h))
        else {
            return Ok(());
        };
        for y in area.y as u32..area.bottom() as u32 {
            for x in area.x as u32..area.right() as u32 {
                if self.selection.contains(x, y) {
                    let i = self.offset(x, y);
                    self.layers[layer.0].rgba[i..i + 4].copy_from_slice(&fill);
                }
            }
        }
        Ok(())
    }

    fn clear_selection(&mut self) -> HostResult<()> {
        self.selection = Selection::None;
        Ok(())
    }
}
