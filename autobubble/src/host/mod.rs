//! Host binding
//!
//! An image editor hosts the bubble generator: it owns the layers, the
//! selection, and the foreground color. [`Host`] names exactly the
//! operations the generator needs from it, so the same driver runs against
//! a real editor or against the in-memory [`MemoryHost`].
//!
//! # Drawing a bubble
//!
//! 1. Parse the bubble directives from the text layer's name
//!    ([`BubbleConfig::parse_layer_name`])
//! 2. Compute the geometry from the layer's mask
//! 3. Select it on the bubble layer and fill with the bubble color, under
//!    a [`ForegroundGuard`] that puts the previous color back afterwards

pub mod config;
pub mod driver;
pub mod layer;
pub mod memory;

use autobubble_core::{Color, Ellipse, Rects};
use std::ops::{Deref, DerefMut};
use thiserror::Error;

pub use config::{BubbleConfig, BubbleShape, ConfigError};
pub use driver::{BUBBLE_LAYER_NAME, BatchReport, LayerOutcome, autobubble_layer, autobubble_tree};
pub use layer::{Layer, TextLayer};
pub use memory::MemoryHost;

/// Handle to a layer created through a [`Host`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub usize);

/// Errors reported by a host
#[derive(Debug, Error)]
pub enum HostError {
    /// The layer handle does not name a layer of this host
    #[error("unknown layer: {0:?}")]
    UnknownLayer(LayerId),

    /// The host refused the operation
    #[error("host operation failed: {0}")]
    Operation(String),
}

/// Result type for host operations
pub type HostResult<T> = Result<T, HostError>;

/// Operations consumed from the image editor.
///
/// Selections are image-wide: a new selection replaces the previous one.
pub trait Host {
    /// Current foreground color
    fn foreground(&self) -> Color;

    /// Set the foreground color used by [`Host::fill_selection`]
    fn set_foreground(&mut self, color: Color) -> HostResult<()>;

    /// Create a transparent layer covering the canvas for bubbles to be
    /// drawn on.
    fn create_bubble_layer(&mut self, name: &str) -> HostResult<LayerId>;

    /// Replace the selection with the union of `rects`
    fn select_rectangles(&mut self, rects: &Rects) -> HostResult<()>;

    /// Replace the selection with `ellipse`
    fn select_ellipse(&mut self, ellipse: &Ellipse) -> HostResult<()>;

    /// Fill the selected area of `layer` with the foreground color
    fn fill_selection(&mut self, layer: LayerId) -> HostResult<()>;

    /// Drop the selection
    fn clear_selection(&mut self) -> HostResult<()>;
}

/// Scoped foreground color.
///
/// Dereferences to the host. The color that was current when the guard
/// was created is restored when it is dropped, on every exit path.
pub struct ForegroundGuard<'a, H: Host + ?Sized> {
    host: &'a mut H,
    previous: Color,
}

/// Set the foreground color of `host` until the returned guard is dropped.
///
/// # Example
/// ```
/// use autobubble::Color;
/// use autobubble::host::{Host, MemoryHost, with_foreground};
///
/// let mut host = MemoryHost::new(8, 8);
/// let before = host.foreground();
/// {
///     let guard = with_foreground(&mut host, Color::rgb(200, 0, 0)).unwrap();
///     assert_eq!(guard.foreground(), Color::rgb(200, 0, 0));
/// }
/// assert_eq!(host.foreground(), before);
/// ```
pub fn with_foreground<H: Host + ?Sized>(
    host: &mut H,
    color: Color,
) -> HostResult<ForegroundGuard<'_, H>> {
    let previous = host.foreground();
    host.set_foreground(color)?;
    Ok(ForegroundGuard { host, previous })
}

impl<H: Host + ?Sized> ForegroundGuard<'_, H> {
    /// Color that will be restored on drop
    pub fn previous(&self) -> Color {
        self.previous
    }
}

impl<H: Host + ?Sized> Deref for ForegroundGuard<'_, H> {
    type Target = H;
    fn deref(&self) -> &Self::Target {
        self.host
    }
}

impl<H: Host + ?Sized> DerefMut for ForegroundGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.host
    }
}

impl<H: Host + ?Sized> Drop for ForegroundGuard<'_, H> {
    fn drop(&mut self) {
        if let Err(e) = self.host.set_foreground(self.previous) {
            log::warn!("failed to restore foreground color: {e}");
        }
    }
}
