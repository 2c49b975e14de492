//! Drawing bubbles for single layers and whole layer trees

use super::{BubbleConfig, BubbleShape, Host, HostResult, Layer, LayerId, TextLayer, with_foreground};
use crate::pipeline::{build_rectangles_at, fit_ellipse};
use crate::{AutobubbleError, Result};
use autobubble_core::Ellipse;

/// Name of the layer created to hold the bubbles
pub const BUBBLE_LAYER_NAME: &str = "auto-bubble";

/// What happened to one text layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOutcome {
    /// A bubble was filled
    Drawn,
    /// The layer holds no opaque pixels
    Empty,
    /// The layer's directives asked for no bubble
    Skipped,
}

/// Summary of a batch run over a layer tree.
#[derive(Debug)]
pub struct BatchReport {
    /// Layer the bubbles were drawn on
    pub bubble_layer: LayerId,
    /// Layers that received a bubble
    pub drawn: Vec<String>,
    /// Layers without any text
    pub empty: Vec<String>,
    /// Layers and groups skipped by directive
    pub skipped: Vec<String>,
    /// Layers that failed, with the reason
    pub failed: Vec<(String, AutobubbleError)>,
}

impl BatchReport {
    fn new(bubble_layer: LayerId) -> Self {
        Self {
            bubble_layer,
            drawn: Vec::new(),
            empty: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }

    fn record(&mut self, name: &str, outcome: LayerOutcome) {
        let list = match outcome {
            LayerOutcome::Drawn => &mut self.drawn,
            LayerOutcome::Empty => &mut self.empty,
            LayerOutcome::Skipped => &mut self.skipped,
        };
        list.push(name.to_string());
    }

    fn fail(&mut self, name: &str, error: AutobubbleError) {
        log::warn!("no bubble for layer {name:?}: {error}");
        self.failed.push((name.to_string(), error));
    }

    /// Whether every layer was handled without error
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Draw the bubble for one text layer onto `bubble`.
///
/// Geometry is computed in layer coordinates and moved by the layer's
/// offset. Padding grows an ellipse by `2 * xpad` by `2 * ypad`.
///
/// # Errors
///
/// Returns an error if the geometry cannot be computed or the host refuses
/// an operation. The foreground color is restored either way.
pub fn autobubble_layer<H: Host + ?Sized>(
    host: &mut H,
    bubble: LayerId,
    layer: &TextLayer,
    config: &BubbleConfig,
) -> Result<LayerOutcome> {
    if config.skip {
        return Ok(LayerOutcome::Skipped);
    }

    let (dx, dy) = layer.offset;
    match config.shape {
        BubbleShape::Rect => {
            let rects = build_rectangles_at(
                &layer.mask,
                config.xpad,
                config.ypad,
                config.min_step,
                layer.offset,
            )?;
            if rects.is_empty() {
                return Ok(LayerOutcome::Empty);
            }
            let mut host = with_foreground(host, config.color)?;
            host.select_rectangles(&rects)?;
            fill_and_clear(&mut *host, bubble)?;
            log::debug!("{:?}: {} rectangles", layer.name, rects.len());
        }
        BubbleShape::Round => {
            let ellipse = fit_ellipse(&layer.mask)?;
            if ellipse.is_empty() {
                return Ok(LayerOutcome::Empty);
            }
            let ellipse = Ellipse {
                width: ellipse.width + 2.0 * f64::from(config.xpad),
                height: ellipse.height + 2.0 * f64::from(config.ypad),
                ..ellipse
            }
            .translate(f64::from(dx), f64::from(dy));
            let mut host = with_foreground(host, config.color)?;
            host.select_ellipse(&ellipse)?;
            fill_and_clear(&mut *host, bubble)?;
            log::debug!("{:?}: ellipse {:?}", layer.name, ellipse);
        }
    }
    Ok(LayerOutcome::Drawn)
}

/// The selection is dropped even when the fill fails. A fill error wins
/// over a clear error; the latter is only logged then.
fn fill_and_clear<H: Host + ?Sized>(host: &mut H, bubble: LayerId) -> HostResult<()> {
    let filled = host.fill_selection(bubble);
    let cleared = host.clear_selection();
    match (filled, cleared) {
        (Err(fill), Err(clear)) => {
            log::warn!("failed to clear selection after failed fill: {clear}");
            Err(fill)
        }
        (filled, cleared) => filled.and(cleared),
    }
}

/// Draw bubbles for every text layer under `root`.
///
/// A single bubble layer is created first. Directives in group names
/// cascade to their children. A layer whose directives or geometry fail is
/// logged and recorded in the report; the rest of the tree is still
/// processed.
///
/// # Errors
///
/// Returns an error only if the bubble layer cannot be created.
pub fn autobubble_tree<H: Host + ?Sized>(
    host: &mut H,
    root: &Layer,
    defaults: &BubbleConfig,
) -> Result<BatchReport> {
    let bubble = host.create_bubble_layer(BUBBLE_LAYER_NAME)?;
    let mut report = BatchReport::new(bubble);
    visit(host, bubble, root, defaults, &mut report);

    log::debug!(
        "autobubble: {} drawn, {} empty, {} skipped, {} failed",
        report.drawn.len(),
        report.empty.len(),
        report.skipped.len(),
        report.failed.len()
    );
    Ok(report)
}

fn visit<H: Host + ?Sized>(
    host: &mut H,
    bubble: LayerId,
    layer: &Layer,
    inherited: &BubbleConfig,
    report: &mut BatchReport,
) {
    let name = layer.name();
    let config = match BubbleConfig::parse_layer_name(name, inherited) {
        Ok(config) => config,
        Err(e) => {
            report.fail(name, e.into());
            return;
        }
    };

    match layer {
        Layer::Group { children, .. } => {
            if config.skip {
                report.record(name, LayerOutcome::Skipped);
                return;
            }
            for child in children {
                visit(host, bubble, child, &config, report);
            }
        }
        Layer::Text(text) => match autobubble_layer(host, bubble, text, &config) {
            Ok(outcome) => report.record(name, outcome),
            Err(e) => report.fail(name, e),
        },
    }
}
