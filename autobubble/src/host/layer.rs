//! Layer tree as seen by the bubble generator

use autobubble_core::AlphaMask;

/// A raster layer holding text.
#[derive(Debug, Clone)]
pub struct TextLayer {
    /// Layer name, possibly carrying bubble directives
    pub name: String,
    /// Position of the layer's top-left corner in the canvas
    pub offset: (i32, i32),
    /// Opacity of the layer's pixels
    pub mask: AlphaMask,
}

impl TextLayer {
    /// Create a text layer
    pub fn new(name: impl Into<String>, offset: (i32, i32), mask: AlphaMask) -> Self {
        Self {
            name: name.into(),
            offset,
            mask,
        }
    }
}

/// A node of the layer tree.
#[derive(Debug, Clone)]
pub enum Layer {
    /// A text layer
    Text(TextLayer),
    /// A group of layers, top of the stack first
    Group { name: String, children: Vec<Layer> },
}

impl Layer {
    /// Create a group
    pub fn group(name: impl Into<String>, children: Vec<Layer>) -> Self {
        Layer::Group {
            name: name.into(),
            children,
        }
    }

    /// Layer name
    pub fn name(&self) -> &str {
        match self {
            Layer::Text(text) => &text.name,
            Layer::Group { name, .. } => name,
        }
    }

    /// Number of text layers in this subtree
    pub fn text_layer_count(&self) -> usize {
        match self {
            Layer::Text(_) => 1,
            Layer::Group { children, .. } => children.iter().map(Layer::text_layer_count).sum(),
        }
    }
}

impl From<TextLayer> for Layer {
    fn from(layer: TextLayer) -> Self {
        Layer::Text(layer)
    }
}
