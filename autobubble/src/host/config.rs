//! Bubble directives in layer names
//!
//! A layer named `Speech 3 [rect pad=12,6 color=#fff8e0]` asks for a
//! rectangular bubble with 12 px horizontal and 6 px vertical padding in a
//! cream color. Only the last bracketed group of a name is read, and
//! directives are separated by whitespace:
//!
//! | Directive        | Effect                                   |
//! |------------------|------------------------------------------|
//! | `round`          | elliptical bubble                        |
//! | `rect`           | rectangular bubble                       |
//! | `pad=N`          | padding `N` on all sides                 |
//! | `pad=X,Y`        | horizontal padding `X`, vertical `Y`     |
//! | `step=N`         | minimum edge step for rectangles         |
//! | `color=#RRGGBB`  | fill color (`#RRGGBBAA` also accepted)   |
//! | `skip`           | draw nothing for this layer or group     |
//!
//! Directives not mentioned keep the inherited value, so a group's
//! directives cascade to its children.

use autobubble_core::Color;
use thiserror::Error;

/// Errors in layer-name directives
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A `[` without a matching `]`
    #[error("unclosed directive bracket in {0:?}")]
    UnclosedBracket(String),

    /// The directive keyword is not known
    #[error("unknown directive: {0:?}")]
    UnknownDirective(String),

    /// The directive value does not parse
    #[error("invalid value for {directive}: {value:?}")]
    InvalidValue { directive: String, value: String },
}

/// Shape of the bubble outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleShape {
    /// Axis-aligned ellipse around all rows
    #[default]
    Round,
    /// One rectangle per row, joined where rows are close
    Rect,
}

/// Default horizontal and vertical padding
pub const DEFAULT_PADDING: u32 = 10;

/// Default minimum edge step for rectangular bubbles
pub const DEFAULT_MIN_STEP: u32 = 5;

/// How to draw the bubble of one layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleConfig {
    /// Outline shape
    pub shape: BubbleShape,
    /// Horizontal padding
    pub xpad: u32,
    /// Vertical padding
    pub ypad: u32,
    /// Edge steps narrower than this are snapped away
    pub min_step: u32,
    /// Fill color
    pub color: Color,
    /// Draw nothing
    pub skip: bool,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            shape: BubbleShape::default(),
            xpad: DEFAULT_PADDING,
            ypad: DEFAULT_PADDING,
            min_step: DEFAULT_MIN_STEP,
            color: Color::WHITE,
            skip: false,
        }
    }
}

impl BubbleConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outline shape
    pub fn with_shape(mut self, shape: BubbleShape) -> Self {
        self.shape = shape;
        self
    }

    /// Set horizontal and vertical padding
    pub fn with_padding(mut self, xpad: u32, ypad: u32) -> Self {
        self.xpad = xpad;
        self.ypad = ypad;
        self
    }

    /// Set the minimum edge step
    pub fn with_min_step(mut self, min_step: u32) -> Self {
        self.min_step = min_step;
        self
    }

    /// Set the fill color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Apply the directives found in `name` on top of `inherited`.
    ///
    /// A name without brackets yields `inherited` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unclosed bracket, an unknown
    /// directive, or a malformed value.
    ///
    /// # Example
    /// ```
    /// use autobubble::host::{BubbleConfig, BubbleShape};
    ///
    /// let base = BubbleConfig::default();
    /// let config = BubbleConfig::parse_layer_name("Intro [rect pad=4,2]", &base).unwrap();
    /// assert_eq!(config.shape, BubbleShape::Rect);
    /// assert_eq!((config.xpad, config.ypad), (4, 2));
    /// assert_eq!(config.min_step, base.min_step);
    /// ```
    pub fn parse_layer_name(name: &str, inherited: &BubbleConfig) -> Result<Self, ConfigError> {
        let mut config = inherited.clone();
        let Some(directives) = directive_group(name)? else {
            return Ok(config);
        };
        for directive in directives.split_whitespace() {
            config.apply(directive)?;
        }
        Ok(config)
    }

    fn apply(&mut self, directive: &str) -> Result<(), ConfigError> {
        let (key, value) = match directive.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (directive, None),
        };
        let invalid = || ConfigError::InvalidValue {
            directive: key.to_string(),
            value: value.unwrap_or_default().to_string(),
        };

        match (key, value) {
            ("round", None) => self.shape = BubbleShape::Round,
            ("rect", None) => self.shape = BubbleShape::Rect,
            ("skip", None) => self.skip = true,
            ("pad", Some(v)) => {
                let (x, y) = match v.split_once(',') {
                    Some((x, y)) => (x, y),
                    None => (v, v),
                };
                self.xpad = x.parse().map_err(|_| invalid())?;
                self.ypad = y.parse().map_err(|_| invalid())?;
            }
            ("step", Some(v)) => self.min_step = v.parse().map_err(|_| invalid())?,
            ("color", Some(v)) => self.color = Color::from_hex(v).map_err(|_| invalid())?,
            ("round" | "rect" | "skip", Some(_)) | ("pad" | "step" | "color", None) => {
                return Err(invalid());
            }
            _ => return Err(ConfigError::UnknownDirective(key.to_string())),
        }
        Ok(())
    }
}

/// Contents of the last `[...]` group in `name`, if any.
fn directive_group(name: &str) -> Result<Option<&str>, ConfigError> {
    let Some(open) = name.rfind('[') else {
        return Ok(None);
    };
    let rest = &name[open + 1..];
    match rest.find(']') {
        Some(close) => Ok(Some(&rest[..close])),
        None => Err(ConfigError::UnclosedBracket(name.to_string())),
    }
}
