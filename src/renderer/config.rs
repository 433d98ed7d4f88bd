//! Style and rendering configuration

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a style file
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse style TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Visual style applied to rendered glyphs.
///
/// Color values are free-form strings (named colors, hex codes) passed
/// through verbatim into the generated style block.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GlyphStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            fill: "black".to_string(),
            stroke: "none".to_string(),
            stroke_width: 0.0,
        }
    }
}

impl GlyphStyle {
    /// Load a style from a TOML file.
    ///
    /// ```toml
    /// fill = "#333333"
    /// stroke = "none"
    /// stroke_width = 0
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a style from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, StyleError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }
}

/// How the viewBox and flip anchor of a single-character document are
/// computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewboxPolicy {
    /// `(lsb, 0, advance width, ascent - descent)`, anchored at the font
    /// ascent. Missing metrics fall back to a 1000-unit em width.
    #[default]
    Metrics,
    /// The glyph's tight bounding box, anchored at its yMax. Empty glyphs
    /// fall back to `(0, 0, 1000, 1000)`.
    Bounds,
}

/// Configuration for the render operations
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Glyph style for the generated style block
    pub style: GlyphStyle,
    /// ViewBox policy for single-character rendering
    pub viewbox: ViewboxPolicy,
    /// Line-height multiplier for text rendering
    pub line_height: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: GlyphStyle::default(),
            viewbox: ViewboxPolicy::default(),
            line_height: 1.2,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph style
    pub fn with_style(mut self, style: GlyphStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the viewBox policy
    pub fn with_viewbox(mut self, policy: ViewboxPolicy) -> Self {
        self.viewbox = policy;
        self
    }

    /// Set the line-height multiplier
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }
}
