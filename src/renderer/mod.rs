//! Glyph-to-SVG rendering
//!
//! Converts resolved glyph outlines into standalone SVG documents, with
//! the coordinate frame (viewBox plus y-flip transform) computed from
//! font metrics or glyph bounds.

pub mod config;
pub mod path;
pub mod svg;

pub use config::{GlyphStyle, RenderConfig, StyleError, ViewboxPolicy};
pub use path::SvgPathPen;
pub use svg::{batch_render, render_char, render_text, write_svg, BatchReport, TextOutput};
