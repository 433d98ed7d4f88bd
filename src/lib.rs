//! glyph2svg - TrueType glyph outlines to standalone SVG documents
//!
//! This library resolves characters to glyphs in a font, extracts their
//! vector outlines, and assembles SVG documents for single characters or
//! runs of text. Font container parsing is delegated to `ttf-parser`.
//!
//! # Example
//!
//! ```no_run
//! use glyph2svg::GlyphRenderer;
//!
//! let renderer = GlyphRenderer::open("DejaVuSans.ttf").unwrap();
//! let svg = renderer.render_char('A').unwrap();
//! assert!(svg.contains("<svg"));
//! ```

pub mod font;
pub mod layout;
pub mod renderer;

pub use font::{FontAccess, FontError, FontFace, FontMetadata, GlyphId};
pub use renderer::{BatchReport, GlyphStyle, RenderConfig, StyleError, TextOutput, ViewboxPolicy};

use std::path::Path;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error loading the font or resolving a glyph
    #[error(transparent)]
    Font(#[from] FontError),

    /// Error writing an output file
    #[error("failed to write '{path}': {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Converts glyphs from one font into SVG documents.
///
/// Owns the font handle for its lifetime; the handle is read-only after
/// load, so a renderer can serve any number of conversions.
#[derive(Debug)]
pub struct GlyphRenderer<F: FontAccess = FontFace> {
    font: F,
    config: RenderConfig,
}

impl GlyphRenderer<FontFace> {
    /// Open a font file and build a renderer with the default
    /// configuration.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        Ok(Self::new(FontFace::open(path)?))
    }
}

impl<F: FontAccess> GlyphRenderer<F> {
    /// Build a renderer over an already-loaded font.
    pub fn new(font: F) -> Self {
        Self {
            font,
            config: RenderConfig::default(),
        }
    }

    /// Replace the render configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// The underlying font.
    pub fn font(&self) -> &F {
        &self.font
    }

    /// Render a single character to an SVG document.
    pub fn render_char(&self, ch: char) -> Result<String, RenderError> {
        Ok(renderer::render_char(
            &self.font,
            ch,
            &self.config.style,
            self.config.viewbox,
        )?)
    }

    /// Render a single character and write the document to `path`.
    pub fn render_char_to(&self, ch: char, path: impl AsRef<Path>) -> Result<String, RenderError> {
        let svg = self.render_char(ch)?;
        renderer::write_svg(path.as_ref(), &svg)?;
        Ok(svg)
    }

    /// Render a run of text to one SVG document. Unresolvable characters
    /// are skipped (reported in the output), never fatal.
    pub fn render_text(&self, text: &str) -> TextOutput {
        renderer::render_text(&self.font, text, &self.config.style, self.config.line_height)
    }

    /// Render a run of text and write the document to `path`.
    pub fn render_text_to(&self, text: &str, path: impl AsRef<Path>) -> Result<TextOutput, RenderError> {
        let output = self.render_text(text);
        renderer::write_svg(path.as_ref(), &output.svg)?;
        Ok(output)
    }

    /// Render each character to `u<HEX>.svg` inside `out_dir`, collecting
    /// per-character failures instead of aborting.
    pub fn batch_render(
        &self,
        chars: impl IntoIterator<Item = char>,
        out_dir: impl AsRef<Path>,
    ) -> Result<BatchReport, RenderError> {
        renderer::batch_render(
            &self.font,
            chars,
            out_dir.as_ref(),
            &self.config.style,
            self.config.viewbox,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fake::FakeFont;

    #[test]
    fn test_renderer_uses_its_config() {
        let renderer = GlyphRenderer::new(FakeFont::with_letter_a()).with_config(
            RenderConfig::new()
                .with_style(GlyphStyle::default().with_fill("#444"))
                .with_viewbox(ViewboxPolicy::Bounds),
        );
        let svg = renderer.render_char('A').unwrap();
        assert!(svg.contains("fill: #444;"));
        assert!(svg.contains(r#"viewBox="50 0 500 700""#));
    }

    #[test]
    fn test_render_char_propagates_glyph_not_found() {
        let renderer = GlyphRenderer::new(FakeFont::with_letter_a());
        let err = renderer.render_char('X').unwrap_err();
        assert!(matches!(err, RenderError::Font(FontError::GlyphNotFound('X'))));
    }

    #[test]
    fn test_render_text_reports_skipped() {
        let renderer = GlyphRenderer::new(FakeFont::with_letter_a());
        let output = renderer.render_text("AXA");
        assert_eq!(output.skipped.len(), 1);
        assert!(output.svg.contains("<svg"));
    }
}
