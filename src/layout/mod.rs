//! Text layout arithmetic
//!
//! Positions glyphs for multi-character, multi-line rendering using
//! horizontal advance widths and a line-height multiplier. The structures
//! here are derived per call and never persisted.

use crate::font::{FontAccess, GlyphId};

/// Conventional em-width substituted when a glyph or its horizontal
/// metrics are missing.
pub const DEFAULT_ADVANCE: f64 = 1000.0;

/// A glyph positioned on a line, in design units.
#[derive(Debug, Clone, Copy)]
pub struct PlacedGlyph {
    pub ch: char,
    pub glyph: GlyphId,
    /// Horizontal cursor position at which the glyph starts.
    pub x: f64,
    pub left_side_bearing: f64,
}

/// One laid-out line of text.
#[derive(Debug, Clone, Default)]
pub struct LineLayout {
    pub glyphs: Vec<PlacedGlyph>,
    /// Total advance of the line. An empty line has width zero but still
    /// occupies one line slot.
    pub width: f64,
    /// Baseline y position, measured down from the top of the document.
    pub baseline: f64,
}

/// A fully laid-out block of text.
#[derive(Debug, Clone, Default)]
pub struct TextLayout {
    pub lines: Vec<LineLayout>,
    /// Maximum line width.
    pub width: f64,
    /// `line count * line spacing`.
    pub height: f64,
    pub line_spacing: f64,
    /// Characters that could not be resolved to a glyph, with the reason.
    /// They still advanced the cursor by [`DEFAULT_ADVANCE`].
    pub skipped: Vec<(char, String)>,
}

/// Lay out `text` line by line.
///
/// Lines are split on `'\n'`. Each resolvable character with horizontal
/// metrics is placed at the current cursor and advances it by its advance
/// width. A character whose glyph or metrics are missing contributes no
/// visible glyph, only a [`DEFAULT_ADVANCE`]-wide advance, so the geometry
/// of the rest of the line stays stable. Resolution failures are
/// collected, never fatal; a missing hmtx entry is recovered silently.
pub fn layout_text<F: FontAccess>(font: &F, text: &str, line_height: f64) -> TextLayout {
    let metadata = font.metadata();
    let line_spacing = (f64::from(metadata.ascent) - f64::from(metadata.descent)) * line_height;

    let mut layout = TextLayout {
        line_spacing,
        ..TextLayout::default()
    };

    for (index, line) in text.split('\n').enumerate() {
        let baseline = (index as f64 + 1.0) * line_spacing;
        let mut laid = LineLayout {
            baseline,
            ..LineLayout::default()
        };
        let mut cursor = 0.0;

        for ch in line.chars() {
            match font.resolve_glyph(ch) {
                Ok(glyph) => match font.horizontal_metrics(glyph) {
                    Some(metrics) => {
                        laid.glyphs.push(PlacedGlyph {
                            ch,
                            glyph,
                            x: cursor,
                            left_side_bearing: f64::from(metrics.left_side_bearing),
                        });
                        cursor += f64::from(metrics.advance_width);
                    }
                    // Missing hmtx entry: no visible glyph, only advance.
                    None => cursor += DEFAULT_ADVANCE,
                },
                Err(err) => {
                    // No visible path for this character, only advance.
                    layout.skipped.push((ch, err.to_string()));
                    cursor += DEFAULT_ADVANCE;
                }
            }
        }

        laid.width = cursor;
        layout.width = layout.width.max(laid.width);
        layout.lines.push(laid);
    }

    layout.height = layout.lines.len() as f64 * line_spacing;
    layout
}
