//! Font access layer
//!
//! All font container parsing is delegated to `ttf-parser` behind the
//! [`FontAccess`] trait, so that layout and rendering can be exercised
//! against in-memory fonts in tests. [`FontFace`] is the file-backed
//! implementation.

pub mod error;
pub mod face;

pub use error::FontError;
pub use face::FontFace;

/// Identifier of a glyph within a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphId(pub u16);

/// Font-wide metadata and vertical metrics, in design units.
///
/// `x_height` and `cap_height` come from the OS/2 table, which not every
/// font carries; they are `None` when the font omits them rather than a
/// guessed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetadata {
    pub glyph_count: u16,
    /// Maximum extent above the baseline (positive).
    pub ascent: i16,
    /// Maximum extent below the baseline (negative).
    pub descent: i16,
    pub x_height: Option<i16>,
    pub cap_height: Option<i16>,
}

/// Per-glyph horizontal metrics from the hmtx table, in design units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizontalMetrics {
    pub advance_width: u16,
    pub left_side_bearing: i16,
}

/// Tight bounding box of a glyph outline, in design units, y-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphBounds {
    pub x_min: i16,
    pub y_min: i16,
    pub x_max: i16,
    pub y_max: i16,
}

impl GlyphBounds {
    pub fn width(&self) -> i32 {
        i32::from(self.x_max) - i32::from(self.x_min)
    }

    pub fn height(&self) -> i32 {
        i32::from(self.y_max) - i32::from(self.y_min)
    }
}

/// Receiver for glyph outline commands.
///
/// Coordinates are in font design units, y-up, origin at the glyph's
/// baseline/left origin.
pub trait OutlineSink {
    /// Start a new contour at the given point.
    fn move_to(&mut self, x: f32, y: f32);
    /// Draw a straight line to the given point.
    fn line_to(&mut self, x: f32, y: f32);
    /// Draw a quadratic Bezier curve (TrueType outlines).
    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32);
    /// Draw a cubic Bezier curve (CFF outlines).
    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32);
    /// Close the current contour.
    fn close(&mut self);
}

/// Read-only view of a parsed font: glyph resolution, outline traversal,
/// and metrics lookup.
///
/// Implementations are read-only after construction; a handle outlives
/// individual conversions and may be shared freely.
pub trait FontAccess {
    /// Font family name, best-effort (falls back to the file stem for
    /// file-backed implementations).
    fn family_name(&self) -> &str;

    /// Font-wide metadata and vertical metrics.
    fn metadata(&self) -> FontMetadata;

    /// Resolve a character through the character map table.
    ///
    /// Subtable preference: a Windows-platform Unicode subtable (encoding
    /// id 1 or 10), otherwise the first subtable of any platform. Fails
    /// with [`FontError::CmapUnavailable`] if the font has no subtable and
    /// [`FontError::GlyphNotFound`] if the character is absent.
    fn glyph_for_char(&self, ch: char) -> Result<GlyphId, FontError>;

    /// Characters with code points in `[start, end]` present in the
    /// character map, ascending.
    fn supported_chars(&self, start: u32, end: u32) -> Result<Vec<char>, FontError>;

    /// Resolve a character through glyph names: `uni<HEX>` first (uppercase
    /// hexadecimal of the code point), then the literal character.
    fn resolve_glyph(&self, ch: char) -> Result<GlyphId, FontError>;

    /// Stream a glyph's outline commands into `sink`. Returns `false` if
    /// the glyph has no contours (e.g. a space).
    fn outline_glyph(&self, glyph: GlyphId, sink: &mut dyn OutlineSink) -> bool;

    /// Tight bounding box of the glyph outline, `None` for empty glyphs.
    fn glyph_bounds(&self, glyph: GlyphId) -> Option<GlyphBounds>;

    /// Advance width and left side bearing, `None` when the hmtx entry is
    /// missing. Callers substitute a default width; this is not an error.
    fn horizontal_metrics(&self, glyph: GlyphId) -> Option<HorizontalMetrics>;
}

/// Primary glyph-name key for a character: `uni` + uppercase hex code
/// point, no zero padding.
pub fn uni_glyph_name(ch: char) -> String {
    format!("uni{:X}", ch as u32)
}

#[cfg(test)]
pub(crate) mod fake {
    //! In-memory font for unit tests.

    use std::collections::BTreeMap;

    use super::{
        FontAccess, FontError, FontMetadata, GlyphBounds, GlyphId, HorizontalMetrics, OutlineSink,
    };

    /// One recorded outline command.
    #[derive(Debug, Clone, Copy)]
    pub enum Cmd {
        Move(f32, f32),
        Line(f32, f32),
        Quad(f32, f32, f32, f32),
        Curve(f32, f32, f32, f32, f32, f32),
        Close,
    }

    #[derive(Debug, Clone, Default)]
    pub struct FakeGlyph {
        pub metrics: Option<HorizontalMetrics>,
        pub bounds: Option<GlyphBounds>,
        pub outline: Vec<Cmd>,
    }

    /// Fake font: ascent 800, descent -200 unless overridden, glyphs
    /// added per test.
    pub struct FakeFont {
        glyphs: BTreeMap<char, (GlyphId, FakeGlyph)>,
        next_id: u16,
        pub ascent: i16,
        pub descent: i16,
    }

    impl FakeFont {
        pub fn new() -> Self {
            Self {
                glyphs: BTreeMap::new(),
                next_id: 1,
                ascent: 800,
                descent: -200,
            }
        }

        pub fn add_glyph(&mut self, ch: char, glyph: FakeGlyph) -> GlyphId {
            let id = GlyphId(self.next_id);
            self.next_id += 1;
            self.glyphs.insert(ch, (id, glyph));
            id
        }

        /// Glyph 'A': advance 600, lsb 50, a simple closed triangle.
        pub fn with_letter_a() -> Self {
            let mut font = Self::new();
            font.add_glyph(
                'A',
                FakeGlyph {
                    metrics: Some(HorizontalMetrics {
                        advance_width: 600,
                        left_side_bearing: 50,
                    }),
                    bounds: Some(GlyphBounds {
                        x_min: 50,
                        y_min: 0,
                        x_max: 550,
                        y_max: 700,
                    }),
                    outline: vec![
                        Cmd::Move(50.0, 0.0),
                        Cmd::Line(300.0, 700.0),
                        Cmd::Line(550.0, 0.0),
                        Cmd::Close,
                    ],
                },
            );
            font
        }

        fn entry(&self, glyph: GlyphId) -> Option<&FakeGlyph> {
            self.glyphs.values().find(|(id, _)| *id == glyph).map(|(_, g)| g)
        }
    }

    impl FontAccess for FakeFont {
        fn family_name(&self) -> &str {
            "Fake Sans"
        }

        fn metadata(&self) -> FontMetadata {
            FontMetadata {
                glyph_count: self.glyphs.len() as u16,
                ascent: self.ascent,
                descent: self.descent,
                x_height: Some(500),
                cap_height: None,
            }
        }

        fn glyph_for_char(&self, ch: char) -> Result<GlyphId, FontError> {
            self.glyphs
                .get(&ch)
                .map(|(id, _)| *id)
                .ok_or(FontError::GlyphNotFound(ch))
        }

        fn supported_chars(&self, start: u32, end: u32) -> Result<Vec<char>, FontError> {
            Ok(self
                .glyphs
                .keys()
                .copied()
                .filter(|ch| (start..=end).contains(&(*ch as u32)))
                .collect())
        }

        fn resolve_glyph(&self, ch: char) -> Result<GlyphId, FontError> {
            self.glyph_for_char(ch)
        }

        fn outline_glyph(&self, glyph: GlyphId, sink: &mut dyn OutlineSink) -> bool {
            let Some(entry) = self.entry(glyph) else {
                return false;
            };
            if entry.outline.is_empty() {
                return false;
            }
            for cmd in &entry.outline {
                match *cmd {
                    Cmd::Move(x, y) => sink.move_to(x, y),
                    Cmd::Line(x, y) => sink.line_to(x, y),
                    Cmd::Quad(x1, y1, x, y) => sink.quad_to(x1, y1, x, y),
                    Cmd::Curve(x1, y1, x2, y2, x, y) => sink.curve_to(x1, y1, x2, y2, x, y),
                    Cmd::Close => sink.close(),
                }
            }
            true
        }

        fn glyph_bounds(&self, glyph: GlyphId) -> Option<GlyphBounds> {
            self.entry(glyph).and_then(|g| g.bounds)
        }

        fn horizontal_metrics(&self, glyph: GlyphId) -> Option<HorizontalMetrics> {
            self.entry(glyph).and_then(|g| g.metrics)
        }
    }
}
