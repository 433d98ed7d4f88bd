//! File-backed font access over `ttf-parser`
//!
//! `FontFace` owns the raw font bytes and caches the font-wide scalars at
//! load time. Per-glyph queries re-create the zero-copy `ttf_parser::Face`
//! view, which only validates headers and builds offset tables.

use std::path::Path;
use std::sync::Arc;

use ttf_parser::PlatformId;

use super::{
    uni_glyph_name, FontAccess, FontError, FontMetadata, GlyphBounds, GlyphId, HorizontalMetrics,
    OutlineSink,
};

/// A parsed font file: owned bytes plus cached metadata.
#[derive(Clone, Debug)]
pub struct FontFace {
    bytes: Arc<[u8]>,
    family_name: String,
    metadata: FontMetadata,
}

impl FontFace {
    /// Open and parse a font file.
    ///
    /// # Errors
    ///
    /// [`FontError::Read`] if the file is missing or unreadable,
    /// [`FontError::Parse`] if it is not a valid font container.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        // The family-name fallback is the file name without extension.
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(bytes, &stem)
    }

    /// Parse a font from an owned byte buffer. `fallback_name` is used as
    /// the family name when the name table has no usable entry.
    pub fn from_bytes(bytes: Vec<u8>, fallback_name: &str) -> Result<Self, FontError> {
        let bytes: Arc<[u8]> = Arc::from(bytes);
        let face = ttf_parser::Face::parse(&bytes, 0)?;
        let family_name = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY && name.is_unicode())
            .find_map(|name| name.to_string())
            .unwrap_or_else(|| fallback_name.to_string());
        let metadata = FontMetadata {
            glyph_count: face.number_of_glyphs(),
            ascent: face.ascender(),
            descent: face.descender(),
            x_height: face.x_height(),
            cap_height: face.capital_height(),
        };
        drop(face);
        Ok(Self {
            bytes,
            family_name,
            metadata,
        })
    }

    /// Re-create the `Face` view for a query.
    fn face(&self) -> ttf_parser::Face<'_> {
        // The bytes were validated at construction, so this cannot fail.
        ttf_parser::Face::parse(&self.bytes, 0).expect("font bytes validated at construction")
    }

    /// Select the character-map subtable.
    ///
    /// Prefers a Windows-platform Unicode subtable (encoding id 1 or 10);
    /// otherwise falls back to the first subtable of any platform. The
    /// fallback can pick a non-Unicode-indexed table for some legacy fonts;
    /// that quirk is deliberate, matching long-standing behavior.
    fn select_cmap<'a>(
        face: &ttf_parser::Face<'a>,
    ) -> Result<ttf_parser::cmap::Subtable<'a>, FontError> {
        let cmap = face.tables().cmap.ok_or(FontError::CmapUnavailable)?;
        let windows_unicode = cmap.subtables.into_iter().find(|subtable| {
            subtable.platform_id == PlatformId::Windows
                && matches!(subtable.encoding_id, 1 | 10)
        });
        windows_unicode
            .or_else(|| cmap.subtables.into_iter().next())
            .ok_or(FontError::CmapUnavailable)
    }
}

impl FontAccess for FontFace {
    fn family_name(&self) -> &str {
        &self.family_name
    }

    fn metadata(&self) -> FontMetadata {
        self.metadata
    }

    fn glyph_for_char(&self, ch: char) -> Result<GlyphId, FontError> {
        let face = self.face();
        let subtable = Self::select_cmap(&face)?;
        subtable
            .glyph_index(ch as u32)
            .map(|id| GlyphId(id.0))
            .ok_or(FontError::GlyphNotFound(ch))
    }

    fn supported_chars(&self, start: u32, end: u32) -> Result<Vec<char>, FontError> {
        let face = self.face();
        let subtable = Self::select_cmap(&face)?;
        Ok((start..=end)
            .filter(|code| subtable.glyph_index(*code).is_some())
            .filter_map(char::from_u32)
            .collect())
    }

    fn resolve_glyph(&self, ch: char) -> Result<GlyphId, FontError> {
        let face = self.face();
        let mut literal = [0u8; 4];
        face.glyph_index_by_name(&uni_glyph_name(ch))
            .or_else(|| face.glyph_index_by_name(ch.encode_utf8(&mut literal)))
            .map(|id| GlyphId(id.0))
            .ok_or(FontError::GlyphNotFound(ch))
    }

    fn outline_glyph(&self, glyph: GlyphId, sink: &mut dyn OutlineSink) -> bool {
        struct Bridge<'a>(&'a mut dyn OutlineSink);

        impl ttf_parser::OutlineBuilder for Bridge<'_> {
            fn move_to(&mut self, x: f32, y: f32) {
                self.0.move_to(x, y);
            }

            fn line_to(&mut self, x: f32, y: f32) {
                self.0.line_to(x, y);
            }

            fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
                self.0.quad_to(x1, y1, x, y);
            }

            fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
                self.0.curve_to(x1, y1, x2, y2, x, y);
            }

            fn close(&mut self) {
                self.0.close();
            }
        }

        self.face()
            .outline_glyph(ttf_parser::GlyphId(glyph.0), &mut Bridge(sink))
            .is_some()
    }

    fn glyph_bounds(&self, glyph: GlyphId) -> Option<GlyphBounds> {
        self.face()
            .glyph_bounding_box(ttf_parser::GlyphId(glyph.0))
            .map(|rect| GlyphBounds {
                x_min: rect.x_min,
                y_min: rect.y_min,
                x_max: rect.x_max,
                y_max: rect.y_max,
            })
    }

    fn horizontal_metrics(&self, glyph: GlyphId) -> Option<HorizontalMetrics> {
        let face = self.face();
        let id = ttf_parser::GlyphId(glyph.0);
        let advance_width = face.glyph_hor_advance(id)?;
        let left_side_bearing = face.glyph_hor_side_bearing(id).unwrap_or(0);
        Some(HorizontalMetrics {
            advance_width,
            left_side_bearing,
        })
    }
}
