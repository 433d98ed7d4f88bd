//! Errors for font loading and glyph resolution

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the font access layer.
#[derive(Error, Debug)]
pub enum FontError {
    /// The font file could not be read.
    #[error("failed to read font file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid TrueType/OpenType container.
    #[error("invalid font data: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),

    /// The character has no resolvable glyph in this font.
    #[error("no glyph for character '{0}'")]
    GlyphNotFound(char),

    /// The font has no character map subtable to resolve characters with.
    #[error("font has no usable character map table")]
    CmapUnavailable,
}
