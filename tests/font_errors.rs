//! Error paths for file-backed font loading

use std::fs;

use glyph2svg::{FontError, FontFace, GlyphRenderer, RenderError};

#[test]
fn test_missing_font_file_is_a_read_error() {
    let err = FontFace::open("/nonexistent/NoSuchFont.ttf").unwrap_err();
    assert!(matches!(err, FontError::Read { .. }));
    assert!(err.to_string().contains("NoSuchFont.ttf"));
}

#[test]
fn test_invalid_font_container_is_a_parse_error() {
    let path = std::env::temp_dir().join(format!("glyph2svg-bogus-{}.ttf", std::process::id()));
    fs::write(&path, b"this is not a font").unwrap();

    let err = FontFace::open(&path).unwrap_err();
    assert!(matches!(err, FontError::Parse(_)));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_open_failure_surfaces_through_the_renderer() {
    let err = GlyphRenderer::open("/nonexistent/NoSuchFont.ttf").unwrap_err();
    assert!(matches!(err, RenderError::Font(FontError::Read { .. })));
}
