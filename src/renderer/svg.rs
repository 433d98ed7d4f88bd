//! SVG document assembly
//!
//! Builds standalone SVG documents from resolved glyph outlines. Font
//! metrics are y-up while SVG is y-down, so every emitted `<g>` element
//! carries an affine transform that flips the y axis and re-anchors it.

use std::path::Path;

use crate::font::{FontAccess, FontError, GlyphId};
use crate::layout::{self, DEFAULT_ADVANCE};
use crate::RenderError;

use super::config::{GlyphStyle, ViewboxPolicy};
use super::path::SvgPathPen;

/// Outcome of a batch conversion. Partial success is the normal case;
/// failures never abort the remaining characters.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of characters rendered and written.
    pub success: usize,
    /// Failed characters with their error messages, in input order.
    pub failures: Vec<(char, String)>,
}

/// Result of a text rendering call.
#[derive(Debug)]
pub struct TextOutput {
    /// The assembled SVG document.
    pub svg: String,
    /// Characters that were skipped (no resolvable glyph), with reasons.
    pub skipped: Vec<(char, String)>,
}

/// Coordinate frame for a single-glyph document: the viewBox window and
/// the y value the flip transform is anchored at.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Frame {
    min_x: f64,
    min_y: f64,
    width: f64,
    height: f64,
    anchor: f64,
}

fn compute_frame<F: FontAccess>(font: &F, glyph: GlyphId, policy: ViewboxPolicy) -> Frame {
    match policy {
        ViewboxPolicy::Metrics => {
            let metadata = font.metadata();
            let (advance, lsb) = match font.horizontal_metrics(glyph) {
                Some(metrics) => (
                    f64::from(metrics.advance_width),
                    f64::from(metrics.left_side_bearing),
                ),
                None => (DEFAULT_ADVANCE, 0.0),
            };
            Frame {
                min_x: lsb,
                min_y: 0.0,
                width: advance,
                height: f64::from(metadata.ascent) - f64::from(metadata.descent),
                anchor: f64::from(metadata.ascent),
            }
        }
        ViewboxPolicy::Bounds => match font.glyph_bounds(glyph) {
            Some(bounds) => Frame {
                min_x: f64::from(bounds.x_min),
                min_y: f64::from(bounds.y_min),
                width: f64::from(bounds.width()),
                height: f64::from(bounds.height()),
                anchor: f64::from(bounds.y_max),
            },
            // Empty glyph (e.g. space): a conventional em square.
            None => Frame {
                min_x: 0.0,
                min_y: 0.0,
                width: 1000.0,
                height: 1000.0,
                anchor: 1000.0,
            },
        },
    }
}

/// Build SVG documents incrementally: one shared `<svg>`/`<defs>` wrapper,
/// one `<g>`/`<path>` pair per glyph.
struct SvgDocument {
    class: String,
    style_rule: String,
    viewbox: String,
    groups: Vec<String>,
}

impl SvgDocument {
    fn new(class: &str, style: &GlyphStyle, viewbox: (f64, f64, f64, f64)) -> Self {
        Self {
            class: class.to_string(),
            style_rule: format!(
                "fill: {}; stroke: {}; stroke-width: {};",
                style.fill, style.stroke, style.stroke_width
            ),
            viewbox: format!("{} {} {} {}", viewbox.0, viewbox.1, viewbox.2, viewbox.3),
            groups: vec![],
        }
    }

    fn add_path(&mut self, transform: &str, data: &str) {
        self.groups.push(format!(
            r#"  <g transform="{}"><path class="{}" d="{}"/></g>"#,
            transform, self.class, data
        ));
    }

    fn build(self) -> String {
        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"{}\">\n",
            self.viewbox
        ));
        svg.push_str(&format!(
            "  <defs><style>.{} {{ {} }}</style></defs>\n",
            self.class, self.style_rule
        ));
        for group in &self.groups {
            svg.push_str(group);
            svg.push('\n');
        }
        svg.push_str("</svg>");
        svg
    }
}

/// Render a single character to a standalone SVG document.
///
/// Resolution failures propagate to the caller; missing horizontal
/// metrics are recovered via the default em width.
pub fn render_char<F: FontAccess>(
    font: &F,
    ch: char,
    style: &GlyphStyle,
    policy: ViewboxPolicy,
) -> Result<String, FontError> {
    let glyph = font.resolve_glyph(ch)?;

    let mut pen = SvgPathPen::new();
    font.outline_glyph(glyph, &mut pen);
    let data = pen.into_data();

    let frame = compute_frame(font, glyph, policy);
    let mut doc = SvgDocument::new(
        "glyph",
        style,
        (frame.min_x, frame.min_y, frame.width, frame.height),
    );
    doc.add_path(&format!("matrix(1 0 0 -1 0 {})", frame.anchor), &data);
    Ok(doc.build())
}

/// Render a run of text to a single SVG document, one `<g>`/`<path>` pair
/// per glyph.
///
/// Characters without a resolvable glyph are skipped but still advance
/// the cursor by the default width; their errors are reported in the
/// returned [`TextOutput`], never aborting the call.
pub fn render_text<F: FontAccess>(
    font: &F,
    text: &str,
    style: &GlyphStyle,
    line_height: f64,
) -> TextOutput {
    let ascent = f64::from(font.metadata().ascent);
    let text_layout = layout::layout_text(font, text, line_height);

    let mut doc = SvgDocument::new("text", style, (0.0, 0.0, text_layout.width, text_layout.height));
    for line in &text_layout.lines {
        for placed in &line.glyphs {
            let mut pen = SvgPathPen::new();
            font.outline_glyph(placed.glyph, &mut pen);
            let transform = format!(
                "translate({}, {}) scale(1, -1) translate(0, {})",
                placed.x - placed.left_side_bearing,
                line.baseline,
                -ascent
            );
            doc.add_path(&transform, &pen.into_data());
        }
    }

    TextOutput {
        svg: doc.build(),
        skipped: text_layout.skipped,
    }
}

/// Render each character to `u<HEX>.svg` inside `out_dir`.
///
/// The directory is created if needed. Each character is attempted
/// independently; failures (unresolvable glyph, write error) are recorded
/// and the batch continues.
pub fn batch_render<F: FontAccess>(
    font: &F,
    chars: impl IntoIterator<Item = char>,
    out_dir: &Path,
    style: &GlyphStyle,
    policy: ViewboxPolicy,
) -> Result<BatchReport, RenderError> {
    std::fs::create_dir_all(out_dir).map_err(|source| RenderError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut report = BatchReport::default();
    for ch in chars {
        let out_path = out_dir.join(format!("u{:X}.svg", ch as u32));
        let outcome = render_char(font, ch, style, policy)
            .map_err(RenderError::from)
            .and_then(|svg| write_svg(&out_path, &svg));
        match outcome {
            Ok(()) => report.success += 1,
            Err(err) => report.failures.push((ch, err.to_string())),
        }
    }
    Ok(report)
}

/// Write an SVG document as UTF-8 text, all-or-nothing.
///
/// The content is written to a temporary sibling and renamed into place,
/// so a failed write never leaves a truncated file behind.
pub fn write_svg(path: &Path, contents: &str) -> Result<(), RenderError> {
    let write_err = |source: std::io::Error| RenderError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    std::fs::write(tmp, contents).map_err(write_err)?;
    std::fs::rename(tmp, path).map_err(|source| {
        let _ = std::fs::remove_file(tmp);
        write_err(source)
    })
}
