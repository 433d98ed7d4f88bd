//! SVG path data from glyph outlines

use crate::font::OutlineSink;

/// Collects outline commands into an SVG path `d` attribute string.
///
/// Each outline command maps 1:1 to a path command (move -> `M`,
/// line -> `L`, quadratic -> `Q`, cubic -> `C`, close -> `Z`).
/// Coordinates are emitted as plain decimal numbers in design units.
#[derive(Debug, Default)]
pub struct SvgPathPen {
    segments: Vec<String>,
}

impl SvgPathPen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated path data, empty for glyphs with no contours.
    pub fn into_data(self) -> String {
        self.segments.join(" ")
    }
}

impl OutlineSink for SvgPathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.segments.push(format!("M{} {}", x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.segments.push(format!("L{} {}", x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.segments.push(format!("Q{} {} {} {}", x1, y1, x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.segments
            .push(format!("C{} {} {} {} {} {}", x1, y1, x2, y2, x, y));
    }

    fn close(&mut self) {
        self.segments.push("Z".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_map_one_to_one() {
        let mut pen = SvgPathPen::new();
        pen.move_to(50.0, 0.0);
        pen.line_to(300.0, 700.0);
        pen.quad_to(400.0, 650.0, 550.0, 0.0);
        pen.curve_to(500.0, -50.0, 100.0, -50.0, 50.0, 0.0);
        pen.close();
        assert_eq!(
            pen.into_data(),
            "M50 0 L300 700 Q400 650 550 0 C500 -50 100 -50 50 0 Z"
        );
    }

    #[test]
    fn test_empty_pen_yields_empty_data() {
        assert_eq!(SvgPathPen::new().into_data(), "");
    }

    #[test]
    fn test_fractional_coordinates_keep_their_decimals() {
        let mut pen = SvgPathPen::new();
        pen.move_to(12.5, -3.25);
        assert_eq!(pen.into_data(), "M12.5 -3.25");
    }
}
