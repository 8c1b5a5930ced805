use egui::Pos2;

/// Stroke width of lines, in points
pub const LINE_STROKE_WIDTH: f32 = 6.0;
/// Stroke width of unfilled rectangles, ellipses and text outlines
pub const OUTLINE_STROKE_WIDTH: f32 = 1.0;

/// Content of a freshly placed text shape
pub const TEXT_PLACEHOLDER: &str = "Text";
pub const DEFAULT_FONT_SIZE: f32 = 13.0;
/// Text can never be resized below this font size
pub const MIN_FONT_SIZE: f32 = 5.0;
/// Average glyph advance relative to font size. Used for hit-testing text
/// without asking the host for a laid-out galley.
pub const TEXT_ADVANCE_RATIO: f32 = 0.6;

/// Extra slack around a shape's outline that still counts as a hit
pub const HIT_TOLERANCE: f32 = 3.0;

/// Distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_distance_to_segment_interior() {
        let d = distance_to_line_segment(pos2(5.0, 3.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_to_segment_past_end() {
        let d = distance_to_line_segment(pos2(13.0, 4.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let d = distance_to_line_segment(pos2(3.0, 4.0), pos2(0.0, 0.0), pos2(0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-5);
    }
}
