use egui::{Pos2, Rect, Vec2};

use super::{Geometry, ShapeKind};
use crate::shape::common;

/// Straight segment between two endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub start: Pos2,
    pub end: Pos2,
}

impl LineShape {
    /// A zero-length line sitting on `point`
    pub fn at(point: Pos2) -> Self {
        Self { start: point, end: point }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

impl Geometry for LineShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn reference_point(&self) -> Pos2 {
        self.start
    }

    fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let reach = common::LINE_STROKE_WIDTH / 2.0 + common::HIT_TOLERANCE;
        common::distance_to_line_segment(pos, self.start, self.end) <= reach
    }

    fn resize(&mut self, _anchor: Pos2, pointer: Pos2, constrained: bool) {
        if !constrained {
            self.end = pointer;
            return;
        }

        let dx = (pointer.x - self.start.x).abs();
        let dy = (pointer.y - self.start.y).abs();
        if dx > dy {
            // horizontal
            self.end = Pos2::new(pointer.x, self.start.y);
        } else {
            self.end = Pos2::new(self.start.x, pointer.y);
        }
    }

    /// Lines do not translate as a whole. The endpoint nearer to the
    /// pointer follows it and the far endpoint stays where it is.
    fn move_to(&mut self, pointer: Pos2, _offset: Vec2) {
        let start_distance = pointer.distance(self.start);
        let end_distance = pointer.distance(self.end);
        if end_distance < start_distance {
            self.end = pointer;
        } else {
            self.start = pointer;
        }
    }

    fn move_offset(&self, _pointer: Pos2) -> Vec2 {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_constrained_resize_locks_horizontal() {
        let mut line = LineShape::at(pos2(10.0, 10.0));
        line.resize(pos2(10.0, 10.0), pos2(60.0, 25.0), true);
        assert_eq!(line.end, pos2(60.0, 10.0));
    }

    #[test]
    fn test_constrained_resize_locks_vertical_on_tie() {
        let mut line = LineShape::at(pos2(0.0, 0.0));
        line.resize(pos2(0.0, 0.0), pos2(20.0, -20.0), true);
        assert_eq!(line.end, pos2(0.0, -20.0));
    }

    #[test]
    fn test_hit_test_respects_stroke_width() {
        let line = LineShape { start: pos2(0.0, 0.0), end: pos2(100.0, 0.0) };
        assert!(line.hit_test(pos2(50.0, 5.0)));
        assert!(!line.hit_test(pos2(50.0, 10.0)));
    }
}
