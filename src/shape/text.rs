use egui::{Pos2, Rect, Vec2};

use super::{Geometry, ShapeKind};
use crate::shape::common;

/// A run of text whose origin is the left end of its baseline
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pub origin: Pos2,
    pub content: String,
    pub font_size: f32,
}

impl TextShape {
    pub fn at(point: Pos2) -> Self {
        Self {
            origin: point,
            content: common::TEXT_PLACEHOLDER.to_owned(),
            font_size: common::DEFAULT_FONT_SIZE,
        }
    }

    pub fn push_str(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Drops the last character. Returns false if there was nothing to drop.
    pub fn pop_char(&mut self) -> bool {
        self.content.pop().is_some()
    }

    /// Approximate advance of the whole run
    fn estimated_width(&self) -> f32 {
        self.content.chars().count() as f32 * self.font_size * common::TEXT_ADVANCE_RATIO
    }
}

impl Geometry for TextShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn reference_point(&self) -> Pos2 {
        self.origin
    }

    fn bounds(&self) -> Rect {
        Rect::from_min_max(
            Pos2::new(self.origin.x, self.origin.y - self.font_size),
            Pos2::new(self.origin.x + self.estimated_width(), self.origin.y),
        )
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.bounds().expand(common::HIT_TOLERANCE).contains(pos)
    }

    /// Text only scales horizontally. Its height follows the font.
    fn resize(&mut self, _anchor: Pos2, pointer: Pos2, _constrained: bool) {
        self.font_size = ((pointer.x - self.origin.x).abs() / 2.0).max(common::MIN_FONT_SIZE);
    }

    fn move_to(&mut self, pointer: Pos2, offset: Vec2) {
        self.origin = pointer - offset;
    }
}
