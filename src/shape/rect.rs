use egui::{Pos2, Rect, Vec2};

use super::{Geometry, ShapeKind};
use crate::shape::common;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    pub origin: Pos2,
    pub width: f32,
    pub height: f32,
}

impl RectShape {
    pub fn at(point: Pos2) -> Self {
        Self { origin: point, width: 0.0, height: 0.0 }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(self.width, self.height))
    }
}

impl Geometry for RectShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn reference_point(&self) -> Pos2 {
        self.origin
    }

    fn bounds(&self) -> Rect {
        self.rect()
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.rect().expand(common::HIT_TOLERANCE).contains(pos)
    }

    /// Extents are always measured from the gesture anchor, so the
    /// rectangle flips around it instead of growing negative sizes.
    fn resize(&mut self, anchor: Pos2, pointer: Pos2, constrained: bool) {
        let dx = pointer.x - anchor.x;
        let dy = pointer.y - anchor.y;

        if constrained {
            let side = dx.abs().min(dy.abs());
            let x = if pointer.x < anchor.x { anchor.x - side } else { anchor.x };
            let y = if pointer.y < anchor.y { anchor.y - side } else { anchor.y };
            self.origin = Pos2::new(x, y);
            self.width = side;
            self.height = side;
        } else {
            self.origin = Pos2::new(anchor.x.min(pointer.x), anchor.y.min(pointer.y));
            self.width = dx.abs();
            self.height = dy.abs();
        }
    }

    fn move_to(&mut self, pointer: Pos2, offset: Vec2) {
        self.origin = pointer - offset;
    }
}
