use egui::{Pos2, Rect, Vec2};

use super::{Geometry, ShapeKind};
use crate::shape::common;

/// Ellipse described by its center and two radii
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    pub center: Pos2,
    pub radius_x: f32,
    pub radius_y: f32,
}

impl EllipseShape {
    pub fn at(point: Pos2) -> Self {
        Self { center: point, radius_x: 0.0, radius_y: 0.0 }
    }

    pub fn is_circle(&self) -> bool {
        self.radius_x == self.radius_y
    }

    /// Outline sampled as a closed polygon, for painters without a native
    /// ellipse primitive.
    pub fn outline(&self, segments: usize) -> Vec<Pos2> {
        let segments = segments.max(3);
        (0..segments)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / segments as f32;
                Pos2::new(
                    self.center.x + self.radius_x * angle.cos(),
                    self.center.y + self.radius_y * angle.sin(),
                )
            })
            .collect()
    }
}

impl Geometry for EllipseShape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn reference_point(&self) -> Pos2 {
        self.center
    }

    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.center, Vec2::new(self.radius_x * 2.0, self.radius_y * 2.0))
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let rx = self.radius_x + common::HIT_TOLERANCE;
        let ry = self.radius_y + common::HIT_TOLERANCE;
        let d = pos - self.center;
        (d.x / rx).powi(2) + (d.y / ry).powi(2) <= 1.0
    }

    fn resize(&mut self, _anchor: Pos2, pointer: Pos2, constrained: bool) {
        let rx = (pointer.x - self.center.x).abs();
        let ry = (pointer.y - self.center.y).abs();
        if constrained {
            let radius = rx.min(ry);
            self.radius_x = radius;
            self.radius_y = radius;
        } else {
            self.radius_x = rx;
            self.radius_y = ry;
        }
    }

    fn move_to(&mut self, pointer: Pos2, offset: Vec2) {
        self.center = pointer - offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_outline_touches_extremes() {
        let ellipse = EllipseShape { center: pos2(0.0, 0.0), radius_x: 20.0, radius_y: 10.0 };
        let points = ellipse.outline(4);
        assert_eq!(points.len(), 4);
        assert!((points[0].x - 20.0).abs() < 1e-4);
        assert!((points[1].y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_hit_test_inside_and_outside() {
        let ellipse = EllipseShape { center: pos2(50.0, 50.0), radius_x: 30.0, radius_y: 10.0 };
        assert!(ellipse.hit_test(pos2(75.0, 50.0)));
        assert!(!ellipse.hit_test(pos2(50.0, 70.0)));
    }
}
