use egui::{Color32, Pos2, Vec2, pos2};
use shape_animator::shape::{Geometry, ShapeGeometry, ShapeKind, factory};
use shape_animator::StyleState;

const KINDS: [ShapeKind; 4] = [ShapeKind::Line, ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Text];

fn extents(geometry: &ShapeGeometry) -> Vec<f32> {
    match geometry {
        ShapeGeometry::Line(_) => vec![],
        ShapeGeometry::Rectangle(r) => vec![r.width, r.height],
        ShapeGeometry::Ellipse(e) => vec![e.radius_x, e.radius_y],
        ShapeGeometry::Text(t) => vec![t.font_size],
    }
}

#[test]
fn test_resize_at_origin_is_never_negative() {
    let style = StyleState::default();
    let origin = pos2(40.0, 40.0);
    for kind in KINDS {
        for constrained in [false, true] {
            let mut shape = factory::create(kind, origin, &style);
            shape.geometry.resize(origin, origin, constrained);
            for extent in extents(&shape.geometry) {
                assert!(extent >= 0.0, "{} produced {}", kind.name(), extent);
            }
        }
    }
}

#[test]
fn test_resize_never_negative_in_any_direction() {
    let style = StyleState::default();
    let origin = pos2(100.0, 100.0);
    let pointers = [pos2(20.0, 30.0), pos2(180.0, 10.0), pos2(5.0, 190.0), pos2(150.0, 170.0)];
    for kind in KINDS {
        for pointer in pointers {
            for constrained in [false, true] {
                let mut shape = factory::create(kind, origin, &style);
                shape.geometry.resize(origin, pointer, constrained);
                assert!(extents(&shape.geometry).iter().all(|e| *e >= 0.0));
            }
        }
    }
}

#[test]
fn test_unconstrained_rectangle() {
    let mut shape = factory::create(ShapeKind::Rectangle, pos2(10.0, 10.0), &StyleState::default());
    shape.geometry.resize(pos2(10.0, 10.0), pos2(110.0, 60.0), false);
    let ShapeGeometry::Rectangle(rect) = &shape.geometry else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.origin, pos2(10.0, 10.0));
    assert_eq!(rect.width, 100.0);
    assert_eq!(rect.height, 50.0);
}

#[test]
fn test_unconstrained_rectangle_flips_around_anchor() {
    let anchor = pos2(100.0, 100.0);
    let mut shape = factory::create(ShapeKind::Rectangle, anchor, &StyleState::default());
    shape.geometry.resize(anchor, pos2(70.0, 140.0), false);
    let ShapeGeometry::Rectangle(rect) = &shape.geometry else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.origin, pos2(70.0, 100.0));
    assert_eq!((rect.width, rect.height), (30.0, 40.0));
}

#[test]
fn test_constrained_rectangle_is_square() {
    let anchor = pos2(50.0, 50.0);
    for pointer in [pos2(120.0, 70.0), pos2(10.0, 0.0), pos2(60.0, -30.0), pos2(-5.0, 95.0)] {
        let mut shape = factory::create(ShapeKind::Rectangle, anchor, &StyleState::default());
        shape.geometry.resize(anchor, pointer, true);
        let ShapeGeometry::Rectangle(rect) = &shape.geometry else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.width, rect.height);
    }
}

#[test]
fn test_constrained_rectangle_keeps_anchor_as_far_corner() {
    let anchor = pos2(100.0, 100.0);
    let mut shape = factory::create(ShapeKind::Rectangle, anchor, &StyleState::default());
    // drag up and to the left, several times, as a real drag would
    for pointer in [pos2(90.0, 80.0), pos2(60.0, 70.0), pos2(40.0, 75.0)] {
        shape.geometry.resize(anchor, pointer, true);
    }
    let ShapeGeometry::Rectangle(rect) = &shape.geometry else {
        panic!("expected a rectangle");
    };
    assert_eq!(rect.width, 25.0);
    assert_eq!(rect.rect().max, anchor);
}

#[test]
fn test_constrained_ellipse_is_circle() {
    let center = pos2(50.0, 50.0);
    for pointer in [pos2(90.0, 60.0), pos2(0.0, 0.0), pos2(51.0, 200.0)] {
        let mut shape = factory::create(ShapeKind::Ellipse, center, &StyleState::default());
        shape.geometry.resize(center, pointer, true);
        let ShapeGeometry::Ellipse(ellipse) = &shape.geometry else {
            panic!("expected an ellipse");
        };
        assert_eq!(ellipse.radius_x, ellipse.radius_y);
        assert!(ellipse.is_circle());
    }
}

#[test]
fn test_unconstrained_ellipse_radii_are_independent() {
    let center = pos2(50.0, 50.0);
    let mut shape = factory::create(ShapeKind::Ellipse, center, &StyleState::default());
    shape.geometry.resize(center, pos2(20.0, 60.0), false);
    let ShapeGeometry::Ellipse(ellipse) = &shape.geometry else {
        panic!("expected an ellipse");
    };
    assert_eq!((ellipse.radius_x, ellipse.radius_y), (30.0, 10.0));
}

#[test]
fn test_text_font_size_has_floor() {
    let origin = pos2(10.0, 10.0);
    let mut shape = factory::create(ShapeKind::Text, origin, &StyleState::default());
    shape.geometry.resize(origin, pos2(14.0, 200.0), false);
    assert_eq!(shape.as_text().map(|t| t.font_size), Some(5.0));

    shape.geometry.resize(origin, pos2(70.0, 10.0), false);
    assert_eq!(shape.as_text().map(|t| t.font_size), Some(30.0));
}

#[test]
fn test_line_move_keeps_far_endpoint() {
    let mut shape = factory::create(ShapeKind::Line, pos2(0.0, 0.0), &StyleState::default());
    shape.geometry.resize(pos2(0.0, 0.0), pos2(100.0, 0.0), false);

    shape.geometry.move_to(pos2(90.0, 20.0), Vec2::ZERO);
    let ShapeGeometry::Line(line) = &shape.geometry else {
        panic!("expected a line");
    };
    assert_eq!(line.start, pos2(0.0, 0.0));
    assert_eq!(line.end, pos2(90.0, 20.0));

    shape.geometry.move_to(pos2(-10.0, 5.0), Vec2::ZERO);
    let ShapeGeometry::Line(line) = &shape.geometry else {
        panic!("expected a line");
    };
    assert_eq!(line.start, pos2(-10.0, 5.0));
    assert_eq!(line.end, pos2(90.0, 20.0));
}

#[test]
fn test_line_move_offset_is_zero() {
    let shape = factory::create(ShapeKind::Line, pos2(30.0, 30.0), &StyleState::default());
    assert_eq!(shape.geometry.move_offset(pos2(35.0, 32.0)), Vec2::ZERO);
}

#[test]
fn test_offset_move_keeps_grab_point() {
    for kind in [ShapeKind::Rectangle, ShapeKind::Ellipse, ShapeKind::Text] {
        let mut shape = factory::create(kind, pos2(20.0, 20.0), &StyleState::default());
        let grab = pos2(25.0, 24.0);
        let offset = shape.geometry.move_offset(grab);
        assert_eq!(offset, Vec2::new(5.0, 4.0));

        shape.geometry.move_to(pos2(105.0, 64.0), offset);
        assert_eq!(shape.geometry.reference_point(), pos2(100.0, 60.0));
    }
}

#[test]
fn test_unfilled_ellipse_is_white_with_colored_stroke() {
    let style = StyleState::default();
    let shape = factory::create(ShapeKind::Ellipse, pos2(50.0, 50.0), &style);
    assert_eq!(shape.style.fill, Color32::WHITE);
    assert_eq!(shape.style.stroke, Some(style.color()));
}

#[test]
fn test_unfilled_rectangle_is_transparent() {
    let style = StyleState::default();
    let shape = factory::create(ShapeKind::Rectangle, pos2(50.0, 50.0), &style);
    assert_eq!(shape.style.fill, Color32::TRANSPARENT);
    assert_eq!(shape.style.stroke, Some(style.color()));
}

#[test]
fn test_filled_shapes_use_current_color() {
    let style = StyleState::new(10, 20, 30, true);
    for kind in [ShapeKind::Rectangle, ShapeKind::Ellipse] {
        let shape = factory::create(kind, Pos2::ZERO, &style);
        assert_eq!(shape.style.fill, Color32::from_rgb(10, 20, 30));
        assert_eq!(shape.style.stroke, None);
    }
}

#[test]
fn test_new_text_has_placeholder() {
    let style = StyleState::default();
    let shape = factory::create(ShapeKind::Text, pos2(5.0, 5.0), &style);
    let text = shape.as_text().expect("text shape");
    assert_eq!(text.content, "Text");
    assert_eq!(text.origin, pos2(5.0, 5.0));
    assert_eq!(shape.style.fill, style.color());
    assert_eq!(shape.style.stroke, Some(style.color()));
}

#[test]
fn test_new_line_is_zero_length() {
    let shape = factory::create(ShapeKind::Line, pos2(7.0, 9.0), &StyleState::default());
    let ShapeGeometry::Line(line) = &shape.geometry else {
        panic!("expected a line");
    };
    assert_eq!(line.start, line.end);
    assert_eq!(line.length(), 0.0);
}
