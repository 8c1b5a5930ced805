// src/renderer.rs
use eframe::egui::{self, Align2, Color32, FontId, Painter, Rect, Stroke, Vec2};

use crate::shape::{Geometry, Shape, ShapeGeometry};
use crate::state::EditorState;

/// Segments used to approximate an ellipse outline
const ELLIPSE_SEGMENTS: usize = 64;

#[derive(Debug)]
pub struct Renderer {
    background: Color32,
    selection_stroke: Stroke,
    /// Gap between a shape's bounds and its selection border
    selection_padding: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            selection_stroke: Stroke::new(2.0, Color32::from_rgb(33, 150, 243)),
            selection_padding: 4.0,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the canvas
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with
    ///     rect (egui::Rect): The canvas rectangle in screen space
    ///     state (EditorState): The editor whose scene is drawn
    ///     now (f64): Host time, for the fade pulse
    pub fn render(&self, painter: &Painter, rect: Rect, state: &EditorState, now: f64) {
        painter.rect_filled(rect, 0.0, self.background);

        let painter = painter.with_clip_rect(rect);
        for shape in state.scene().shapes() {
            let offset = rect.min.to_vec2() + state.shape_translation(shape.id());
            let opacity = state.shape_opacity(shape.id(), now);
            self.draw_shape(&painter, shape, offset, opacity);

            if state.scene().is_selected(shape.id()) {
                let bounds = shape.geometry.bounds().translate(offset);
                painter.rect_stroke(bounds.expand(self.selection_padding), 2.0, self.selection_stroke);
            }
        }
    }

    fn draw_shape(&self, painter: &Painter, shape: &Shape, offset: Vec2, opacity: f32) {
        let fill = shape.style.fill.gamma_multiply(opacity);
        let stroke = match shape.style.stroke {
            Some(color) => Stroke::new(shape.style.stroke_width, color.gamma_multiply(opacity)),
            None => Stroke::NONE,
        };

        match &shape.geometry {
            ShapeGeometry::Line(line) => {
                painter.line_segment([line.start + offset, line.end + offset], stroke);
            }
            ShapeGeometry::Rectangle(r) => {
                let rect = r.rect().translate(offset);
                painter.rect_filled(rect, 0.0, fill);
                painter.rect_stroke(rect, 0.0, stroke);
            }
            ShapeGeometry::Ellipse(ellipse) => {
                let points = ellipse
                    .outline(ELLIPSE_SEGMENTS)
                    .into_iter()
                    .map(|p| p + offset)
                    .collect();
                painter.add(egui::Shape::convex_polygon(points, fill, stroke));
            }
            ShapeGeometry::Text(text) => {
                let font = FontId::proportional(text.font_size);
                let origin = text.origin + offset;
                // egui glyphs have no outline, so the stroke is painted as
                // copies of the run nudged around the fill
                if stroke.width > 0.0 {
                    for nudge in outline_nudges(stroke.width) {
                        painter.text(origin + nudge, Align2::LEFT_BOTTOM, &text.content, font.clone(), stroke.color);
                    }
                }
                painter.text(origin, Align2::LEFT_BOTTOM, &text.content, font, fill);
            }
        }
    }
}

/// Offsets that surround a glyph run with a band `width` wide
fn outline_nudges(width: f32) -> [Vec2; 4] {
    let d = width / 2.0;
    [Vec2::new(-d, -d), Vec2::new(d, -d), Vec2::new(-d, d), Vec2::new(d, d)]
}
