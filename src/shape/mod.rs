use egui::{Color32, Pos2, Rect, Vec2};
use std::fmt;
use uuid::Uuid;

pub mod common;
mod ellipse;
mod line;
mod rect;
mod text;

pub use ellipse::EllipseShape;
pub use line::LineShape;
pub use rect::RectShape;
pub use text::TextShape;

/// Stable identity of a shape in the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(Uuid);

impl ShapeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kinds of shape the toolbar can create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Ellipse,
    Text,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "line",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Text => "text",
        }
    }
}

/// Geometry operations every shape kind supports
pub trait Geometry {
    fn kind(&self) -> ShapeKind;

    /// The anchor used for offset-based moves and animation targets
    fn reference_point(&self) -> Pos2;

    /// Axis-aligned bounds of the geometry, without stroke
    fn bounds(&self) -> Rect;

    /// Test if `pos` lands on the shape
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Reshape from the gesture anchor towards `pointer`.
    /// `constrained` forces squares, circles and axis-locked lines.
    fn resize(&mut self, anchor: Pos2, pointer: Pos2, constrained: bool);

    /// Follow the pointer during a drag, keeping `offset` between the
    /// pointer and the reference point.
    fn move_to(&mut self, pointer: Pos2, offset: Vec2);

    /// Offset to keep while dragging from `pointer`
    fn move_offset(&self, pointer: Pos2) -> Vec2 {
        pointer - self.reference_point()
    }
}

/// Per-kind geometry payload
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeGeometry {
    Line(LineShape),
    Rectangle(RectShape),
    Ellipse(EllipseShape),
    Text(TextShape),
}

impl Geometry for ShapeGeometry {
    fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Line(g) => g.kind(),
            ShapeGeometry::Rectangle(g) => g.kind(),
            ShapeGeometry::Ellipse(g) => g.kind(),
            ShapeGeometry::Text(g) => g.kind(),
        }
    }

    fn reference_point(&self) -> Pos2 {
        match self {
            ShapeGeometry::Line(g) => g.reference_point(),
            ShapeGeometry::Rectangle(g) => g.reference_point(),
            ShapeGeometry::Ellipse(g) => g.reference_point(),
            ShapeGeometry::Text(g) => g.reference_point(),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            ShapeGeometry::Line(g) => g.bounds(),
            ShapeGeometry::Rectangle(g) => g.bounds(),
            ShapeGeometry::Ellipse(g) => g.bounds(),
            ShapeGeometry::Text(g) => g.bounds(),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            ShapeGeometry::Line(g) => g.hit_test(pos),
            ShapeGeometry::Rectangle(g) => g.hit_test(pos),
            ShapeGeometry::Ellipse(g) => g.hit_test(pos),
            ShapeGeometry::Text(g) => g.hit_test(pos),
        }
    }

    fn resize(&mut self, anchor: Pos2, pointer: Pos2, constrained: bool) {
        match self {
            ShapeGeometry::Line(g) => g.resize(anchor, pointer, constrained),
            ShapeGeometry::Rectangle(g) => g.resize(anchor, pointer, constrained),
            ShapeGeometry::Ellipse(g) => g.resize(anchor, pointer, constrained),
            ShapeGeometry::Text(g) => g.resize(anchor, pointer, constrained),
        }
    }

    fn move_to(&mut self, pointer: Pos2, offset: Vec2) {
        match self {
            ShapeGeometry::Line(g) => g.move_to(pointer, offset),
            ShapeGeometry::Rectangle(g) => g.move_to(pointer, offset),
            ShapeGeometry::Ellipse(g) => g.move_to(pointer, offset),
            ShapeGeometry::Text(g) => g.move_to(pointer, offset),
        }
    }

    fn move_offset(&self, pointer: Pos2) -> Vec2 {
        match self {
            ShapeGeometry::Line(g) => g.move_offset(pointer),
            ShapeGeometry::Rectangle(g) => g.move_offset(pointer),
            ShapeGeometry::Ellipse(g) => g.move_offset(pointer),
            ShapeGeometry::Text(g) => g.move_offset(pointer),
        }
    }
}

/// Paint attributes fixed when the shape is created
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    /// Outline color, `None` for no outline
    pub stroke: Option<Color32>,
    pub stroke_width: f32,
    /// Interior color, `Color32::TRANSPARENT` when unfilled
    pub fill: Color32,
}

/// A drawable on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    pub geometry: ShapeGeometry,
    pub style: ShapeStyle,
}

impl Shape {
    pub fn new(geometry: ShapeGeometry, style: ShapeStyle) -> Self {
        Self { id: ShapeId::new(), geometry, style }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    pub fn as_text(&self) -> Option<&TextShape> {
        match &self.geometry {
            ShapeGeometry::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextShape> {
        match &mut self.geometry {
            ShapeGeometry::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Factory for new shapes
pub mod factory {
    use super::*;
    use crate::style::StyleState;

    /// Create a shape of `kind` at `point`, painted with the current style.
    /// Unfilled ellipses get a white interior, unfilled rectangles none.
    pub fn create(kind: ShapeKind, point: Pos2, style: &StyleState) -> Shape {
        let color = style.color();
        match kind {
            ShapeKind::Line => Shape::new(
                ShapeGeometry::Line(LineShape::at(point)),
                ShapeStyle {
                    stroke: Some(color),
                    stroke_width: common::LINE_STROKE_WIDTH,
                    fill: Color32::TRANSPARENT,
                },
            ),
            ShapeKind::Rectangle => Shape::new(
                ShapeGeometry::Rectangle(RectShape::at(point)),
                area_style(style, Color32::TRANSPARENT),
            ),
            ShapeKind::Ellipse => Shape::new(
                ShapeGeometry::Ellipse(EllipseShape::at(point)),
                area_style(style, Color32::WHITE),
            ),
            ShapeKind::Text => Shape::new(
                ShapeGeometry::Text(TextShape::at(point)),
                ShapeStyle {
                    stroke: Some(color),
                    stroke_width: common::OUTLINE_STROKE_WIDTH,
                    fill: color,
                },
            ),
        }
    }

    fn area_style(style: &StyleState, unfilled: Color32) -> ShapeStyle {
        if style.fill_enabled() {
            ShapeStyle {
                stroke: None,
                stroke_width: common::OUTLINE_STROKE_WIDTH,
                fill: style.color(),
            }
        } else {
            ShapeStyle {
                stroke: Some(style.color()),
                stroke_width: common::OUTLINE_STROKE_WIDTH,
                fill: unfilled,
            }
        }
    }
}
