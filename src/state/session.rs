use egui::{Pos2, Vec2};

use crate::shape::ShapeId;

/// Transient state of one press-drag-release gesture.
///
/// Everything except `offset` is reset when the gesture ends. The offset
/// belongs to the current selection and is replaced on the next grab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionSession {
    /// A shape is being created and follows the pointer
    pub drawing: bool,
    /// Where the pointer went down. Anchors resizes.
    pub press_origin: Option<Pos2>,
    /// The shape being dragged by this gesture
    pub dragging: Option<ShapeId>,
    /// Pointer minus reference point, captured when the shape was grabbed
    pub offset: Vec2,
}

impl InteractionSession {
    pub fn begin_gesture(&mut self, pos: Pos2) {
        self.press_origin = Some(pos);
        self.dragging = None;
    }

    pub fn end_gesture(&mut self) {
        self.drawing = false;
        self.press_origin = None;
        self.dragging = None;
    }
}
