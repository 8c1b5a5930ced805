use egui::{Pos2, Vec2};

use crate::shape::{Geometry, Shape, ShapeId};

/// Ordered collection of shapes plus the current selection.
///
/// Insertion order is z-order: later shapes are drawn on top and win
/// hit-tests.
#[derive(Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
    selected: Option<ShapeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Remove a shape. Removing an absent shape does nothing.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        Some(self.shapes.remove(index))
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn last_shape(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    pub fn last_shape_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.last_mut()
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Topmost shape under `pos`. Each shape is tested at
    /// `pos - translation(id)` so that animated shapes are picked where
    /// they are drawn.
    pub fn shape_at(&self, pos: Pos2, translation: impl Fn(ShapeId) -> Vec2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.geometry.hit_test(pos - translation(s.id())))
            .map(Shape::id)
    }

    /// Select `id`, replacing any previous selection. Unknown ids leave
    /// nothing selected.
    pub fn select(&mut self, id: ShapeId) {
        self.selected = self.get(id).map(Shape::id);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selected?;
        self.get_mut(id)
    }

    pub fn is_selected(&self, id: ShapeId) -> bool {
        self.selected == Some(id)
    }
}
