//! The interaction state machine of the editor.
//!
//! `EditorState` owns the scene, the style settings and the animation
//! recorder, and routes every pointer and keyboard event to the right
//! engine depending on the current [`Mode`], the drawing flag and the
//! selection.
//!
//! # Gestures
//!
//! ```text
//!                 press (drawing mode)        release
//!   ┌────────┐ ──────────────────────► ┌─────────┐ ───────► Select mode,
//!   │        │                         │ Drawing │          new shape selected
//!   │  Idle  │ ◄──── drag: resize ──── │         │
//!   │        │                         └─────────┘
//!   │        │  press on shape (Select)  ┌──────────┐
//!   │        │ ────────────────────────► │ Dragging │ ── drag: move
//!   │        │ ◄──────── release ─────── │          │
//!   └────────┘                           └──────────┘
//!        │  press (Animate, shape armed)
//!        └──────────────────────────────► record translation, Select mode
//! ```
//!
//! Shape creation is gated on the mode alone. The toolbar indicator is
//! tracked apart from the canvas selection and never counts as one.
use egui::{CursorIcon, Key, Pos2, Vec2};
use log::{debug, info};

use super::InteractionSession;
use crate::animation::Animator;
use crate::error::{EditorError, EditorResult};
use crate::scene::Scene;
use crate::shape::{Geometry, Shape, ShapeId, ShapeKind, factory};
use crate::style::StyleState;
use crate::tools::Mode;

#[derive(Debug)]
pub struct EditorState {
    mode: Mode,
    /// Tool highlighted in the toolbar
    active_tool: Mode,
    cursor: CursorIcon,
    scene: Scene,
    style: StyleState,
    session: InteractionSession,
    animator: Animator,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(StyleState::default())
    }
}

impl EditorState {
    pub fn new(style: StyleState) -> Self {
        Self {
            mode: Mode::Select,
            active_tool: Mode::Select,
            cursor: CursorIcon::Default,
            scene: Scene::new(),
            style,
            session: InteractionSession::default(),
            animator: Animator::new(),
        }
    }

    /// Toolbar button handler.
    ///
    /// Entering Animate arms the selected shape. Leaving Animate before a
    /// target was given drops the pending animation.
    pub fn set_mode(&mut self, mode: Mode, now: f64) {
        if self.mode == Mode::Animate && mode != Mode::Animate {
            if let Some(id) = self.animator.disarm() {
                debug!("left animate mode, dropped pending animation for {}", id);
            }
        }

        debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.active_tool = mode;

        match mode {
            Mode::Select => self.cursor = CursorIcon::Default,
            Mode::Animate => {}
            _ => self.cursor = CursorIcon::Crosshair,
        }

        if mode == Mode::Animate {
            if let Some(id) = self.scene.selected() {
                self.animator.arm(id, now);
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2, now: f64) {
        self.session.begin_gesture(pos);

        let result = match self.mode.shape_kind() {
            Some(kind) => {
                self.begin_shape(kind, pos);
                Ok(())
            }
            None if self.mode == Mode::Select => self.grab_shape_at(pos),
            None => self.capture_animation(pos, now),
        };
        log_ignored(result);
    }

    /// Pointer drag. Resizes the shape being drawn, or moves the shape
    /// grabbed by this gesture.
    pub fn pointer_move(&mut self, pos: Pos2, constrained: bool) {
        if self.session.drawing {
            let anchor = self.session.press_origin.unwrap_or(pos);
            if let Some(shape) = self.scene.last_shape_mut() {
                shape.geometry.resize(anchor, pos, constrained);
            }
            return;
        }

        if let Some(id) = self.session.dragging {
            log_ignored(self.drag_shape(id, pos));
        }
    }

    pub fn pointer_up(&mut self, now: f64) {
        if self.session.drawing {
            self.session.drawing = false;
            self.set_mode(Mode::Select, now);
            if let Some(id) = self.scene.last_shape().map(Shape::id) {
                self.scene.select(id);
            }
        }
        self.session.end_gesture();
    }

    pub fn key_pressed(&mut self, key: Key, now: f64) {
        match key {
            Key::Escape => {
                self.animator.disarm();
                self.deselect();
                self.set_mode(Mode::Select, now);
            }
            Key::Delete => log_ignored(self.delete_selected().map(|_| ())),
            Key::Backspace => log_ignored(self.backspace()),
            Key::Space => self.animator.replay(now),
            _ => {}
        }
    }

    /// Typed characters go to the selected text shape. Spaces and control
    /// characters are left to `key_pressed`.
    pub fn text_typed(&mut self, text: &str) {
        log_ignored(self.append_text(text));
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: f64) {
        self.animator.tick(now);
    }

    pub fn select(&mut self, id: ShapeId) {
        self.scene.select(id);
    }

    /// Clear the selection. Does nothing if nothing is selected.
    pub fn deselect(&mut self) {
        self.scene.deselect();
    }

    /// Remove the selected shape from the scene
    pub fn delete_selected(&mut self) -> EditorResult<Shape> {
        let id = self.scene.selected().ok_or(EditorError::NoSelection)?;
        let shape = self.scene.remove_shape(id).ok_or(EditorError::ShapeNotFound(id))?;
        self.animator.forget(id);
        if self.session.dragging == Some(id) {
            self.session.dragging = None;
        }
        info!("deleted {} {}", shape.kind().name(), id);
        Ok(shape)
    }

    fn begin_shape(&mut self, kind: ShapeKind, pos: Pos2) {
        let shape = factory::create(kind, pos, &self.style);
        let id = self.scene.add_shape(shape);
        self.session.drawing = true;
        debug!("drawing {} {} at {:?}", kind.name(), id, pos);
    }

    fn grab_shape_at(&mut self, pos: Pos2) -> EditorResult<()> {
        let Some(id) = self.shape_at(pos) else {
            return Ok(());
        };

        self.scene.select(id);
        let local = pos - self.animator.translation_of(id);
        let shape = self.scene.get(id).ok_or(EditorError::ShapeNotFound(id))?;
        self.session.offset = shape.geometry.move_offset(local);
        self.session.dragging = Some(id);
        Ok(())
    }

    fn drag_shape(&mut self, id: ShapeId, pos: Pos2) -> EditorResult<()> {
        if !self.scene.is_selected(id) {
            return Err(EditorError::NoSelection);
        }

        // geometry lives in untranslated coordinates
        let local = pos - self.animator.translation_of(id);
        let offset = self.session.offset;
        let shape = self.scene.get_mut(id).ok_or(EditorError::ShapeNotFound(id))?;
        shape.geometry.move_to(local, offset);
        Ok(())
    }

    fn capture_animation(&mut self, pos: Pos2, now: f64) -> EditorResult<()> {
        let Some(id) = self.animator.armed() else {
            // Nothing armed yet: a press on a shape picks it as the target.
            if let Some(id) = self.shape_at(pos) {
                self.scene.select(id);
                self.animator.arm(id, now);
            }
            return Ok(());
        };

        let shape = self.scene.get(id).ok_or(EditorError::ShapeNotFound(id))?;
        let to = pos - shape.geometry.reference_point();
        self.animator.capture(to).ok_or(EditorError::NothingArmed)?;
        self.set_mode(Mode::Select, now);
        Ok(())
    }

    fn backspace(&mut self) -> EditorResult<()> {
        let id = self.scene.selected().ok_or(EditorError::NoSelection)?;
        if let Some(text) = self.scene.get_mut(id).and_then(Shape::as_text_mut) {
            text.pop_char();
            return Ok(());
        }
        self.delete_selected().map(|_| ())
    }

    fn append_text(&mut self, text: &str) -> EditorResult<()> {
        let shape = self.scene.selected_shape_mut().ok_or(EditorError::NoSelection)?;
        let id = shape.id();
        let kind = shape.kind().name();
        let target = shape.as_text_mut().ok_or(EditorError::NotText { id, kind })?;

        let typed: String = text.chars().filter(|c| !c.is_control() && *c != ' ').collect();
        target.push_str(&typed);
        Ok(())
    }

    fn shape_at(&self, pos: Pos2) -> Option<ShapeId> {
        self.scene.shape_at(pos, |id| self.animator.translation_of(id))
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn active_tool(&self) -> Mode {
        self.active_tool
    }

    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut StyleState {
        &mut self.style
    }

    pub fn session(&self) -> &InteractionSession {
        &self.session
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn is_drawing(&self) -> bool {
        self.session.drawing
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.scene.selected()
    }

    /// Translation currently applied to a shape by animation playback
    pub fn shape_translation(&self, id: ShapeId) -> Vec2 {
        self.animator.translation_of(id)
    }

    pub fn shape_opacity(&self, id: ShapeId, now: f64) -> f32 {
        self.animator.opacity_of(id, now)
    }

    pub fn needs_repaint(&self) -> bool {
        self.animator.is_active()
    }
}

fn log_ignored(result: EditorResult<()>) {
    if let Err(err) = result {
        debug!("event ignored: {}", err);
    }
}
