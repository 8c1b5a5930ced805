use egui::{Context, Key, PointerButton, Pos2, Rect};

use crate::state::EditorState;

/// Keys the editor reacts to. Everything else arrives as text.
const COMMAND_KEYS: [Key; 4] = [Key::Escape, Key::Delete, Key::Backspace, Key::Space];

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position relative to the canvas' top-left corner
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Canvas-level input, already stripped of everything the editor ignores
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed on the canvas
    PointerDown { location: InputLocation },
    /// Pointer moved while the primary button is held
    PointerMove {
        location: InputLocation,
        /// Shift was held: square, circle or axis-locked resize
        constrained: bool,
    },
    /// Primary button was released after a canvas press
    PointerUp { location: InputLocation },
    /// One of the command keys was pressed
    KeyDown { key: Key },
    /// Characters were typed
    Text(String),
}

impl InputEvent {
    /// Feed this event to the editor
    pub fn apply(&self, state: &mut EditorState, now: f64) {
        match self {
            InputEvent::PointerDown { location } => state.pointer_down(location.position, now),
            InputEvent::PointerMove { location, constrained } => {
                state.pointer_move(location.position, *constrained)
            }
            InputEvent::PointerUp { .. } => state.pointer_up(now),
            InputEvent::KeyDown { key } => state.key_pressed(*key, now),
            InputEvent::Text(text) => state.text_typed(text),
        }
    }
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    /// Shift state seen on the previous frame
    last_shift: bool,
    canvas_rect: Rect,
    /// A press started on the canvas and has not been released yet
    captured: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            last_shift: false,
            canvas_rect,
            captured: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let keyboard_free = !ctx.wants_keyboard_input();

        ctx.input(|input| {
            let pos = input.pointer.interact_pos();
            let shift = input.modifiers.shift;
            let mut pressed_here = false;

            if input.pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos {
                    let location = self.make_location(pos);
                    if location.is_in_canvas {
                        self.captured = true;
                        pressed_here = true;
                        events.push(InputEvent::PointerDown { location });
                    }
                }
            }

            // The press frame is never a drag, wherever the pointer was before.
            if self.captured && !pressed_here && input.pointer.button_down(PointerButton::Primary) {
                if let Some(pos) = pos {
                    if Some(pos) != self.last_pointer_pos || shift != self.last_shift {
                        events.push(InputEvent::PointerMove {
                            location: self.make_location(pos),
                            constrained: shift,
                        });
                    }
                }
            }

            if self.captured && input.pointer.button_released(PointerButton::Primary) {
                let pos = pos.or(self.last_pointer_pos).unwrap_or(self.canvas_rect.min);
                events.push(InputEvent::PointerUp {
                    location: self.make_location(pos),
                });
                self.captured = false;
            }

            self.last_pointer_pos = pos;
            self.last_shift = shift;

            if !keyboard_free {
                return;
            }
            for event in &input.events {
                match event {
                    egui::Event::Key { key, pressed: true, .. } if COMMAND_KEYS.contains(key) => {
                        events.push(InputEvent::KeyDown { key: *key });
                    }
                    egui::Event::Text(text) => events.push(InputEvent::Text(text.clone())),
                    _ => {}
                }
            }
        });

        events
    }
}
