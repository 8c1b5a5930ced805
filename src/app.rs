use egui::Rect;

use crate::config::AppSettings;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorState;

pub struct ShapeApp {
    editor: EditorState,
    renderer: Renderer,
    input: InputHandler,
}

impl Default for ShapeApp {
    fn default() -> Self {
        Self::with_settings(AppSettings::default())
    }
}

impl ShapeApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_settings(AppSettings::load(cc.storage))
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            editor: EditorState::new(settings.style),
            renderer: Renderer::new(),
            input: InputHandler::new(Rect::NOTHING),
        }
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorState {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Route this frame's canvas input into the editor, then advance
    /// animations.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect, now: f64) {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            log::trace!("input: {:?}", event);
            event.apply(&mut self.editor, now);
        }
        self.editor.tick(now);
    }

    pub fn settings(&self) -> AppSettings {
        AppSettings {
            style: self.editor.style().clone(),
        }
    }
}

impl eframe::App for ShapeApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.settings().save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleState;

    #[test]
    fn test_settings_seed_the_editor_style() {
        let style = StyleState::new(1, 2, 3, true);
        let app = ShapeApp::with_settings(AppSettings { style: style.clone() });
        assert_eq!(app.editor().style(), &style);
        assert_eq!(app.settings().style, style);
    }
}
