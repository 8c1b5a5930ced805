use eframe::egui;

use crate::tools::Mode;

const BUTTON_SIZE: f32 = 36.0;
const INDICATOR_COLOR: egui::Color32 = egui::Color32::from_rgb(33, 150, 243);

/// Toolbar button for one mode. The border marks the active tool.
pub struct ToolButton {
    pub mode: Mode,
    pub active: bool,
    /// Icon color for drawing modes, previewing the next shape
    pub tint: egui::Color32,
}

impl ToolButton {
    pub fn new(mode: Mode, active: bool) -> Self {
        Self { mode, active, tint: egui::Color32::WHITE }
    }

    pub fn tinted(mut self, color: egui::Color32) -> Self {
        self.tint = color;
        self
    }

    /// Color the icon is painted with
    pub fn icon_color(&self) -> egui::Color32 {
        if self.mode.is_drawing_mode() { self.tint } else { egui::Color32::WHITE }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(BUTTON_SIZE, BUTTON_SIZE), egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(45)
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);

            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.mode.icon(),
                egui::FontId::proportional(20.0),
                self.icon_color(),
            );

            if self.active {
                ui.painter().rect_stroke(rect, 4.0, egui::Stroke::new(2.0, INDICATOR_COLOR));
            }
        }

        response.on_hover_text(self.mode.name())
    }
}
