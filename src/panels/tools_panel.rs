use egui::{Color32, Slider};

use crate::ShapeApp;
use crate::components::ToolButton;
use crate::tools::Mode;

pub fn tools_panel(app: &mut ShapeApp, ctx: &egui::Context) {
    let now = ctx.input(|i| i.time);

    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.editor().active_tool();
            let tint = app.editor().style().color();
            egui::Grid::new("tool_grid").spacing([6.0, 6.0]).show(ui, |ui| {
                for (i, mode) in Mode::ALL.into_iter().enumerate() {
                    if ToolButton::new(mode, active_tool == mode).tinted(tint).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", mode.name());
                        app.editor_mut().set_mode(mode, now);
                    }
                    if i % 2 == 1 {
                        ui.end_row();
                    }
                }
            });

            ui.separator();
            ui.label("Color");

            let style = app.editor_mut().style_mut();
            let (mut red, mut green, mut blue) = style.channels();
            let mut changed = false;
            changed |= ui.add(Slider::new(&mut red, 0..=255).text("R")).changed();
            changed |= ui.add(Slider::new(&mut green, 0..=255).text("G")).changed();
            changed |= ui.add(Slider::new(&mut blue, 0..=255).text("B")).changed();
            if changed {
                style.set_channels(red, green, blue);
            }

            let mut filled = style.fill_enabled();
            if ui.checkbox(&mut filled, "Filled").changed() {
                style.set_fill_enabled(filled);
            }

            ui.separator();
            color_preview(ui, style.color(), style.fill_enabled());

            ui.separator();
            ui.small("Shift: square / circle / straight");
            ui.small("Space: play animations");
            ui.small("Esc: deselect");
        });
}

/// Swatch showing what the next shape will look like
fn color_preview(ui: &mut egui::Ui, color: Color32, filled: bool) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(60.0, 30.0), egui::Sense::hover());
    let painter = ui.painter();
    if filled {
        painter.rect_filled(rect, 2.0, color);
    } else {
        painter.rect_stroke(rect, 2.0, egui::Stroke::new(1.0, color));
    }
}
