use crate::ShapeApp;

pub fn central_panel(app: &mut ShapeApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;
            let now = ctx.input(|i| i.time);

            app.handle_input(ctx, canvas_rect, now);

            if response.hovered() {
                ctx.set_cursor_icon(app.editor().cursor());
            }

            app.renderer().render(&painter, canvas_rect, app.editor(), now);

            if app.editor().needs_repaint() {
                ctx.request_repaint();
            }
        });
}
