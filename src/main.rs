#![warn(clippy::all, rust_2018_idioms)]

// When compiling natively:
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title("Shape Animator"),
        ..Default::default()
    };
    eframe::run_native(
        "shape_animator",
        native_options,
        Box::new(|cc| Ok(Box::new(shape_animator::ShapeApp::new(cc)))),
    )
}
