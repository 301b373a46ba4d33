use egui::Ui;

use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.weak(format!("Solids: {}", state.scene.len()));

        ui.separator();

        if state.mode.is_sketch() {
            let points = state.sketch.points().len();
            let segments = state.sketch.segments().len();
            let hint = if state.sketch.is_drawing() {
                "release to place the line end"
            } else {
                "drag to draw a line"
            };
            ui.colored_label(
                egui::Color32::YELLOW,
                format!("Sketch: {points} points, {segments} segments, {hint}"),
            );
            ui.separator();
            ui.weak(format!("Zoom {:.1}  W/S or wheel", state.mode.sketch_zoom()));
        } else {
            ui.weak("Navigation: WASD to move, right-drag to look, Tab to sketch");
        }

        if let Some(err) = &state.last_error {
            ui.separator();
            ui.colored_label(egui::Color32::from_rgb(255, 110, 90), err);
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak(concat!("extrude-gui v", env!("CARGO_PKG_VERSION")));
        });
    });
}
