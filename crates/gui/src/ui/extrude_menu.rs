use egui::Ui;

use crate::interaction::{handle_event, EventOutcome, InputEvent};
use crate::state::AppState;
use crate::viewport::ViewportPanel;

/// Top toolbar: mode switch, extrude button, sketch and history actions
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        let sketch = state.mode.is_sketch();
        let label = format!("Mode: {}", state.mode.mode().label());
        if ui
            .selectable_label(sketch, label)
            .on_hover_text("Toggle mode (Tab)")
            .clicked()
        {
            state.toggle_mode();
        }

        ui.separator();

        ui.add_enabled_ui(sketch, |ui| {
            if ui
                .selectable_label(state.extrude_dialog.open, "Extrude")
                .clicked()
            {
                state.extrude_dialog.toggle();
            }
            let has_geometry = !state.sketch.points().is_empty();
            if ui
                .add_enabled(has_geometry, egui::Button::new("Clear sketch"))
                .clicked()
            {
                state.sketch.clear();
            }
        });

        ui.separator();

        if ui
            .add_enabled(state.scene.can_undo(), egui::Button::new("Undo"))
            .clicked()
        {
            state.scene.undo();
        }
        if ui
            .add_enabled(state.scene.can_redo(), egui::Button::new("Redo"))
            .clicked()
        {
            state.scene.redo();
        }

        // Height box may stay open after leaving sketch mode; keep it hidden
        if !sketch && state.extrude_dialog.open {
            state.extrude_dialog.close();
        }
    });
}

/// Extrude submenu: height text box and Confirm
pub fn submenu(ui: &mut Ui, state: &mut AppState, viewport: &ViewportPanel) {
    ui.horizontal(|ui| {
        ui.label("Height:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut state.extrude_dialog.height_text)
                .desired_width(80.0),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Confirm").clicked() || submitted {
            confirm(state, viewport);
        }
        if ui.button("Cancel").clicked() {
            state.extrude_dialog.close();
        }

        let segments = state.sketch.segments().len();
        ui.weak(format!("{segments} segments"));
    });
}

fn confirm(state: &mut AppState, viewport: &ViewportPanel) {
    let height = match state.extrude_dialog.parse_height() {
        Ok(h) => h,
        Err(e) => {
            tracing::warn!("Height input rejected: {e}");
            state.last_error = Some(e.to_string());
            return;
        }
    };
    let ctx = viewport.view_context(state);
    if let EventOutcome::Extruded(id) =
        handle_event(state, &ctx, InputEvent::CommitExtrusion { height })
    {
        tracing::info!("Extrusion {id} added");
    }
}
