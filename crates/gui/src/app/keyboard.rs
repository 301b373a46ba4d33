//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;
use crate::viewport::camera::MoveDirection;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    // Don't handle shortcuts when a text field is focused
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }

    let moved = ctx.input(|i| {
        // Tab: toggle navigation / sketch
        if i.key_pressed(egui::Key::Tab) {
            state.toggle_mode();
        }
        // Ctrl+Z: undo
        if i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift {
            state.scene.undo();
        }
        // Ctrl+Shift+Z or Ctrl+Y: redo
        if (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
            || (i.modifiers.command && i.key_pressed(egui::Key::Y))
        {
            state.scene.redo();
        }
        // Escape: cancel the line being dragged
        if i.key_pressed(egui::Key::Escape) {
            state.sketch.cancel_line();
        }
        if i.modifiers.command {
            return false;
        }

        if state.mode.is_sketch() {
            // W / + zoom in, S / - zoom out
            if i.key_pressed(egui::Key::W)
                || i.key_pressed(egui::Key::Plus)
                || i.key_pressed(egui::Key::Equals)
            {
                state.mode.zoom_in();
            }
            if i.key_pressed(egui::Key::S) || i.key_pressed(egui::Key::Minus) {
                state.mode.zoom_out();
            }
            false
        } else {
            // WASD held: fly
            let held = [
                (egui::Key::W, MoveDirection::Forward),
                (egui::Key::S, MoveDirection::Back),
                (egui::Key::A, MoveDirection::Left),
                (egui::Key::D, MoveDirection::Right),
            ];
            let mut moved = false;
            for (key, dir) in held {
                if i.key_down(key) {
                    moved |= state.mode.move_camera(dir);
                }
            }
            moved
        }
    });

    // Keep frames coming while a movement key is held
    if moved {
        ctx.request_repaint();
    }
}
