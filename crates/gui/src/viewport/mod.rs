//! 3D viewport panel: pointer input and painter drawing

mod overlays;
pub use extrude_gui_lib::viewport::{camera, unproject};

use egui::Ui;

use crate::interaction::{handle_event, EventOutcome, InputEvent};
use crate::state::AppState;
use unproject::{ViewContext, Viewport};

/// Wheel scroll (points) per zoom step
const SCROLL_PER_NOTCH: f32 = 50.0;

/// Viewport panel. Remembers the last laid-out rectangle so that
/// toolbar actions can build a view context outside of `show`.
pub struct ViewportPanel {
    viewport: Viewport,
}

impl ViewportPanel {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(1.0, 1.0),
        }
    }

    /// View as of the last frame
    pub fn view_context(&self, state: &AppState) -> ViewContext {
        state.mode.view_context(self.viewport)
    }

    pub fn show(&mut self, ui: &mut Ui, state: &mut AppState) {
        let (rect, response) =
            ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
        self.viewport = Viewport {
            x: rect.min.x as f64,
            y: rect.min.y as f64,
            width: rect.width() as f64,
            height: rect.height() as f64,
        };

        if state.mode.is_sketch() {
            self.handle_sketch_input(ui, &response, state);
        } else if response.dragged_by(egui::PointerButton::Secondary) {
            // Mouse look
            let delta = response.drag_delta();
            state.mode.look(delta.x as f64, delta.y as f64);
        }

        // ── Scroll zoom (sketch view only) ─────────────
        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.1 {
                state.mode.scroll((scroll / SCROLL_PER_NOTCH) as f64);
            }
        }

        if !ui.is_rect_visible(rect) {
            return;
        }

        // ── Drawing ─────────────────────────────────────
        let ctx = self.view_context(state);
        let painter = ui.painter_at(rect);
        overlays::draw_grid_and_axes(&painter, &ctx);
        overlays::draw_solids(&painter, &ctx, &state.scene);
        if state.mode.is_sketch() {
            overlays::draw_sketch(&painter, &ctx, &state.sketch.get_geometry());
        }
        overlays::draw_mode_banner(
            &painter,
            rect,
            &format!("{} mode", state.mode.mode().label()),
        );
    }

    /// Map primary-button press / move / release onto sketch events
    fn handle_sketch_input(&self, ui: &Ui, response: &egui::Response, state: &mut AppState) {
        let ctx = self.view_context(state);
        let (pressed, released, pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        let Some(pos) = pos else {
            return;
        };
        let (x, y) = (pos.x as f64, pos.y as f64);

        let mut events = Vec::new();
        if pressed && response.hovered() {
            events.push(InputEvent::PointerDown { x, y });
        }
        if state.sketch.is_drawing() || pressed {
            if released {
                events.push(InputEvent::PointerUp { x, y });
            } else if !pressed {
                events.push(InputEvent::PointerMove { x, y });
            }
        }

        for event in events {
            let outcome = handle_event(state, &ctx, event);
            if !matches!(outcome, EventOutcome::Updated | EventOutcome::Ignored) {
                tracing::debug!("{event:?} -> {}", outcome.label());
            }
        }
    }
}
