//! Main application module

mod keyboard;
mod styles;

use eframe::egui;

use crate::state::{AppSettings, AppState};
use crate::ui::{extrude_menu, status_bar};
use crate::viewport::ViewportPanel;

/// Main application
pub struct ExtrudeApp {
    state: AppState,
    viewport: ViewportPanel,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl ExtrudeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: AppSettings) -> Self {
        let state = AppState::new(settings);

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        let last_font_size = state.settings.ui.font_size;
        tracing::info!(
            "Started in {} mode (snap distance {})",
            state.mode.mode().label(),
            state.sketch.snap_distance()
        );

        Self {
            state,
            viewport: ViewportPanel::new(),
            last_font_size,
        }
    }
}

impl eframe::App for ExtrudeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // ── Toolbar ───────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                extrude_menu::toolbar(ui, &mut self.state);
            });

        // ── Extrude submenu (sketch mode only) ───────────────
        if self.state.mode.is_sketch() && self.state.extrude_dialog.open {
            egui::TopBottomPanel::top("extrude_menu")
                .frame(
                    egui::Frame::side_top_panel(&ctx.style())
                        .inner_margin(egui::Margin::symmetric(8, 3))
                        .fill(egui::Color32::from_rgb(45, 45, 55)),
                )
                .show(ctx, |ui| {
                    extrude_menu::submenu(ui, &mut self.state, &self.viewport);
                });
        }

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style()).inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Central panel: 3D viewport ───────────────────────
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_rgb(20, 20, 24)))
            .show(ctx, |ui| {
                self.viewport.show(ui, &mut self.state);
            });
    }
}
