mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::interaction`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use extrude_gui_lib::interaction;
pub use extrude_gui_lib::state;

use std::path::PathBuf;

use app::ExtrudeApp;
use crate::state::AppSettings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "extrude_gui=info,extrude_gui_lib=info".into()),
        )
        .init();

    let settings = match parse_settings_arg() {
        Some(path) => AppSettings::load_from(&path).unwrap_or_else(|| {
            tracing::warn!("Could not load settings from {}, using defaults", path.display());
            AppSettings::default()
        }),
        None => AppSettings::load_or_init(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sketch & Extrude")
            .with_inner_size([1600.0, 1000.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "extrude-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(ExtrudeApp::new(cc, settings)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// `--settings <path>` overrides the platform settings file
fn parse_settings_arg() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| a == "--settings")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from)
}
