pub mod extrude_dialog;
pub mod mode;
pub mod scene;
pub mod settings;
pub mod sketch;

pub use extrude_dialog::{ExtrudeDialog, HeightInputError};
pub use mode::{InteractionMode, ModeState};
pub use scene::{SceneSolid, SceneState};
pub use settings::AppSettings;
pub use sketch::SketchState;

/// Combined application state
pub struct AppState {
    pub sketch: SketchState,
    pub mode: ModeState,
    pub scene: SceneState,
    pub settings: AppSettings,
    /// Extrude submenu state
    pub extrude_dialog: ExtrudeDialog,
    /// Last user-facing error, shown in the status bar
    pub last_error: Option<String>,
}

impl AppState {
    pub fn new(settings: AppSettings) -> Self {
        let settings = settings.sanitized();
        Self {
            sketch: SketchState::new(settings.sketch.snap_distance),
            mode: ModeState::new(&settings),
            scene: SceneState::default(),
            settings,
            extrude_dialog: ExtrudeDialog::default(),
            last_error: None,
        }
    }

    /// Switch mode, dropping any line still being dragged
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode.mode() != mode && self.sketch.cancel_line() {
            tracing::debug!("Line cancelled by mode switch");
        }
        self.mode.set_mode(mode);
    }

    /// Toggle between navigation and sketch mode, dropping any line in progress
    pub fn toggle_mode(&mut self) -> InteractionMode {
        let next = match self.mode.mode() {
            InteractionMode::Navigation => InteractionMode::Sketch,
            InteractionMode::Sketch => InteractionMode::Navigation,
        };
        self.set_mode(next);
        next
    }
}
