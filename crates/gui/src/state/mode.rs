//! Navigation / sketch mode and the camera that goes with it

use serde::{Deserialize, Serialize};

use super::settings::{AppSettings, CameraSettings, SketchViewSettings};
use crate::viewport::camera::{FlyCamera, MoveDirection};
use crate::viewport::unproject::{ViewContext, Viewport};

/// What pointer and keyboard input currently drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// First-person fly camera over the scene
    #[default]
    Navigation,
    /// Line drawing on the z = 0 plane, camera fixed above it
    Sketch,
}

impl InteractionMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Sketch => "Sketch",
        }
    }
}

/// Current mode plus camera state
#[derive(Debug, Clone)]
pub struct ModeState {
    mode: InteractionMode,
    pub camera: FlyCamera,
    sketch_zoom: f64,
    camera_settings: CameraSettings,
    view_settings: SketchViewSettings,
    parallel_epsilon: f64,
}

impl ModeState {
    pub fn new(settings: &AppSettings) -> Self {
        let view_settings = settings.sketch_view.sanitized();
        let sketch_zoom = view_settings.zoom;
        Self {
            mode: InteractionMode::Navigation,
            camera: FlyCamera::new(settings.camera.start_position),
            sketch_zoom,
            camera_settings: settings.camera.clone(),
            view_settings,
            parallel_epsilon: settings.sketch.sanitized().parallel_epsilon,
        }
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_sketch(&self) -> bool {
        self.mode == InteractionMode::Sketch
    }

    /// Current sketch-view distance above the plane
    pub fn sketch_zoom(&self) -> f64 {
        self.sketch_zoom
    }

    /// Switch between navigation and sketch mode
    pub fn toggle_mode(&mut self) -> InteractionMode {
        let next = match self.mode {
            InteractionMode::Navigation => InteractionMode::Sketch,
            InteractionMode::Sketch => InteractionMode::Navigation,
        };
        self.set_mode(next);
        next
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        if mode == InteractionMode::Sketch {
            self.apply_sketch_camera();
        }
        tracing::info!("Switched to {} mode", mode.label());
    }

    /// Navigation-only movement. Returns false if ignored.
    pub fn move_camera(&mut self, direction: MoveDirection) -> bool {
        if self.is_sketch() {
            return false;
        }
        self.camera
            .translate(direction, self.camera_settings.move_speed);
        true
    }

    /// Navigation-only mouse look, deltas in pixels
    pub fn look(&mut self, dx: f64, dy: f64) -> bool {
        if self.is_sketch() {
            return false;
        }
        self.camera.look(dx, dy, self.camera_settings.mouse_speed);
        true
    }

    /// Sketch-only: move the camera closer to the plane
    pub fn zoom_in(&mut self) -> bool {
        self.change_zoom(-self.view_settings.zoom_speed)
    }

    /// Sketch-only: move the camera away from the plane
    pub fn zoom_out(&mut self) -> bool {
        self.change_zoom(self.view_settings.zoom_speed)
    }

    /// Sketch-only wheel zoom; positive `notches` zoom in
    pub fn scroll(&mut self, notches: f64) -> bool {
        self.change_zoom(-notches * self.view_settings.zoom_speed)
    }

    fn change_zoom(&mut self, delta: f64) -> bool {
        if !self.is_sketch() {
            return false;
        }
        self.sketch_zoom = (self.sketch_zoom + delta)
            .clamp(self.view_settings.min_zoom, self.view_settings.max_zoom);
        self.apply_sketch_camera();
        true
    }

    fn apply_sketch_camera(&mut self) {
        self.camera.look_down_at_plane(self.sketch_zoom);
    }

    /// Snapshot of the view for the sketch pipeline
    pub fn view_context(&self, viewport: Viewport) -> ViewContext {
        let cs = &self.camera_settings;
        ViewContext {
            mode: self.mode,
            view: self.camera.view_matrix(),
            projection: self
                .camera
                .projection_matrix(cs.fov_degrees, viewport.aspect(), cs.near, cs.far),
            viewport,
            parallel_epsilon: self.parallel_epsilon,
        }
    }
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}
