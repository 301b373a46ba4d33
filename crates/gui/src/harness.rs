//! Headless test harness for driving the sketch pipeline programmatically.
//!
//! Wraps an [`AppState`] and a fixed viewport so tests and the agent
//! command interface can feed pointer events without a window.

use shared::{Point2D, SketchGeometry};

use crate::interaction::{handle_event, EventOutcome, InputEvent};
use crate::state::mode::InteractionMode;
use crate::state::scene::SceneSolid;
use crate::state::settings::AppSettings;
use crate::state::AppState;
use crate::validation::SolidValidator;
use crate::viewport::unproject::{ViewContext, Viewport};

/// Viewport size used when none is given
pub const DEFAULT_VIEWPORT: [f64; 2] = [1600.0, 1000.0];

/// Headless test harness: application state plus a fixed viewport
pub struct TestHarness {
    pub state: AppState,
    pub viewport: Viewport,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Harness with default settings (the settings file is not read).
    pub fn new() -> Self {
        Self::with_settings(AppSettings::default())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        Self {
            state: AppState::new(settings),
            viewport: Viewport::new(DEFAULT_VIEWPORT[0], DEFAULT_VIEWPORT[1]),
        }
    }

    /// View as of the current camera
    pub fn context(&self) -> ViewContext {
        self.state.mode.view_context(self.viewport)
    }

    // ── Mode ──────────────────────────────────────────────────

    pub fn mode(&self) -> InteractionMode {
        self.state.mode.mode()
    }

    pub fn toggle_mode(&mut self) -> InteractionMode {
        self.state.toggle_mode()
    }

    pub fn enter_sketch_mode(&mut self) {
        self.state.set_mode(InteractionMode::Sketch);
    }

    // ── Pointer input ─────────────────────────────────────────

    /// Dispatch one event against the current view
    pub fn send(&mut self, event: InputEvent) -> EventOutcome {
        let ctx = self.context();
        handle_event(&mut self.state, &ctx, event)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) -> EventOutcome {
        self.send(InputEvent::PointerDown { x, y })
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> EventOutcome {
        self.send(InputEvent::PointerMove { x, y })
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) -> EventOutcome {
        self.send(InputEvent::PointerUp { x, y })
    }

    /// Screen position of a sketch-plane point under the current camera
    pub fn screen_of(&self, p: Point2D) -> Option<[f64; 2]> {
        self.context().project_sketch_point(p)
    }

    /// Drag from one plane point to another (down, move halfway, up).
    /// Returns the outcome of the pointer-up.
    pub fn draw_segment(&mut self, from: Point2D, to: Point2D) -> Result<EventOutcome, String> {
        let a = self
            .screen_of(from)
            .ok_or_else(|| format!("({}, {}) is behind the camera", from.x, from.y))?;
        let b = self
            .screen_of(to)
            .ok_or_else(|| format!("({}, {}) is behind the camera", to.x, to.y))?;
        self.pointer_down(a[0], a[1]);
        self.pointer_move((a[0] + b[0]) * 0.5, (a[1] + b[1]) * 0.5);
        Ok(self.pointer_up(b[0], b[1]))
    }

    /// Draw a closed polygon through `corners`, one drag per side.
    pub fn draw_polygon(&mut self, corners: &[[f64; 2]]) -> Result<Vec<EventOutcome>, String> {
        let n = corners.len();
        (0..n)
            .map(|i| self.draw_segment(corners[i].into(), corners[(i + 1) % n].into()))
            .collect()
    }

    // ── Extrusion ─────────────────────────────────────────────

    pub fn extrude(&mut self, height: f64) -> EventOutcome {
        self.send(InputEvent::CommitExtrusion { height })
    }

    /// Parse `text` the way the Extrude submenu does, then extrude.
    pub fn extrude_text(&mut self, text: &str) -> Result<EventOutcome, String> {
        self.state.extrude_dialog.height_text = text.to_string();
        let height = self
            .state
            .extrude_dialog
            .parse_height()
            .map_err(|e| e.to_string())?;
        Ok(self.extrude(height))
    }

    pub fn clear_sketch(&mut self) {
        self.state.sketch.clear();
    }

    pub fn undo(&mut self) -> bool {
        self.state.scene.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.state.scene.redo()
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn geometry(&self) -> SketchGeometry {
        self.state.sketch.get_geometry()
    }

    pub fn solid_count(&self) -> usize {
        self.state.scene.len()
    }

    pub fn last_solid(&self) -> Option<&SceneSolid> {
        self.state.scene.last()
    }

    /// Validation errors of the most recent solid; empty when valid
    pub fn validate_last(&self) -> Vec<String> {
        match self.last_solid() {
            Some(s) => SolidValidator::new(&s.solid).validate_all(),
            None => vec!["Scene has no solids".to_string()],
        }
    }
}
