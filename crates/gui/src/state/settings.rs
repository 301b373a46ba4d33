//! Application settings

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Sketch model settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchSettings {
    /// Radius within which a new point merges into an existing one
    pub snap_distance: f64,
    /// Require segments to form exactly one closed loop before extruding
    pub strict_loop_validation: bool,
    /// Rays whose direction z-component is below this are parallel to the plane
    pub parallel_epsilon: f64,
}

impl Default for SketchSettings {
    fn default() -> Self {
        Self {
            snap_distance: 0.1,
            strict_loop_validation: false,
            parallel_epsilon: 1e-6,
        }
    }
}

impl SketchSettings {
    /// Copy with unusable values replaced by defaults
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            snap_distance: positive_or(self.snap_distance, defaults.snap_distance),
            strict_loop_validation: self.strict_loop_validation,
            parallel_epsilon: positive_or(self.parallel_epsilon, defaults.parallel_epsilon),
        }
    }
}

/// Navigation camera settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    /// Distance per movement step
    pub move_speed: f64,
    /// Degrees of rotation per pixel of mouse movement
    pub mouse_speed: f64,
    /// Camera position at startup
    pub start_position: [f64; 3],
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 50.0,
            move_speed: 0.1,
            mouse_speed: 0.2,
            start_position: [0.0, 0.0, 5.0],
        }
    }
}

/// Sketch-mode view settings (camera looking straight down at the plane)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchViewSettings {
    /// Initial distance of the camera above the plane
    pub zoom: f64,
    /// Zoom change per step
    pub zoom_speed: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for SketchViewSettings {
    fn default() -> Self {
        Self {
            zoom: 5.0,
            zoom_speed: 0.5,
            min_zoom: 2.0,
            max_zoom: 20.0,
        }
    }
}

impl SketchViewSettings {
    /// Copy with positive, ordered zoom bounds and the start zoom inside them
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut min_zoom = positive_or(self.min_zoom, defaults.min_zoom);
        let mut max_zoom = positive_or(self.max_zoom, defaults.max_zoom);
        if min_zoom > max_zoom {
            tracing::warn!("min_zoom {min_zoom} is above max_zoom {max_zoom}, swapping");
            std::mem::swap(&mut min_zoom, &mut max_zoom);
        }
        Self {
            zoom: positive_or(self.zoom, defaults.zoom).clamp(min_zoom, max_zoom),
            zoom_speed: positive_or(self.zoom_speed, defaults.zoom_speed),
            min_zoom,
            max_zoom,
        }
    }
}

/// `value` if finite and above zero, else `fallback`
fn positive_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        tracing::warn!("Ignoring setting value {value}, using {fallback}");
        fallback
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// All application settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub sketch: SketchSettings,
    #[serde(default)]
    pub camera: CameraSettings,
    #[serde(default)]
    pub sketch_view: SketchViewSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

impl AppSettings {
    /// Path of the settings file in the platform config directory
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "extrude", "extrude-gui")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Copy with every numeric section made safe to use
    pub fn sanitized(&self) -> Self {
        Self {
            sketch: self.sketch.sanitized(),
            camera: self.camera.clone(),
            sketch_view: self.sketch_view.sanitized(),
            ui: self.ui.clone(),
        }
    }

    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load settings from a specific file. None if missing or malformed.
    pub fn load_from(path: &Path) -> Option<Self> {
        let json = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!("Ignoring malformed settings file {}: {e}", path.display());
                None
            }
        }
    }

    /// Load settings, writing the defaults out when no file exists yet
    pub fn load_or_init() -> Self {
        match Self::config_path() {
            Some(path) if !path.exists() => {
                let settings = Self::default();
                if let Err(e) = settings.save_to(&path) {
                    tracing::warn!("Failed to write default settings: {e}");
                }
                settings
            }
            _ => Self::load(),
        }
    }

    /// Save settings to the platform config directory
    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Err(e) = self.save_to(&path) {
                tracing::warn!("Failed to save settings to {}: {e}", path.display());
            }
        }
    }

    /// Save settings to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_prototype() {
        let s = AppSettings::default();
        assert_eq!(s.sketch.snap_distance, 0.1);
        assert!(!s.sketch.strict_loop_validation);
        assert_eq!(s.camera.fov_degrees, 45.0);
        assert_eq!(s.sketch_view.min_zoom, 2.0);
        assert_eq!(s.sketch_view.max_zoom, 20.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{"sketch": {"snap_distance": 0.25}}"#;
        let s: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.sketch.snap_distance, 0.25);
        assert_eq!(s.sketch.parallel_epsilon, 1e-6);
        assert_eq!(s.camera, CameraSettings::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("extrude-gui-test-{}", std::process::id()));
        let path = dir.join("settings.json");

        let mut s = AppSettings::default();
        s.sketch.strict_loop_validation = true;
        s.sketch_view.zoom = 7.5;
        s.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path).unwrap();
        assert_eq!(loaded, s);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_inverted_zoom_bounds_swapped() {
        let json = r#"{"sketch_view": {"min_zoom": 30.0}}"#;
        let s: AppSettings = serde_json::from_str(json).unwrap();
        let view = s.sketch_view.sanitized();
        assert_eq!(view.min_zoom, 20.0);
        assert_eq!(view.max_zoom, 30.0);
        assert_eq!(view.zoom, 20.0);
    }

    #[test]
    fn test_bad_numbers_fall_back_to_defaults() {
        let mut s = AppSettings::default();
        s.sketch.parallel_epsilon = -1.0;
        s.sketch.snap_distance = f64::NAN;
        s.sketch_view.zoom_speed = -0.5;
        s.sketch_view.min_zoom = 0.0;
        s.sketch_view.max_zoom = f64::INFINITY;
        let clean = s.sanitized();
        assert_eq!(clean.sketch, SketchSettings::default());
        assert_eq!(clean.sketch_view, SketchViewSettings::default());
    }

    #[test]
    fn test_valid_settings_unchanged() {
        let mut s = AppSettings::default();
        s.sketch.snap_distance = 0.25;
        s.sketch_view.min_zoom = 1.0;
        s.sketch_view.zoom = 12.0;
        assert_eq!(s.sanitized(), s);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("extrude-gui-does-not-exist/settings.json");
        assert!(AppSettings::load_from(&path).is_none());
    }
}
