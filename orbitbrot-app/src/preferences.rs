use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use orbitbrot_core::Viewport;

// ---------------------------------------------------------------------------
// Driver preferences
// ---------------------------------------------------------------------------

/// Everything the headless driver needs for one run, loaded from JSON.
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_center_x")]
    pub center_x: f64,
    #[serde(default)]
    pub center_y: f64,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    /// Number of zooms toward the screen center applied before rendering.
    #[serde(default)]
    pub zoom_steps: u32,
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    /// Rows per band in the parallel render.
    #[serde(default = "default_band_rows")]
    pub band_rows: u32,
    /// PNG output, relative to the preferences file unless absolute.
    #[serde(default = "default_output_png")]
    pub output_png: String,

    #[serde(default = "default_body_count")]
    pub body_count: usize,
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    /// Frames to simulate.
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Start from `last_view` instead of the configured center and zoom.
    #[serde(default)]
    pub restore_last_view: bool,
    /// The view rendered by the previous run.
    #[serde(default)]
    pub last_view: Option<Viewport>,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    600
}
fn default_center_x() -> f64 {
    Viewport::DEFAULT_CENTER.re
}
fn default_zoom() -> f64 {
    Viewport::DEFAULT_ZOOM
}
fn default_zoom_factor() -> f64 {
    1.5
}
fn default_band_rows() -> u32 {
    orbitbrot_render::DEFAULT_BAND_ROWS
}
fn default_output_png() -> String {
    "mandelbrot.png".to_string()
}
fn default_body_count() -> usize {
    100
}
fn default_time_step() -> f64 {
    orbitbrot_nbody::DEFAULT_TIME_STEP
}
fn default_steps() -> u32 {
    1000
}
fn default_seed() -> u64 {
    42
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            center_x: default_center_x(),
            center_y: 0.0,
            zoom: default_zoom(),
            zoom_steps: 0,
            zoom_factor: default_zoom_factor(),
            band_rows: default_band_rows(),
            output_png: default_output_png(),
            body_count: default_body_count(),
            time_step: default_time_step(),
            steps: default_steps(),
            seed: default_seed(),
            restore_last_view: false,
            last_view: None,
        }
    }
}

impl Preferences {
    /// Load preferences from `path`, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(json) => match serde_json::from_str::<Preferences>(&json) {
                    Ok(prefs) => {
                        info!("Loaded preferences from {}", path.display());
                        return prefs;
                    }
                    Err(e) => {
                        error!("Failed to parse preferences: {e}");
                    }
                },
                Err(e) => {
                    error!("Failed to read preferences file: {e}");
                }
            }
        } else {
            debug!("No preferences file at {}", path.display());
        }
        Self::default()
    }

    /// Persist preferences to `path`.
    pub fn save(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// The view to render before any zoom steps.
    pub fn initial_view(&self) -> (f64, f64, f64) {
        match (self.restore_last_view, &self.last_view) {
            (true, Some(view)) => (view.center.re, view.center.im, view.zoom),
            _ => (self.center_x, self.center_y, self.zoom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let prefs: Preferences = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!((prefs.width, prefs.height), (800, 600));
        assert_eq!(prefs.time_step, 0.008);
    }

    #[test]
    fn partial_file_overrides_some_fields() {
        let prefs: Preferences =
            serde_json::from_str(r#"{ "width": 320, "body_count": 7, "seed": 9 }"#).unwrap();
        assert_eq!(prefs.width, 320);
        assert_eq!(prefs.height, 600);
        assert_eq!(prefs.body_count, 7);
        assert_eq!(prefs.seed, 9);
    }

    #[test]
    fn last_view_used_only_when_restoring() {
        let mut prefs = Preferences::default();
        let mut view = Viewport::default_view(800, 600);
        view.set_view(0.3, 0.1, 40.0);
        prefs.last_view = Some(view);
        assert_eq!(prefs.initial_view(), (-0.7, 0.0, 1.0));

        prefs.restore_last_view = true;
        assert_eq!(prefs.initial_view(), (0.3, 0.1, 40.0));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("orbitbrot_test_prefs");
        let path = dir.join("preferences.json");
        let mut prefs = Preferences::default();
        prefs.steps = 12;
        prefs.last_view = Some(Viewport::default_view(10, 10));
        prefs.save(&path);

        assert_eq!(Preferences::load(&path), prefs);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("orbitbrot_test_prefs_bad");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("preferences.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(Preferences::load(&path), Preferences::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
