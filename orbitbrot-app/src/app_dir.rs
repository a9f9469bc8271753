//! Where the driver looks for its preferences and writes its images.

use std::path::{Path, PathBuf};

/// Directory containing the running executable. Falls back to current directory if unavailable.
pub fn exe_directory() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Default preferences file: `preferences.json` next to the executable.
pub fn default_preferences_path() -> PathBuf {
    exe_directory().join("preferences.json")
}

/// Resolve a relative output path against the directory of the preferences
/// file, so runs from different working directories write to one place.
pub fn resolve_output(preferences_path: &Path, output: &str) -> PathBuf {
    let output = Path::new(output);
    if output.is_absolute() {
        return output.to_path_buf();
    }
    preferences_path
        .parent()
        .map(|dir| dir.join(output))
        .unwrap_or_else(|| output.to_path_buf())
}
