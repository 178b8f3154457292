use log::{trace, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{
    PanelSpec, DEFAULT_CASE_CAPACITY, DEFAULT_COST_PER_SQFT, DEFAULT_PANEL_SIZE_INCHES,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_panel_size_inches")]
    pub panel_size_inches: f64,

    #[serde(default = "default_cost_per_sqft")]
    pub cost_per_sqft: f64,

    #[serde(default = "default_case_capacity")]
    pub case_capacity: usize,

    #[serde(default = "default_floor_side_ft")]
    pub default_width_ft: f64,

    #[serde(default = "default_floor_side_ft")]
    pub default_length_ft: f64,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_panel_size_inches() -> f64 {
    DEFAULT_PANEL_SIZE_INCHES
}
fn default_cost_per_sqft() -> f64 {
    DEFAULT_COST_PER_SQFT
}
fn default_case_capacity() -> usize {
    DEFAULT_CASE_CAPACITY
}
fn default_floor_side_ft() -> f64 {
    20.0
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            panel_size_inches: default_panel_size_inches(),
            cost_per_sqft: default_cost_per_sqft(),
            case_capacity: default_case_capacity(),
            default_width_ft: default_floor_side_ft(),
            default_length_ft: default_floor_side_ft(),
        }
    }
}

impl Settings {
    /// Reads settings from `path`. A missing or unreadable file yields the
    /// defaults, which are then written back so the user has a file to edit.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    trace!(target: "settings", "Loaded settings from {:?}", path);
                    return settings;
                }
                Err(err) => {
                    warn!(target: "settings", "Ignoring malformed settings {:?}: {}", path, err);
                }
            }
        }
        let default = Settings::default();
        if let Err(err) = default.save_to(path) {
            warn!(target: "settings", "Could not write default settings {:?}: {}", path, err);
        }
        default
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure the directory exists
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    #[cfg(feature = "gui")]
    pub fn default_path() -> PathBuf {
        let data_dir = glib::user_data_dir();
        let mut path = data_dir.join("dancefloor");
        path.push("settings.json");
        path
    }

    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join("settings.json")
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    pub fn panel_spec(&self) -> Result<PanelSpec> {
        PanelSpec::from_inches(self.panel_size_inches, self.cost_per_sqft, self.case_capacity)
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DesignerError;
    use tempfile::tempdir;

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"cost_per_sqft": 12.5}"#).unwrap();
        assert_eq!(settings.cost_per_sqft, 12.5);
        assert_eq!(settings.panel_size_inches, 20.0);
        assert_eq!(settings.case_capacity, 10);
        assert_eq!(settings.default_width_ft, 20.0);
        assert_eq!(settings.version(), 1);
    }

    #[test]
    fn test_migrates_version_zero() {
        let mut settings: Settings = serde_json::from_str(r#"{"version": 0}"#).unwrap();
        settings.migrate();
        assert_eq!(settings.version(), 1);
    }

    #[test]
    fn test_panel_spec_from_settings() {
        let spec = Settings::default().panel_spec().unwrap();
        assert_eq!(spec, PanelSpec::default());

        let broken = Settings {
            case_capacity: 0,
            ..Settings::default()
        };
        assert!(matches!(
            broken.panel_spec(),
            Err(DesignerError::InvalidSpec(_))
        ));
    }

    #[test]
    fn test_load_writes_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let path = Settings::path_in(&dir.path().join("nested"));

        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = Settings::path_in(dir.path());

        let settings = Settings {
            cost_per_sqft: 18.0,
            default_width_ft: 24.0,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();

        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = Settings::path_in(dir.path());
        fs::write(&path, "{ not json").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
    }
}
