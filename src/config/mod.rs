//! Configuration file support for gridsketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/gridsketch/config.toml`. Settings include grid layout,
//! zoom speed, editor limits, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{EditorConfig, GridConfig, ZoomConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [grid]
/// columns = 15
/// rows = 15
///
/// [zoom]
/// scale = 10.0
///
/// [editor]
/// max_segments = 0
/// snap_on_release = true
///
/// [keybindings]
/// undo = ["Mod+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Grid layout (column and row counts)
    #[serde(default)]
    pub grid: GridConfig,

    /// Wheel zoom behaviour
    #[serde(default)]
    pub zoom: ZoomConfig,

    /// Line editor behaviour
    #[serde(default)]
    pub editor: EditorConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `grid.columns`: 1 - 500
    /// - `grid.rows`: 1 - 500
    /// - `zoom.scale`: 1.0 - 1000.0
    fn validate_and_clamp(&mut self) {
        if !(1..=500).contains(&self.grid.columns) {
            log::warn!(
                "Invalid grid columns {}, clamping to 1-500 range",
                self.grid.columns
            );
            self.grid.columns = self.grid.columns.clamp(1, 500);
        }

        if !(1..=500).contains(&self.grid.rows) {
            log::warn!(
                "Invalid grid rows {}, clamping to 1-500 range",
                self.grid.rows
            );
            self.grid.rows = self.grid.rows.clamp(1, 500);
        }

        if self.zoom.scale.is_nan() {
            log::warn!("Invalid zoom scale NaN, falling back to 10.0");
            self.zoom.scale = 10.0;
        } else if !(1.0..=1000.0).contains(&self.zoom.scale) {
            log::warn!(
                "Invalid zoom scale {:.1}, clamping to 1.0-1000.0 range",
                self.zoom.scale
            );
            self.zoom.scale = self.zoom.scale.clamp(1.0, 1000.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/gridsketch/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("gridsketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. A missing file is an error.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from TOML text without validation.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the JSON Schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.grid.columns, 15);
        assert_eq!(config.grid.rows, 15);
        assert_eq!(config.zoom.scale, 10.0);
        assert_eq!(config.editor.max_segments, 0);
        assert!(config.editor.snap_on_release);
        assert_eq!(config.keybindings.undo, vec!["Mod+Z".to_string()]);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml(
            r#"
            [grid]
            columns = 20

            [keybindings]
            toggle_mode = ["D"]
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.columns, 20);
        assert_eq!(config.grid.rows, 15);
        assert_eq!(config.keybindings.toggle_mode, vec!["D".to_string()]);
        assert_eq!(config.keybindings.cancel, vec!["Escape".to_string()]);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [grid]
            columns = 0
            rows = 9000

            [zoom]
            scale = 0.01
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.grid.columns, 1);
        assert_eq!(config.grid.rows, 500);
        assert_eq!(config.zoom.scale, 1.0);
    }

    #[test]
    fn load_from_reads_and_validates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[zoom]\nscale = 5000.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.zoom.scale, 1000.0);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[grid\ncolumns = 3").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load_from(&temp.path().join("nope.toml")).is_err());
    }

    #[test]
    fn schema_names_top_level_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = schema.get("properties").unwrap();
        for section in ["grid", "zoom", "editor", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
