//! Configuration file support for mapsketch.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/mapsketch/config.toml`. Settings include the symbols applied to
//! committed graphics, editor limits, front-end preferences and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

pub use enums::{ColorSpec, FillStyle, LineStyle, MarkerStyle};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    EditorConfig, FillSymbolConfig, LineSymbolConfig, MarkerSymbolConfig, SymbolsConfig, UiConfig,
};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and are filled in when missing from the file.
///
/// # Example TOML
/// ```toml
/// [symbols.marker]
/// style = "circle"
/// color = "red"
/// size = 12.0
///
/// [symbols.fill]
/// style = "solid"
/// color = [255, 255, 0]
/// opacity = 0.5
///
/// [editor]
/// history_limit = 50
///
/// [ui]
/// show_status_bar = true
/// ```
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Symbols for committed graphics
    #[serde(default)]
    pub symbols: SymbolsConfig,

    /// Editing engine limits
    #[serde(default)]
    pub editor: EditorConfig,

    /// Command front-end preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Key chords for every action
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Clamps numeric settings into their accepted ranges, warning on each fix.
    ///
    /// Validated ranges:
    /// - `symbols.marker.size`: 1.0 - 64.0
    /// - `symbols.line.width`: 0.5 - 20.0
    /// - `symbols.fill.opacity`: 0.0 - 1.0
    /// - `editor.history_limit`: 0 - 1000
    /// - `editor.freehand_min_spacing`: 0.0 - 100.0
    pub fn validate_and_clamp(&mut self) {
        clamp_f64("symbols.marker.size", &mut self.symbols.marker.size, 1.0, 64.0);
        clamp_f64("symbols.line.width", &mut self.symbols.line.width, 0.5, 20.0);
        clamp_f64("symbols.fill.opacity", &mut self.symbols.fill.opacity, 0.0, 1.0);
        clamp_f64(
            "editor.freehand_min_spacing",
            &mut self.editor.freehand_min_spacing,
            0.0,
            100.0,
        );

        if self.editor.history_limit > 1000 {
            warn!(
                "Invalid editor.history_limit {}, clamping to 0-1000 range",
                self.editor.history_limit
            );
            self.editor.history_limit = 1000;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("mapsketch");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// contains keybindings that fail to parse or collide.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();
        config
            .keybindings
            .build_action_map()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("Invalid keybindings in {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to the user's config directory.
    ///
    /// Returns the path written.
    ///
    /// # Errors
    /// Returns an error if a config file already exists or cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(Config);
        serde_json::to_value(&schema).unwrap_or(serde_json::Value::Null)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

fn clamp_f64(name: &str, value: &mut f64, min: f64, max: f64) {
    if value.is_nan() {
        warn!("Invalid {} (NaN), using {:.1}", name, min);
        *value = min;
    } else if !(min..=max).contains(value) {
        warn!(
            "Invalid {} {:.2}, clamping to {:.1}-{:.1} range",
            name, *value, min, max
        );
        *value = value.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.editor.history_limit, 100);
        assert!(config.ui.show_status_bar);
        assert_eq!(config.keybindings.commit, vec!["Return".to_string()]);
    }

    #[test]
    fn test_validate_and_clamp_ranges() {
        let mut config = Config::default();
        config.symbols.marker.size = 500.0;
        config.symbols.line.width = 0.0;
        config.symbols.fill.opacity = 1.5;
        config.editor.history_limit = 5000;
        config.editor.freehand_min_spacing = f64::NAN;

        config.validate_and_clamp();

        assert_eq!(config.symbols.marker.size, 64.0);
        assert_eq!(config.symbols.line.width, 0.5);
        assert_eq!(config.symbols.fill.opacity, 1.0);
        assert_eq!(config.editor.history_limit, 1000);
        assert_eq!(config.editor.freehand_min_spacing, 0.0);
    }

    #[test]
    fn test_load_from_file_clamps_and_parses() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[symbols.marker]
style = "circle"
color = [0, 255, 0]
size = 100.0

[keybindings]
commit = ["Return", "Ctrl+S"]
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.symbols.marker.style, MarkerStyle::Circle);
        assert_eq!(config.symbols.marker.size, 64.0);
        assert_eq!(config.keybindings.commit.len(), 2);
    }

    #[test]
    fn test_load_from_rejects_duplicate_keybindings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[keybindings]\nundo = [\"Return\"]\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Duplicate keybinding"));
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[editor\nhistory_limit = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.keybindings.build_action_map().is_ok());
    }

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = Config::json_schema();
        let properties = schema.get("properties").unwrap();
        for section in ["symbols", "editor", "ui", "keybindings"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
