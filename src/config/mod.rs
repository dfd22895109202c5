//! Configuration file support for rasterpaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/rasterpaint/config.toml`. Settings include the canvas size and
//! background, pen defaults, 3D shading, undo depth, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig, ShadingConfig};

use crate::input::state::{MAX_PEN_SIZE, MIN_PEN_SIZE};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas dimension, per axis.
pub const MAX_CANVAS_SIZE: u32 = 16384;

/// Largest accepted 3D shadow offset.
const MAX_SHADING_OFFSET: i32 = 200;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 800
/// height = 600
/// background = "white"
///
/// [drawing]
/// default_color = "red"
/// default_pen_size = 5
/// default_tool = "pencil"
///
/// [shading]
/// rectangle_offset = 10
/// shadow_color = "gray"
///
/// [history]
/// max_depth = 50
///
/// [export]
/// jpeg_quality = 90
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Pen and tool defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// 3D shape offsets and colors
    #[serde(default)]
    pub shading: ShadingConfig,

    /// Undo history limits
    #[serde(default)]
    pub history: HistoryConfig,

    /// Export defaults
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 16384
    /// - `drawing.default_pen_size`: 1 - 50
    /// - `shading.*_offset`: 0 - 200
    /// - `export.jpeg_quality`: 1 - 100
    fn validate_and_clamp(&mut self) {
        // Canvas size: 1 - 16384
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_SIZE).contains(&*value) {
                log::warn!(
                    "Invalid canvas {name} {}, clamping to 1-{MAX_CANVAS_SIZE} range",
                    *value
                );
                *value = (*value).clamp(1, MAX_CANVAS_SIZE);
            }
        }

        // Pen size: 1 - 50
        if !(MIN_PEN_SIZE..=MAX_PEN_SIZE).contains(&self.drawing.default_pen_size) {
            log::warn!(
                "Invalid default_pen_size {}, clamping to {MIN_PEN_SIZE}-{MAX_PEN_SIZE} range",
                self.drawing.default_pen_size
            );
            self.drawing.default_pen_size = self
                .drawing
                .default_pen_size
                .clamp(MIN_PEN_SIZE, MAX_PEN_SIZE);
        }

        // Shading offsets: 0 - 200
        for (name, value) in [
            ("rectangle_offset", &mut self.shading.rectangle_offset),
            ("circle_offset", &mut self.shading.circle_offset),
            ("triangle_offset", &mut self.shading.triangle_offset),
        ] {
            if !(0..=MAX_SHADING_OFFSET).contains(&*value) {
                log::warn!(
                    "Invalid shading {name} {}, clamping to 0-{MAX_SHADING_OFFSET} range",
                    *value
                );
                *value = (*value).clamp(0, MAX_SHADING_OFFSET);
            }
        }

        // JPEG quality: 1 - 100
        if !(1..=100).contains(&self.export.jpeg_quality) {
            log::warn!(
                "Invalid jpeg_quality {}, clamping to 1-100 range",
                self.export.jpeg_quality
            );
            self.export.jpeg_quality = self.export.jpeg_quality.clamp(1, 100);
        }

        // Unknown color names fall back at resolve time; report them once here
        for (name, spec) in [
            ("canvas.background", &self.canvas.background),
            ("drawing.default_color", &self.drawing.default_color),
            ("shading.shadow_color", &self.shading.shadow_color),
            ("shading.side_color", &self.shading.side_color),
        ] {
            if !spec.is_known() {
                log::warn!("Unrecognized color for {name}: {spec:?}");
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/rasterpaint/config.toml`
    /// (honouring `XDG_CONFIG_HOME`).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("rasterpaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
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

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
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

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
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

        fs::write(&config_path, Self::example_toml())?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// The commented example configuration shipped with the crate.
    pub fn example_toml() -> &'static str {
        include_str!("../../config.example.toml")
    }

    /// JSON schema describing every config key, for editor tooling.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(Config)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, DARK_GRAY, GRAY, WHITE};
    use crate::export::ExportFormat;
    use crate::input::Tool;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!((config.canvas.width, config.canvas.height), (650, 650));
        assert_eq!(config.canvas.background.to_color(), WHITE);
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.default_pen_size, 5);
        assert_eq!(config.drawing.default_tool, Tool::Pencil);
        assert_eq!(config.history.max_depth, 0);
        assert_eq!(config.export.default_format, ExportFormat::Png);
        assert_eq!(config.export.jpeg_quality, 90);

        let shading = config.shading.to_shading();
        assert_eq!(shading.rectangle_offset, 10);
        assert_eq!(shading.circle_offset, 5);
        assert_eq!(shading.triangle_offset, 10);
        assert_eq!(shading.shadow_color, GRAY);
        assert_eq!(shading.side_color, DARK_GRAY);
    }

    #[test]
    fn example_file_parses() {
        let mut config = Config::from_toml(Config::example_toml()).unwrap();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_tool, Tool::Pencil);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::from_toml(
            r#"
            [canvas]
            width = 0
            height = 100000

            [drawing]
            default_pen_size = 99
            default_tool = "circle3d"

            [shading]
            circle_offset = -4

            [export]
            jpeg_quality = 0
            default_format = "jpeg"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_SIZE);
        assert_eq!(config.drawing.default_pen_size, MAX_PEN_SIZE);
        assert_eq!(config.drawing.default_tool, Tool::Circle3d);
        assert_eq!(config.shading.circle_offset, 0);
        assert_eq!(config.export.jpeg_quality, 1);
        assert_eq!(config.export.default_format, ExportFormat::Jpeg);
    }

    #[test]
    fn unknown_tool_is_a_parse_error() {
        assert!(Config::from_toml("[drawing]\ndefault_tool = \"spray\"").is_err());
    }

    #[test]
    fn load_from_reads_explicit_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[canvas]\nwidth = 320\nbackground = [1, 2, 3]\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.width, 320);
        assert_eq!(config.canvas.height, 650);
        assert!(Config::load_from(&temp.path().join("missing.toml")).is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = Config::json_schema();
        let properties = schema["properties"].as_object().unwrap();
        for section in ["canvas", "drawing", "shading", "history", "export"] {
            assert!(properties.contains_key(section), "{section}");
        }
    }
}
