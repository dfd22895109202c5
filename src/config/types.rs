//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::Shading;
use crate::export::{DEFAULT_JPEG_QUALITY, ExportFormat};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Controls the size and background of the canvas when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Initial canvas width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_size")]
    pub width: u32,

    /// Initial canvas height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_size")]
    pub height: u32,

    /// Background color; also the color painted by the eraser and by clear
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_size(),
            height: default_canvas_size(),
            background: default_background(),
        }
    }
}

/// Drawing-related settings.
///
/// Controls the initial pen and tool. Both can be changed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default pen color - either a named color (red, green, blue, yellow, orange, pink, white, black)
    /// or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default pen width in pixels (valid range: 1 - 50)
    #[serde(default = "default_pen_size")]
    pub default_pen_size: u32,

    /// Tool selected at startup
    #[serde(default)]
    pub default_tool: Tool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_pen_size: default_pen_size(),
            default_tool: Tool::default(),
        }
    }
}

/// Fake-depth settings for the 3D shape tools.
///
/// Shadows are offset right and up by the given number of pixels.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ShadingConfig {
    /// Shadow offset for 3D rectangles (valid range: 0 - 200)
    #[serde(default = "default_rectangle_offset")]
    pub rectangle_offset: i32,

    /// Shadow offset for 3D circles (valid range: 0 - 200)
    #[serde(default = "default_circle_offset")]
    pub circle_offset: i32,

    /// Shadow offset for 3D triangles (valid range: 0 - 200)
    #[serde(default = "default_triangle_offset")]
    pub triangle_offset: i32,

    /// Fill color of the offset shadow copy
    #[serde(default = "default_shadow_color")]
    pub shadow_color: ColorSpec,

    /// Fill color of the side faces joining base and shadow
    #[serde(default = "default_side_color")]
    pub side_color: ColorSpec,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            rectangle_offset: default_rectangle_offset(),
            circle_offset: default_circle_offset(),
            triangle_offset: default_triangle_offset(),
            shadow_color: default_shadow_color(),
            side_color: default_side_color(),
        }
    }
}

impl ShadingConfig {
    /// Resolves colors into the renderer's shading parameters.
    pub fn to_shading(&self) -> Shading {
        Shading {
            rectangle_offset: self.rectangle_offset,
            circle_offset: self.circle_offset,
            triangle_offset: self.triangle_offset,
            shadow_color: self.shadow_color.to_color(),
            side_color: self.side_color.to_color(),
        }
    }
}

/// Undo history settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Maximum number of undo snapshots kept (0 = unlimited).
    /// Each snapshot is a full copy of the canvas.
    #[serde(default)]
    pub max_depth: usize,
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for exports without an explicit path (supports `~`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template with chrono format specifiers
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Format used for timestamped exports ("png" or "jpeg")
    #[serde(default)]
    pub default_format: ExportFormat,

    /// JPEG quality (valid range: 1 - 100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            default_format: ExportFormat::default(),
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_size() -> u32 {
    650
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_pen_size() -> u32 {
    5
}

fn default_rectangle_offset() -> i32 {
    10
}

fn default_circle_offset() -> i32 {
    5
}

fn default_triangle_offset() -> i32 {
    10
}

fn default_shadow_color() -> ColorSpec {
    ColorSpec::Name("gray".to_string())
}

fn default_side_color() -> ColorSpec {
    ColorSpec::Name("darkgray".to_string())
}

fn default_save_directory() -> String {
    "~/Pictures/Rasterpaint".to_string()
}

fn default_filename_template() -> String {
    "painting_%Y-%m-%d_%H%M%S".to_string()
}

fn default_jpeg_quality() -> u8 {
    DEFAULT_JPEG_QUALITY
}
