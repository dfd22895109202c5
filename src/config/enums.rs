//! Configuration enum types.

use crate::draw::{Color, color::*};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Hex triplet
/// background = "#fafafa"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (red, green, blue, yellow, orange, pink, white, black, gray,
    /// darkgray) or a `#rrggbb` hex triplet
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped using `util::name_to_color()`. Unknown color
    /// names default to black with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }

    /// Returns true if the specification names a color that can be resolved.
    pub fn is_known(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        match crate::util::color_to_name(&color) {
            "Custom" => ColorSpec::Rgb(color.to_rgb()),
            name => ColorSpec::Name(name.to_lowercase().replace(' ', "")),
        }
    }
}
