//! Opaque RGB color type and predefined color constants.

/// Represents an opaque RGB color with 8-bit components.
///
/// The canvas has no alpha channel; every pixel is one of these.
///
/// # Examples
///
/// ```
/// use rasterpaint::draw::Color;
/// let red = Color::new(255, 0, 0);
/// assert_eq!(Color::from_hex("#ff0000"), Some(red));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex triplet.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Formats the color as a lowercase `#rrggbb` triplet.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the components as an `[r, g, b]` array.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Predefined red color
pub const RED: Color = Color::new(255, 0, 0);

/// Predefined green color
pub const GREEN: Color = Color::new(0, 255, 0);

/// Predefined blue color
pub const BLUE: Color = Color::new(0, 0, 255);

/// Predefined yellow color
pub const YELLOW: Color = Color::new(255, 255, 0);

/// Predefined orange color
pub const ORANGE: Color = Color::new(255, 128, 0);

/// Predefined pink/magenta color
pub const PINK: Color = Color::new(255, 0, 255);

/// Predefined white color (default canvas background)
pub const WHITE: Color = Color::new(255, 255, 255);

/// Predefined black color (default pen color)
pub const BLACK: Color = Color::new(0, 0, 0);

/// Mid gray, used for 3D shadows and shape previews
pub const GRAY: Color = Color::new(128, 128, 128);

/// Dark gray, used for 3D side faces
pub const DARK_GRAY: Color = Color::new(169, 169, 169);
