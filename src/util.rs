//! Utility functions for color names and rectangle geometry.
//!
//! This module provides:
//! - Name/hex-to-color parsing used by the config file and gesture scripts
//! - An axis-aligned [`Rect`] used for marquees, selections and clipping
//! - Ellipse and circle parameters derived from drag corners

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system and gesture scripts to parse color names.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
/// - "gray"/"grey", "darkgray"/"darkgrey"
/// - `#rrggbb` hex triplets
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color or a hex triplet
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    let name = name.trim();
    if name.starts_with('#') {
        return Color::from_hex(name);
    }

    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "gray" | "grey" => Some(GRAY),
        "darkgray" | "darkgrey" | "dark-gray" | "dark-grey" => Some(DARK_GRAY),
        _ => None,
    }
}

/// Maps a Color value to its human-readable name.
///
/// Exact match against the predefined palette; anything else is "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    match *color {
        RED => "Red",
        GREEN => "Green",
        BLUE => "Blue",
        YELLOW => "Yellow",
        ORANGE => "Orange",
        PINK => "Pink",
        WHITE => "White",
        BLACK => "Black",
        GRAY => "Gray",
        DARK_GRAY => "Dark Gray",
        _ => "Custom",
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle in canvas pixels.
///
/// `x`/`y` is the inclusive top-left corner; `x + width` and `y + height`
/// are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x.saturating_sub(min_x);
        let height = max_y.saturating_sub(min_y);
        Self::new(min_x, min_y, width, height)
    }

    /// Builds a rectangle spanned by two drag corners in any order.
    ///
    /// The smaller coordinate is inclusive and the larger one exclusive, so a
    /// click without movement yields `None`.
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Self> {
        Self::from_min_max(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns a copy moved by `(dx, dy)`.
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Clips the rectangle to a `width` x `height` surface anchored at the origin.
    ///
    /// Returns `None` when nothing of the rectangle remains visible.
    pub fn clamp_to_bounds(&self, width: i32, height: i32) -> Option<Self> {
        let min_x = self.x.clamp(0, width);
        let min_y = self.y.clamp(0, height);
        let max_x = self.right().clamp(0, width);
        let max_y = self.bottom().clamp(0, height);
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }
}

/// Calculates midpoint-circle parameters from two corner points.
///
/// The circle is centered between the corners with a radius of half the
/// larger drag extent.
///
/// # Returns
/// Tuple `(cx, cy, r)`
pub fn inscribed_circle(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32) {
    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
    // midpoints and half extents of i32 values always fit back into i32
    let cx = (x1 + x2).div_euclid(2) as i32;
    let cy = (y1 + y2).div_euclid(2) as i32;
    let r = ((x2 - x1).abs().max((y2 - y1).abs()) / 2) as i32;
    (cx, cy, r)
}

/// Calculates the radius of a circle centered on the press point.
///
/// The radius is the larger of the horizontal and vertical drag extents.
pub fn drag_radius(x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    let extent = (i64::from(x2) - i64::from(x1))
        .abs()
        .max((i64::from(y2) - i64::from(y1)).abs());
    i32::try_from(extent).unwrap_or(i32::MAX)
}
