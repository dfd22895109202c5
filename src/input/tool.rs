//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool determines what a press-drag-release gesture does to the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    /// Freehand drawing with the pen color (default)
    #[default]
    Pencil,
    /// Freehand drawing with the background color
    Eraser,
    /// Straight line with the pen width
    Line,
    /// One-pixel integer Bresenham line
    LineBresenham,
    /// Rectangle outline from corner to corner
    Rectangle,
    /// Ellipse outline inscribed in the drag box
    Oval,
    /// One-pixel midpoint circle inscribed in the drag box
    CircleMidpoint,
    /// Circle outline centered on the press point
    Circle,
    /// Triangle outline with its apex on the top edge
    Triangle,
    /// Flood fill with the pen color
    Fill,
    /// Filled rectangle with fake depth
    Rectangle3d,
    /// Filled circle with fake depth
    Circle3d,
    /// Filled triangle with fake depth
    Triangle3d,
    /// Marquee that highlights a region without touching pixels
    Cursor,
    /// Lift a rectangular region and drop it somewhere else
    SelectAndMove,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 15] = [
        Tool::Cursor,
        Tool::SelectAndMove,
        Tool::Pencil,
        Tool::Eraser,
        Tool::Line,
        Tool::LineBresenham,
        Tool::Rectangle,
        Tool::Oval,
        Tool::CircleMidpoint,
        Tool::Circle,
        Tool::Triangle,
        Tool::Fill,
        Tool::Rectangle3d,
        Tool::Circle3d,
        Tool::Triangle3d,
    ];

    /// Stable snake_case name used in config files and scripts.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::LineBresenham => "line_bresenham",
            Tool::Rectangle => "rectangle",
            Tool::Oval => "oval",
            Tool::CircleMidpoint => "circle_midpoint",
            Tool::Circle => "circle",
            Tool::Triangle => "triangle",
            Tool::Fill => "fill",
            Tool::Rectangle3d => "rectangle3d",
            Tool::Circle3d => "circle3d",
            Tool::Triangle3d => "triangle3d",
            Tool::Cursor => "cursor",
            Tool::SelectAndMove => "select_and_move",
        }
    }

    /// Freehand tools paint continuously while dragging.
    pub fn is_freehand(self) -> bool {
        matches!(self, Tool::Pencil | Tool::Eraser)
    }

    /// Marquee tools draw a selection rectangle instead of painting.
    pub fn is_marquee(self) -> bool {
        matches!(self, Tool::Cursor | Tool::SelectAndMove)
    }

    /// Shape tools preview while dragging and commit once on release.
    pub fn is_shape(self) -> bool {
        !self.is_freehand() && !self.is_marquee() && self != Tool::Fill
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == wanted)
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}
