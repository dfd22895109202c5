//! Drawing state machine and input state management.

use crate::config::Config;
use crate::draw::{
    Canvas, Color, Shading, UndoStack,
    transform::{self, Selection},
};
use crate::input::tool::Tool;

/// Smallest accepted pen size in pixels.
pub const MIN_PEN_SIZE: u32 = 1;
/// Largest accepted pen size in pixels.
pub const MAX_PEN_SIZE: u32 = 50;

/// Current gesture state machine.
///
/// Tracks whether the user is idle, painting with a tool, dragging a marquee,
/// or moving a floating selection. Every gesture starts on a left press and
/// returns to `Idle` on release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawingState {
    /// Not in a gesture - waiting for a press
    Idle,
    /// Painting with a freehand or shape tool (mouse button held down)
    Drawing {
        /// Which tool is being used for this gesture
        tool: Tool,
        /// Starting X coordinate (where mouse was pressed)
        start_x: i32,
        /// Starting Y coordinate (where mouse was pressed)
        start_y: i32,
        /// Latest pointer X coordinate
        current_x: i32,
        /// Latest pointer Y coordinate
        current_y: i32,
    },
    /// Dragging a selection rectangle with the cursor or select tool
    Marquee {
        /// Which marquee tool opened this rectangle
        tool: Tool,
        start_x: i32,
        start_y: i32,
        current_x: i32,
        current_y: i32,
    },
    /// Dragging the floating selection to a new position
    MovingSelection {
        /// Pointer position at the press that grabbed the selection
        press_x: i32,
        press_y: i32,
        current_x: i32,
        current_y: i32,
    },
}

/// Main input state containing the whole painting session.
///
/// This struct owns the canvas, the undo history, the floating selection and
/// the current drawing parameters. It processes pointer events and toolbar
/// actions and flags when the frontend needs to repaint.
pub struct InputState {
    /// The pixel buffer every tool paints into
    pub canvas: Canvas,
    /// Snapshots taken before each mutating operation
    pub history: UndoStack,
    /// Active tool (changed from the toolbar)
    pub current_tool: Tool,
    /// Current pen color
    pub current_color: Color,
    /// Current pen width in pixels, within `MIN_PEN_SIZE..=MAX_PEN_SIZE`
    pub pen_size: u32,
    /// Offsets and colors for the 3D shape tools
    pub shading: Shading,
    /// Current gesture state machine
    pub state: DrawingState,
    /// Region lifted by the select tool and not yet dropped
    pub selection: Option<Selection>,
    /// Last pointer position seen without a button held
    pub hover: Option<(i32, i32)>,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
}

impl InputState {
    /// Creates a new InputState with specified defaults.
    ///
    /// # Arguments
    /// * `width` - Initial canvas width in pixels
    /// * `height` - Initial canvas height in pixels
    /// * `background` - Canvas background (also the eraser color)
    /// * `color` - Initial pen color
    /// * `pen_size` - Initial pen width, clamped to the accepted range
    /// * `tool` - Initially selected tool
    /// * `shading` - 3D shape offsets and colors
    /// * `max_undo_depth` - Maximum undo snapshots kept (0 = unlimited)
    #[allow(clippy::too_many_arguments)]
    pub fn with_defaults(
        width: u32,
        height: u32,
        background: Color,
        color: Color,
        pen_size: u32,
        tool: Tool,
        shading: Shading,
        max_undo_depth: usize,
    ) -> Self {
        Self {
            canvas: Canvas::new(width, height, background),
            history: UndoStack::new(max_undo_depth),
            current_tool: tool,
            current_color: color,
            pen_size: pen_size.clamp(MIN_PEN_SIZE, MAX_PEN_SIZE),
            shading,
            state: DrawingState::Idle,
            selection: None,
            hover: None,
            needs_redraw: true,
        }
    }

    /// Creates a session from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            config.canvas.width,
            config.canvas.height,
            config.canvas.background.to_color(),
            config.drawing.default_color.to_color(),
            config.drawing.default_pen_size,
            config.drawing.default_tool,
            config.shading.to_shading(),
            config.history.max_depth,
        )
    }

    /// Color painted by freehand strokes of `tool`.
    pub(super) fn stroke_color(&self, tool: Tool) -> Color {
        if tool == Tool::Eraser {
            self.canvas.background()
        } else {
            self.current_color
        }
    }

    /// Saves the current canvas so the next mutation can be undone.
    ///
    /// While a selection floats, the snapshot holds its pixels back at the
    /// lift origin, so undoing a move or rotation never loses them.
    pub(super) fn checkpoint(&mut self) {
        match &self.selection {
            Some(selection) => {
                let mut settled = self.canvas.clone();
                transform::commit_region(
                    &mut settled,
                    &selection.pixels,
                    selection.origin.x,
                    selection.origin.y,
                );
                self.history.checkpoint(&settled);
            }
            None => self.history.checkpoint(&self.canvas),
        }
    }

    /// Drops any in-flight gesture back to `Idle`.
    ///
    /// Pixels already painted by a freehand stroke stay on the canvas.
    pub(super) fn cancel_gesture(&mut self) {
        if !matches!(self.state, DrawingState::Idle) {
            log::debug!("Cancelling gesture {:?}", self.state);
            self.state = DrawingState::Idle;
            self.needs_redraw = true;
        }
    }

    /// Drops the floating selection back where it was lifted from.
    ///
    /// Since the source was blanked on lift, this restores the canvas as it
    /// was before the selection existed.
    pub(super) fn settle_selection(&mut self) {
        if let Some(selection) = self.selection.take() {
            transform::commit_region(
                &mut self.canvas,
                &selection.pixels,
                selection.origin.x,
                selection.origin.y,
            );
            self.needs_redraw = true;
        }
    }

    /// Returns true while a press-drag-release gesture is in progress.
    pub fn is_gesture_active(&self) -> bool {
        !matches!(self.state, DrawingState::Idle)
    }
}
