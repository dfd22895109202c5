use crate::draw::{Color, transform, transform::Flip};
use crate::input::tool::Tool;
use log::{debug, info, warn};

use super::{DrawingState, InputState, MAX_PEN_SIZE, MIN_PEN_SIZE};

impl InputState {
    /// Switches the active tool.
    ///
    /// Any in-flight gesture is cancelled. Leaving the select tool drops a
    /// floating selection back where it was lifted from.
    pub fn set_tool(&mut self, tool: Tool) {
        self.cancel_gesture();
        if tool != Tool::SelectAndMove {
            self.settle_selection();
        }
        if self.current_tool != tool {
            debug!("Tool changed: {} -> {}", self.current_tool, tool);
            self.current_tool = tool;
            self.needs_redraw = true;
        }
    }

    /// Applies the outcome of a color picker.
    ///
    /// `None` means the picker was cancelled and changes nothing. Picking a
    /// color while erasing switches back to the pencil.
    pub fn set_color(&mut self, color: Option<Color>) -> bool {
        let Some(color) = color else {
            return false;
        };
        self.current_color = color;
        if self.current_tool == Tool::Eraser {
            self.set_tool(Tool::Pencil);
        }
        self.needs_redraw = true;
        true
    }

    /// Sets the pen width, clamped to `MIN_PEN_SIZE..=MAX_PEN_SIZE`.
    pub fn set_pen_size(&mut self, size: u32) {
        let clamped = size.clamp(MIN_PEN_SIZE, MAX_PEN_SIZE);
        if clamped != size {
            warn!("Pen size {size} out of range, using {clamped}");
        }
        self.pen_size = clamped;
        self.needs_redraw = true;
    }

    /// Restores the most recent snapshot.
    ///
    /// A floating selection is discarded. Snapshots taken while it floated
    /// hold its pixels at the lift origin, and the snapshot taken before the
    /// lift holds them in place. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.state = DrawingState::Idle;
        self.selection = None;
        let restored = self.history.undo(&mut self.canvas);
        if restored {
            debug!("Undo ({} snapshots left)", self.history.len());
            self.needs_redraw = true;
        }
        restored
    }

    /// Paints the whole canvas with the background color.
    pub fn clear_canvas(&mut self) {
        self.begin_canvas_transform();
        self.canvas.clear();
        self.needs_redraw = true;
    }

    /// Rotates the whole canvas 90° clockwise.
    pub fn rotate_canvas(&mut self) {
        self.begin_canvas_transform();
        transform::rotate_canvas(&mut self.canvas);
        self.needs_redraw = true;
    }

    /// Rotates the floating selection 90° clockwise and drops it at its origin.
    ///
    /// Returns `false` and logs a notice when nothing is selected.
    pub fn rotate_selection(&mut self) -> bool {
        if self.selection.is_none() {
            info!("No active selection to rotate");
            return false;
        }
        self.cancel_gesture();
        self.checkpoint();
        let Some(selection) = self.selection.take() else {
            return false;
        };
        let rotated = transform::rotate90(&selection.pixels);
        transform::commit_region(
            &mut self.canvas,
            &rotated,
            selection.origin.x,
            selection.origin.y,
        );
        self.needs_redraw = true;
        true
    }

    /// Mirrors the canvas left to right.
    pub fn flip_horizontal(&mut self) {
        self.flip(Flip::Horizontal);
    }

    /// Mirrors the canvas top to bottom.
    pub fn flip_vertical(&mut self) {
        self.flip(Flip::Vertical);
    }

    fn flip(&mut self, axis: Flip) {
        self.begin_canvas_transform();
        transform::flip(&mut self.canvas, axis);
        self.needs_redraw = true;
    }

    /// Grows the canvas to at least `width` x `height`.
    ///
    /// Neither axis ever shrinks; a request that grows nothing is ignored and
    /// takes no snapshot. Returns whether the canvas changed.
    pub fn resize_canvas(&mut self, width: u32, height: u32) -> bool {
        if width <= self.canvas.width() && height <= self.canvas.height() {
            info!(
                "Canvas is already {}x{}; ignoring resize to {width}x{height}",
                self.canvas.width(),
                self.canvas.height()
            );
            return false;
        }
        self.begin_canvas_transform();
        let grown = self.canvas.grow_to(width, height);
        debug!(
            "Canvas resized to {}x{}",
            self.canvas.width(),
            self.canvas.height()
        );
        self.needs_redraw = true;
        grown
    }

    /// Ends any in-flight gesture and drops a floating selection in place.
    ///
    /// Call before exporting so the canvas holds everything the user sees.
    pub fn flush_pending(&mut self) {
        self.cancel_gesture();
        self.settle_selection();
    }

    /// Settles pending work before a whole-canvas edit and snapshots the result.
    fn begin_canvas_transform(&mut self) {
        self.flush_pending();
        self.checkpoint();
    }
}
