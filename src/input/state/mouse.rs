use crate::draw::{Shape, raster, transform};
use crate::input::{events::MouseButton, tool::Tool};
use crate::util::Rect;
use log::debug;

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate
    /// * `y` - Mouse Y coordinate
    ///
    /// # Behavior
    /// - Left click while Idle: checkpoints the canvas, then starts a gesture
    ///   with the current tool (fill paints immediately, pencil/eraser stamp a
    ///   dot, select grabs the floating selection if there is one)
    /// - Right click: Cancels the current gesture
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                if !matches!(self.state, DrawingState::Idle) {
                    return;
                }
                self.checkpoint();
                let tool = self.current_tool;

                self.state = match tool {
                    Tool::Fill => {
                        let painted = raster::flood_fill(&mut self.canvas, x, y, self.current_color);
                        debug!("Flood fill at ({x}, {y}) repainted {painted} pixels");
                        DrawingState::Idle
                    }
                    Tool::SelectAndMove if self.selection.is_some() => {
                        DrawingState::MovingSelection {
                            press_x: x,
                            press_y: y,
                            current_x: x,
                            current_y: y,
                        }
                    }
                    Tool::Cursor | Tool::SelectAndMove => DrawingState::Marquee {
                        tool,
                        start_x: x,
                        start_y: y,
                        current_x: x,
                        current_y: y,
                    },
                    _ => {
                        if tool.is_freehand() {
                            let color = self.stroke_color(tool);
                            raster::draw_thick_line(&mut self.canvas, x, y, x, y, self.pen_size, color);
                        }
                        DrawingState::Drawing {
                            tool,
                            start_x: x,
                            start_y: y,
                            current_x: x,
                            current_y: y,
                        }
                    }
                };
                self.needs_redraw = true;
            }
            MouseButton::Right => self.cancel_gesture(),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion events.
    ///
    /// # Arguments
    /// * `x` - Current mouse X coordinate
    /// * `y` - Current mouse Y coordinate
    ///
    /// # Behavior
    /// - Pencil/eraser: paints a segment from the previous point and advances it
    /// - Shape tools and marquees: move the live preview end point
    /// - Moving a selection: repositions the floating preview
    /// - Idle: only tracks the hover position
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        self.hover = Some((x, y));
        let pen_size = self.pen_size;

        match &mut self.state {
            DrawingState::Idle => {
                if self.current_tool.is_freehand() {
                    self.needs_redraw = true;
                }
                return;
            }
            DrawingState::Drawing {
                tool,
                current_x,
                current_y,
                ..
            } => {
                if tool.is_freehand() {
                    let (from_x, from_y) = (*current_x, *current_y);
                    let color = if *tool == Tool::Eraser {
                        self.canvas.background()
                    } else {
                        self.current_color
                    };
                    raster::draw_thick_line(&mut self.canvas, from_x, from_y, x, y, pen_size, color);
                }
                *current_x = x;
                *current_y = y;
            }
            DrawingState::Marquee {
                current_x,
                current_y,
                ..
            }
            | DrawingState::MovingSelection {
                current_x,
                current_y,
                ..
            } => {
                *current_x = x;
                *current_y = y;
            }
        }
        self.needs_redraw = true;
    }

    /// Processes pointer movement with no button held.
    ///
    /// Only updates the pen cursor preview; never touches the canvas.
    pub fn on_mouse_hover(&mut self, x: i32, y: i32) {
        if matches!(self.state, DrawingState::Idle) {
            self.hover = Some((x, y));
            if self.current_tool.is_freehand() {
                self.needs_redraw = true;
            }
        }
    }

    /// Processes mouse button release events.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was released
    /// * `x` - Mouse X coordinate at release
    /// * `y` - Mouse Y coordinate at release
    ///
    /// # Behavior
    /// When the left button is released during a gesture:
    /// - Shape tools stamp the final shape once
    /// - The select tool lifts the marquee region, or drops a moved selection
    ///   at its origin plus the drag delta
    /// - The cursor tool discards its marquee
    /// - Returns to Idle state
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Left {
            return;
        }

        match std::mem::replace(&mut self.state, DrawingState::Idle) {
            DrawingState::Idle => return,
            DrawingState::Drawing {
                tool,
                start_x,
                start_y,
                current_x,
                current_y,
            } => {
                if tool.is_freehand() {
                    if (current_x, current_y) != (x, y) {
                        let color = self.stroke_color(tool);
                        raster::draw_thick_line(
                            &mut self.canvas,
                            current_x,
                            current_y,
                            x,
                            y,
                            self.pen_size,
                            color,
                        );
                    }
                } else if let Some(shape) = Shape::from_drag(
                    tool,
                    (start_x, start_y),
                    (x, y),
                    self.current_color,
                    self.pen_size,
                    self.shading,
                ) {
                    debug!("Committing {tool} from ({start_x}, {start_y}) to ({x}, {y})");
                    shape.render(&mut self.canvas);
                }
            }
            DrawingState::Marquee {
                tool,
                start_x,
                start_y,
                ..
            } => {
                if tool == Tool::SelectAndMove {
                    self.lift_selection(start_x, start_y, x, y);
                }
            }
            DrawingState::MovingSelection {
                press_x, press_y, ..
            } => {
                if let Some(selection) = self.selection.take() {
                    let target = selection
                        .origin
                        .translate(x.saturating_sub(press_x), y.saturating_sub(press_y));
                    debug!("Dropping selection at ({}, {})", target.x, target.y);
                    transform::commit_region(&mut self.canvas, &selection.pixels, target.x, target.y);
                }
            }
        }
        self.needs_redraw = true;
    }

    fn lift_selection(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let Some(rect) = Rect::from_corners(x0, y0, x1, y1) else {
            debug!("Empty marquee; nothing selected");
            return;
        };
        self.selection = transform::crop_region(&mut self.canvas, rect);
        if let Some(selection) = &self.selection {
            debug!("Lifted selection {:?}", selection.origin);
        }
    }
}
