use crate::draw::{Canvas, GRAY, Shape, raster};
use crate::util::Rect;

use super::{DrawingState, InputState};

/// Transient overlay the frontend draws on top of the canvas.
///
/// None of these are part of the pixel buffer; they disappear as soon as the
/// gesture that produced them ends.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview<'a> {
    /// Outline of the shape that the current drag would stamp
    Shape(Shape),
    /// Marquee rectangle being dragged by the cursor or select tool
    Marquee(Rect),
    /// Lifted pixels drawn at their current (possibly dragged) position
    FloatingSelection {
        x: i32,
        y: i32,
        pixels: &'a Canvas,
    },
    /// Pen-size circle under the pointer for pencil and eraser
    PenCursor { x: i32, y: i32, radius: i32 },
}

impl InputState {
    /// Returns what should be drawn over the canvas right now, if anything.
    ///
    /// # Returns
    /// - The shape outline while dragging a shape tool
    /// - The marquee rectangle while dragging the cursor or select tool
    /// - The floating selection while one exists (offset by any drag)
    /// - The pen cursor while hovering with pencil or eraser
    pub fn preview(&self) -> Option<Preview<'_>> {
        match self.state {
            DrawingState::Drawing {
                tool,
                start_x,
                start_y,
                current_x,
                current_y,
            } if tool.is_shape() => Shape::from_drag(
                tool,
                (start_x, start_y),
                (current_x, current_y),
                self.current_color,
                self.pen_size,
                self.shading,
            )
            .map(Preview::Shape),
            DrawingState::Marquee {
                start_x,
                start_y,
                current_x,
                current_y,
                ..
            } => Rect::from_corners(start_x, start_y, current_x, current_y).map(Preview::Marquee),
            DrawingState::MovingSelection {
                press_x,
                press_y,
                current_x,
                current_y,
            } => self
                .selection
                .as_ref()
                .map(|selection| {
                    let target = selection.origin.translate(
                        current_x.saturating_sub(press_x),
                        current_y.saturating_sub(press_y),
                    );
                    Preview::FloatingSelection {
                        x: target.x,
                        y: target.y,
                        pixels: &selection.pixels,
                    }
                }),
            _ => {
                if let Some(selection) = &self.selection {
                    return Some(Preview::FloatingSelection {
                        x: selection.origin.x,
                        y: selection.origin.y,
                        pixels: &selection.pixels,
                    });
                }
                let (x, y) = self.hover?;
                self.current_tool.is_freehand().then(|| Preview::PenCursor {
                    x,
                    y,
                    radius: (self.pen_size as i32 / 2).max(1),
                })
            }
        }
    }

    /// Renders the canvas with the current preview composited on top.
    ///
    /// The live canvas is left untouched. Outlines are drawn in gray; a
    /// floating selection is pasted and framed.
    pub fn compose_preview(&self) -> Canvas {
        let mut frame = self.canvas.clone();
        match self.preview() {
            Some(Preview::Shape(shape)) => shape.render_outline(&mut frame, GRAY),
            Some(Preview::Marquee(rect)) => stroke_frame(&mut frame, rect),
            Some(Preview::FloatingSelection { x, y, pixels }) => {
                frame.paste(pixels, x, y);
                if let Some(rect) = Rect::new(x, y, pixels.width() as i32, pixels.height() as i32) {
                    stroke_frame(&mut frame, rect);
                }
            }
            Some(Preview::PenCursor { x, y, radius }) => {
                raster::draw_circle_midpoint(&mut frame, x, y, radius, GRAY)
            }
            None => {}
        }
        frame
    }
}

fn stroke_frame(canvas: &mut Canvas, rect: Rect) {
    raster::stroke_rect(
        canvas,
        rect.x,
        rect.y,
        rect.right().saturating_sub(1),
        rect.bottom().saturating_sub(1),
        1,
        GRAY,
    );
}
