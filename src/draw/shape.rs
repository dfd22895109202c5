//! Shape definitions stamped by the shape tools.

use super::canvas::Canvas;
use super::color::{Color, DARK_GRAY, GRAY};
use super::raster;
use crate::input::Tool;
use crate::util;

/// Colors and offsets for the fake-depth "3D" shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shading {
    /// Shadow offset for 3D rectangles, in pixels (applied as `+x, -y`)
    pub rectangle_offset: i32,
    /// Shadow offset for 3D circles, in pixels
    pub circle_offset: i32,
    /// Shadow offset for 3D triangles, in pixels
    pub triangle_offset: i32,
    /// Fill color of the offset shadow copy
    pub shadow_color: Color,
    /// Fill color of the connecting side faces
    pub side_color: Color,
}

impl Default for Shading {
    fn default() -> Self {
        Self {
            rectangle_offset: 10,
            circle_offset: 5,
            triangle_offset: 10,
            shadow_color: GRAY,
            side_color: DARK_GRAY,
        }
    }
}

/// Represents a shape committed by a press-drag-release gesture.
///
/// Each variant stores resolved geometry plus its own color and pen width,
/// so rendering does not depend on the session's current settings.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Straight line drawn with the pen width
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
        width: u32,
    },
    /// One-pixel integer Bresenham line
    BresenhamLine {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    },
    /// Rectangle outline between two inclusive corners
    Rect {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
        width: u32,
    },
    /// Ellipse outline inscribed in the box between two corners
    Oval {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
        width: u32,
    },
    /// One-pixel midpoint-algorithm circle
    MidpointCircle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
    },
    /// Circle outline drawn with the pen width
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
        width: u32,
    },
    /// Isosceles triangle outline with its apex on the top edge
    Triangle {
        points: [(i32, i32); 3],
        color: Color,
        width: u32,
    },
    /// Filled rectangle with an offset shadow and side faces
    Rect3d {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: Color,
        width: u32,
        shading: Shading,
    },
    /// Filled circle with an offset shadow
    Circle3d {
        cx: i32,
        cy: i32,
        radius: i32,
        color: Color,
        width: u32,
        shading: Shading,
    },
    /// Filled triangle with an offset shadow and connecting edges
    Triangle3d {
        points: [(i32, i32); 3],
        color: Color,
        shading: Shading,
    },
}

/// Triangle vertices for a drag: bottom-left, top-center, bottom-right.
fn triangle_points(x0: i32, y0: i32, x1: i32, y1: i32) -> [(i32, i32); 3] {
    // the midpoint of two i32 values always fits
    let apex_x = (i64::from(x0) + i64::from(x1)).div_euclid(2) as i32;
    [(x0, y1), (apex_x, y0), (x1, y1)]
}

fn offset_points(points: &[(i32, i32); 3], offset: i32) -> [(i32, i32); 3] {
    points.map(|(x, y)| (x.saturating_add(offset), y.saturating_sub(offset)))
}

/// Bounding box `(x0, y0, x1, y1)` of a circle, saturating at the i32 range.
fn circle_box(cx: i32, cy: i32, radius: i32) -> (i32, i32, i32, i32) {
    (
        cx.saturating_sub(radius),
        cy.saturating_sub(radius),
        cx.saturating_add(radius),
        cy.saturating_add(radius),
    )
}

impl Shape {
    /// Builds the shape a tool commits for a drag from `start` to `end`.
    ///
    /// Returns `None` for tools that do not stamp shapes.
    pub fn from_drag(
        tool: Tool,
        start: (i32, i32),
        end: (i32, i32),
        color: Color,
        width: u32,
        shading: Shading,
    ) -> Option<Self> {
        let (x0, y0) = start;
        let (x1, y1) = end;

        let shape = match tool {
            Tool::Line => Shape::Line {
                x1: x0,
                y1: y0,
                x2: x1,
                y2: y1,
                color,
                width,
            },
            Tool::LineBresenham => Shape::BresenhamLine {
                x1: x0,
                y1: y0,
                x2: x1,
                y2: y1,
                color,
            },
            Tool::Rectangle => Shape::Rect {
                x0,
                y0,
                x1,
                y1,
                color,
                width,
            },
            Tool::Oval => Shape::Oval {
                x0,
                y0,
                x1,
                y1,
                color,
                width,
            },
            Tool::CircleMidpoint => {
                let (cx, cy, radius) = util::inscribed_circle(x0, y0, x1, y1);
                Shape::MidpointCircle {
                    cx,
                    cy,
                    radius,
                    color,
                }
            }
            Tool::Circle => Shape::Circle {
                cx: x0,
                cy: y0,
                radius: util::drag_radius(x0, y0, x1, y1),
                color,
                width,
            },
            Tool::Triangle => Shape::Triangle {
                points: triangle_points(x0, y0, x1, y1),
                color,
                width,
            },
            Tool::Rectangle3d => Shape::Rect3d {
                x0,
                y0,
                x1,
                y1,
                color,
                width,
                shading,
            },
            Tool::Circle3d => Shape::Circle3d {
                cx: x0,
                cy: y0,
                radius: util::drag_radius(x0, y0, x1, y1),
                color,
                width,
                shading,
            },
            Tool::Triangle3d => Shape::Triangle3d {
                points: triangle_points(x0, y0, x1, y1),
                color,
                shading,
            },
            Tool::Pencil
            | Tool::Eraser
            | Tool::Fill
            | Tool::Cursor
            | Tool::SelectAndMove => return None,
        };
        Some(shape)
    }

    /// Rasterizes the shape into the canvas.
    pub fn render(&self, canvas: &mut Canvas) {
        match *self {
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
            } => raster::draw_thick_line(canvas, x1, y1, x2, y2, width, color),
            Shape::BresenhamLine {
                x1,
                y1,
                x2,
                y2,
                color,
            } => raster::draw_line_bresenham(canvas, x1, y1, x2, y2, color),
            Shape::Rect {
                x0,
                y0,
                x1,
                y1,
                color,
                width,
            } => raster::stroke_rect(canvas, x0, y0, x1, y1, width, color),
            Shape::Oval {
                x0,
                y0,
                x1,
                y1,
                color,
                width,
            } => raster::stroke_ellipse(canvas, x0, y0, x1, y1, width, color),
            Shape::MidpointCircle {
                cx,
                cy,
                radius,
                color,
            } => raster::draw_circle_midpoint(canvas, cx, cy, radius, color),
            Shape::Circle {
                cx,
                cy,
                radius,
                color,
                width,
            } => {
                let (x0, y0, x1, y1) = circle_box(cx, cy, radius);
                raster::stroke_ellipse(canvas, x0, y0, x1, y1, width, color)
            }
            Shape::Triangle {
                ref points,
                color,
                width,
            } => raster::stroke_polygon(canvas, points, width, color),
            Shape::Rect3d {
                x0,
                y0,
                x1,
                y1,
                color,
                width,
                shading,
            } => render_rect3d(canvas, (x0, y0, x1, y1), color, width, shading),
            Shape::Circle3d {
                cx,
                cy,
                radius,
                color,
                width,
                shading,
            } => {
                let o = shading.circle_offset;
                let (x0, y0, x1, y1) = circle_box(cx, cy, radius);
                raster::fill_ellipse(canvas, x0, y0, x1, y1, color);
                raster::stroke_ellipse(canvas, x0, y0, x1, y1, width, color);
                raster::fill_ellipse(
                    canvas,
                    x0.saturating_add(o),
                    y0.saturating_sub(o),
                    x1.saturating_add(o),
                    y1.saturating_sub(o),
                    shading.shadow_color,
                );
            }
            Shape::Triangle3d {
                ref points,
                color,
                shading,
            } => {
                let shadow = offset_points(points, shading.triangle_offset);
                raster::fill_polygon(canvas, points, color);
                raster::stroke_polygon(canvas, points, 1, color);
                raster::fill_polygon(canvas, &shadow, shading.shadow_color);
                raster::stroke_polygon(canvas, &shadow, 1, shading.shadow_color);
                for (&(bx, by), &(sx, sy)) in points.iter().zip(shadow.iter()) {
                    raster::draw_line_bresenham(canvas, bx, by, sx, sy, shading.side_color);
                }
            }
        }
    }

    /// Draws a one-pixel outline of the shape's main geometry.
    ///
    /// Used for non-committing previews; 3D variants preview their base shape only.
    pub fn render_outline(&self, canvas: &mut Canvas, color: Color) {
        match *self {
            Shape::Line { x1, y1, x2, y2, .. } | Shape::BresenhamLine { x1, y1, x2, y2, .. } => {
                raster::draw_line_bresenham(canvas, x1, y1, x2, y2, color)
            }
            Shape::Rect { x0, y0, x1, y1, .. } | Shape::Rect3d { x0, y0, x1, y1, .. } => {
                raster::stroke_rect(canvas, x0, y0, x1, y1, 1, color)
            }
            Shape::Oval { x0, y0, x1, y1, .. } => {
                raster::stroke_ellipse(canvas, x0, y0, x1, y1, 1, color)
            }
            Shape::MidpointCircle { cx, cy, radius, .. } => {
                raster::draw_circle_midpoint(canvas, cx, cy, radius, color)
            }
            Shape::Circle { cx, cy, radius, .. } | Shape::Circle3d { cx, cy, radius, .. } => {
                let (x0, y0, x1, y1) = circle_box(cx, cy, radius);
                raster::stroke_ellipse(canvas, x0, y0, x1, y1, 1, color)
            }
            Shape::Triangle { ref points, .. } | Shape::Triangle3d { ref points, .. } => {
                raster::stroke_polygon(canvas, points, 1, color)
            }
        }
    }
}

/// Filled box, shadow box offset `(+o, -o)`, then the two side quads.
fn render_rect3d(
    canvas: &mut Canvas,
    (x0, y0, x1, y1): (i32, i32, i32, i32),
    color: Color,
    width: u32,
    shading: Shading,
) {
    let o = shading.rectangle_offset;
    raster::fill_box(canvas, x0, y0, x1, y1, color);
    raster::stroke_rect(canvas, x0, y0, x1, y1, width, color);
    let (sx0, sy0) = (x0.saturating_add(o), y0.saturating_sub(o));
    let (sx1, sy1) = (x1.saturating_add(o), y1.saturating_sub(o));
    raster::fill_box(canvas, sx0, sy0, sx1, sy1, shading.shadow_color);

    for (x, sx) in [(x0, sx0), (x1, sx1)] {
        let side = [(x, y0), (sx, sy0), (sx, sy1), (x, y1)];
        raster::fill_polygon(canvas, &side, shading.side_color);
        raster::stroke_polygon(canvas, &side, 1, shading.side_color);
    }
}
