//! Integer rasterization primitives.
//!
//! Every routine writes straight into a [`Canvas`] and only walks the part of
//! its geometry that can land on the grid. Coordinates may be any `i32`;
//! pixels outside the grid are dropped rather than reported.

use super::canvas::Canvas;
use super::color::Color;

// ============================================================================
// Lines
// ============================================================================

/// Computes the pixels of a Bresenham line, endpoints included.
///
/// Uses the integer error accumulator `err = dx - dy`, stepping x when
/// `2*err > -dy` and y when `2*err < dx`. Endpoints are ordered before stepping
/// so both directions of the same segment plot the same pixels.
pub fn line_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    walk_line(x0, y0, x1, y1, |x, y| points.push((x, y)));
    points
}

/// Visits every Bresenham pixel between two endpoints, in canonical order.
fn walk_line(x0: i32, y0: i32, x1: i32, y1: i32, mut visit: impl FnMut(i32, i32)) {
    let ((x, y), (x_end, y_end)) = if (x1, y1) < (x0, y0) {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };
    let (mut x, mut y) = (i64::from(x), i64::from(y));
    let (x_end, y_end) = (i64::from(x_end), i64::from(y_end));

    let dx = (x_end - x).abs();
    let dy = (y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        // every step stays between the two i32 endpoints
        visit(x as i32, y as i32);
        if x == x_end && y == y_end {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}

/// Clips a segment to the canvas grown by `margin` pixels on every side.
///
/// Segments already inside that area come back unchanged, so on-canvas lines
/// keep their exact Bresenham pixels. Returns `None` when the segment misses
/// the area entirely.
fn clip_segment(
    canvas: &Canvas,
    margin: i32,
    (x0, y0): (i32, i32),
    (x1, y1): (i32, i32),
) -> Option<((i32, i32), (i32, i32))> {
    let ((x0, y0), (x1, y1)) = if (x1, y1) < (x0, y0) {
        ((x1, y1), (x0, y0))
    } else {
        ((x0, y0), (x1, y1))
    };

    let min = -f64::from(margin);
    let max_x = f64::from(canvas.width()) - 1.0 + f64::from(margin);
    let max_y = f64::from(canvas.height()) - 1.0 + f64::from(margin);
    let inside = |x: i32, y: i32| {
        let (x, y) = (f64::from(x), f64::from(y));
        (min..=max_x).contains(&x) && (min..=max_y).contains(&y)
    };
    if inside(x0, y0) && inside(x1, y1) {
        return Some(((x0, y0), (x1, y1)));
    }

    // Liang-Barsky against the grown canvas
    let (fx, fy) = (f64::from(x0), f64::from(y0));
    let (dx, dy) = (f64::from(x1) - fx, f64::from(y1) - fy);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
    for (p, q) in [(-dx, fx - min), (dx, max_x - fx), (-dy, fy - min), (dy, max_y - fy)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| ((fx + t * dx).round() as i32, (fy + t * dy).round() as i32);
    Some((at(t0), at(t1)))
}

/// Draws a one-pixel Bresenham line.
pub fn draw_line_bresenham(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    let Some(((x0, y0), (x1, y1))) = clip_segment(canvas, 2, (x0, y0), (x1, y1)) else {
        return;
    };
    walk_line(x0, y0, x1, y1, |x, y| {
        canvas.set(x, y, color);
    });
}

/// Draws a line `width` pixels wide by stamping discs along the Bresenham path.
///
/// Widths of 0 or 1 fall back to the plain one-pixel line.
pub fn draw_thick_line(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: u32,
    color: Color,
) {
    if width <= 1 {
        draw_line_bresenham(canvas, x0, y0, x1, y1, color);
        return;
    }

    let radius = i32::try_from(width / 2).unwrap_or(i32::MAX);
    let margin = radius.saturating_add(2);
    let Some(((x0, y0), (x1, y1))) = clip_segment(canvas, margin, (x0, y0), (x1, y1)) else {
        return;
    };
    walk_line(x0, y0, x1, y1, |x, y| fill_disc(canvas, x, y, radius, color));
}

// ============================================================================
// Circles and ellipses
// ============================================================================

/// Computes the pixels of a midpoint circle, eight octant mirrors per step.
///
/// Starts at `(0, r)` with decision variable `p = 1 - r`, advancing `x` while
/// `x < y`. Points are not de-duplicated; negative radii yield nothing.
pub fn circle_points(xc: i32, yc: i32, r: i32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    walk_circle(xc, yc, r, None, |x, y| {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            points.push((x, y));
        }
    });
    points
}

/// Draws a one-pixel midpoint circle.
pub fn draw_circle_midpoint(canvas: &mut Canvas, xc: i32, yc: i32, r: i32, color: Color) {
    let bounds = (canvas.width(), canvas.height());
    walk_circle(xc, yc, r, Some(bounds), |x, y| {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            canvas.set(x, y, color);
        }
    });
}

/// Runs the midpoint walk, visiting all eight mirrors of every octant step.
///
/// With `clip` set, steps whose mirrors all miss a `width` x `height` grid are
/// jumped over, which keeps huge radii cheap.
fn walk_circle(
    xc: i32,
    yc: i32,
    r: i32,
    clip: Option<(u32, u32)>,
    mut visit: impl FnMut(i64, i64),
) {
    if r < 0 {
        return;
    }

    let (xc, yc, r) = (i64::from(xc), i64::from(yc), i64::from(r));
    // octant offsets that put some mirror on a visible column or row
    let lanes = clip.map(|(w, h)| {
        let (w, h) = (i64::from(w), i64::from(h));
        [
            (-xc, w - 1 - xc),
            (xc - (w - 1), xc),
            (-yc, h - 1 - yc),
            (yc - (h - 1), yc),
        ]
    });

    let mut x: i64 = 0;
    let mut y = r;
    let mut p = 1 - r;
    loop {
        for (px, py) in [
            (xc + x, yc + y),
            (xc - x, yc + y),
            (xc + x, yc - y),
            (xc - x, yc - y),
            (xc + y, yc + x),
            (xc - y, yc + x),
            (xc + y, yc - x),
            (xc - y, yc - x),
        ] {
            visit(px, py);
        }
        if x >= y {
            break;
        }

        if let Some(lanes) = &lanes {
            match skip_ahead(lanes, r, x) {
                Skip::Step => {}
                Skip::Stop => break,
                Skip::Jump { x: jx, y: jy } => {
                    x = jx;
                    y = jy;
                    p = decision_at(r, x, y);
                    continue;
                }
            }
        }

        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
    }
}

enum Skip {
    Step,
    Stop,
    Jump { x: i64, y: i64 },
}

/// Decides how a clipped walk continues after visiting step `x`.
fn skip_ahead(lanes: &[(i64, i64); 4], r: i64, x: i64) -> Skip {
    let next = x + 1;
    if lanes.iter().any(|&(lo, hi)| (lo..=hi).contains(&next)) {
        return Skip::Step;
    }
    let Some(target) = lanes.iter().map(|&(lo, _)| lo).filter(|&lo| lo > next).min() else {
        return Skip::Stop;
    };
    if !octant_is_closed_form(r, next) {
        return Skip::Step;
    }

    let land = if octant_is_closed_form(r, target) {
        target
    } else {
        // last step before the diagonal still given by the closed form
        let (mut lo, mut hi) = (next, target);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if octant_is_closed_form(r, mid) {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    };
    match octant_y(r, land) {
        Some(y) => Skip::Jump { x: land, y },
        None => Skip::Step,
    }
}

/// Row the midpoint walk holds at column `x`: the largest `y` with
/// `y * (y - 1) < r² - x²`.
///
/// Matches the stepped walk while it stays at least two rows above the
/// diagonal.
fn octant_y(r: i64, x: i64) -> Option<i64> {
    let d = i128::from(r) * i128::from(r) - i128::from(x) * i128::from(x);
    if d <= 0 {
        return None;
    }
    let mut y = ((1.0 + (1.0 + 4.0 * d as f64).sqrt()) / 2.0) as i128;
    while y > 0 && y * (y - 1) >= d {
        y -= 1;
    }
    while (y + 1) * y < d {
        y += 1;
    }
    i64::try_from(y).ok()
}

fn octant_is_closed_form(r: i64, x: i64) -> bool {
    octant_y(r, x).is_some_and(|y| y >= x + 2)
}

/// Decision variable held at `(x, y)`: `(x + 1)² + y² - y - r²`.
fn decision_at(r: i64, x: i64, y: i64) -> i64 {
    let (r, x, y) = (i128::from(r), i128::from(x), i128::from(y));
    let p = (x + 1) * (x + 1) + y * y - y - r * r;
    // within a few radii of zero on the walk
    p as i64
}

/// Inclusive span `lo..=hi` intersected with `0..len`, or `None` when they miss.
fn clip_span(lo: i64, hi: i64, len: u32) -> Option<(i32, i32)> {
    let lo = lo.max(0);
    let hi = hi.min(i64::from(len) - 1);
    // both ends now lie inside the canvas
    (lo <= hi).then(|| (lo as i32, hi as i32))
}

/// Fills a disc of `radius` pixels around `(cx, cy)`.
pub fn fill_disc(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius <= 0 {
        canvas.set(cx, cy, color);
        return;
    }

    let (cx, cy, radius) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(cx - radius, cx + radius, canvas.width()),
        clip_span(cy - radius, cy + radius, canvas.height()),
    ) else {
        return;
    };

    let limit = radius * radius + radius;
    for y in y_lo..=y_hi {
        let dy = i64::from(y) - cy;
        for x in x_lo..=x_hi {
            let dx = i64::from(x) - cx;
            if dx * dx + dy * dy <= limit {
                canvas.set(x, y, color);
            }
        }
    }
}

/// Ellipse inscribed in an inclusive pixel box, tested at pixel centers.
struct EllipseBox {
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
}

impl EllipseBox {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        let (lx, hx) = (f64::from(min_x), f64::from(max_x));
        let (ly, hy) = (f64::from(min_y), f64::from(max_y));
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            cx: (lx + hx + 1.0) / 2.0,
            cy: (ly + hy + 1.0) / 2.0,
            rx: (hx - lx + 1.0) / 2.0,
            ry: (hy - ly + 1.0) / 2.0,
        }
    }

    /// Normalized squared distance of the pixel center for the given radii.
    fn distance(&self, x: i32, y: i32, rx: f64, ry: f64) -> f64 {
        let dx = (f64::from(x) + 0.5 - self.cx) / rx;
        let dy = (f64::from(y) + 0.5 - self.cy) / ry;
        dx * dx + dy * dy
    }

    /// Paints the part of the ellipse that overlaps the canvas.
    fn paint(&self, canvas: &mut Canvas, width: Option<u32>, color: Color) {
        let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
            clip_span(self.min_x.into(), self.max_x.into(), canvas.width()),
            clip_span(self.min_y.into(), self.max_y.into(), canvas.height()),
        ) else {
            return;
        };

        let inner = width.map(|w| (self.rx - f64::from(w), self.ry - f64::from(w)));
        for y in y_lo..=y_hi {
            for x in x_lo..=x_hi {
                if self.distance(x, y, self.rx, self.ry) > 1.0 {
                    continue;
                }
                let hollow = match inner {
                    Some((irx, iry)) if irx > 0.0 && iry > 0.0 => {
                        self.distance(x, y, irx, iry) < 1.0
                    }
                    _ => false,
                };
                if !hollow {
                    canvas.set(x, y, color);
                }
            }
        }
    }
}

/// Strokes the ellipse inscribed in the box `(x0, y0)`-`(x1, y1)`, inclusive.
///
/// The stroke grows inward from the box edge.
pub fn stroke_ellipse(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: u32,
    color: Color,
) {
    EllipseBox::new(x0, y0, x1, y1).paint(canvas, Some(width.max(1)), color);
}

/// Fills the ellipse inscribed in the box `(x0, y0)`-`(x1, y1)`, inclusive.
pub fn fill_ellipse(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    EllipseBox::new(x0, y0, x1, y1).paint(canvas, None, color);
}

// ============================================================================
// Rectangles and polygons
// ============================================================================

/// Strokes the box `(x0, y0)`-`(x1, y1)`, inclusive, growing the stroke inward.
///
/// Paints every pixel closer than `width` to the box edge, as four bands
/// clipped to the canvas.
pub fn stroke_rect(
    canvas: &mut Canvas,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    width: u32,
    color: Color,
) {
    let (min_x, max_x) = (i64::from(x0.min(x1)), i64::from(x0.max(x1)));
    let (min_y, max_y) = (i64::from(y0.min(y1)), i64::from(y0.max(y1)));
    let band = i64::from(width.max(1)) - 1;

    fill_span_box(canvas, (min_x, min_y), (max_x, (min_y + band).min(max_y)), color);
    fill_span_box(canvas, (min_x, (max_y - band).max(min_y)), (max_x, max_y), color);
    fill_span_box(canvas, (min_x, min_y), ((min_x + band).min(max_x), max_y), color);
    fill_span_box(canvas, ((max_x - band).max(min_x), min_y), (max_x, max_y), color);
}

/// Fills the box `(x0, y0)`-`(x1, y1)`, inclusive.
pub fn fill_box(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    fill_span_box(
        canvas,
        (x0.min(x1).into(), y0.min(y1).into()),
        (x0.max(x1).into(), y0.max(y1).into()),
        color,
    );
}

fn fill_span_box(canvas: &mut Canvas, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Color) {
    let (Some((x_lo, x_hi)), Some((y_lo, y_hi))) = (
        clip_span(x0, x1, canvas.width()),
        clip_span(y0, y1, canvas.height()),
    ) else {
        return;
    };
    for y in y_lo..=y_hi {
        for x in x_lo..=x_hi {
            canvas.set(x, y, color);
        }
    }
}

/// Fills a polygon with the even-odd rule, sampling each row at pixel centers.
///
/// Fewer than three vertices fill nothing.
pub fn fill_polygon(canvas: &mut Canvas, vertices: &[(i32, i32)], color: Color) {
    if vertices.len() < 3 {
        return;
    }

    let min_y = vertices.iter().map(|&(_, y)| y).min().unwrap_or(0).max(0);
    let max_y = vertices
        .iter()
        .map(|&(_, y)| y)
        .max()
        .unwrap_or(0)
        .min(canvas.height() as i32 - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());
    let n = vertices.len();

    for y in min_y..=max_y {
        crossings.clear();
        let yf = y as f64 + 0.5;

        for i in 0..n {
            let (x1, y1) = vertices[i];
            let (x2, y2) = vertices[(i + 1) % n];
            let (y1f, y2f) = (y1 as f64, y2 as f64);
            if (y1f <= yf && y2f > yf) || (y2f <= yf && y1f > yf) {
                let t = (yf - y1f) / (y2f - y1f);
                let (x1f, x2f) = (f64::from(x1), f64::from(x2));
                crossings.push(x1f + 0.5 + t * (x2f - x1f));
            }
        }

        crossings.sort_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            // float-to-int casts saturate, then the span is clipped to the row
            let start = (pair[0] - 0.5).ceil() as i64;
            let end = (pair[1] - 0.5).floor() as i64;
            if let Some((start, end)) = clip_span(start, end, canvas.width()) {
                for x in start..=end {
                    canvas.set(x, y, color);
                }
            }
        }
    }
}

/// Strokes the closed outline through `vertices`.
pub fn stroke_polygon(canvas: &mut Canvas, vertices: &[(i32, i32)], width: u32, color: Color) {
    let n = vertices.len();
    if n == 0 {
        return;
    }
    for i in 0..n {
        let (x0, y0) = vertices[i];
        let (x1, y1) = vertices[(i + 1) % n];
        draw_thick_line(canvas, x0, y0, x1, y1, width, color);
    }
}

// ============================================================================
// Flood fill
// ============================================================================

/// Replaces the 4-connected region of the seed's color with `color`.
///
/// Uses an explicit stack. Returns the number of pixels repainted; a seed
/// outside the canvas or already painted `color` leaves the canvas untouched.
pub fn flood_fill(canvas: &mut Canvas, x: i32, y: i32, color: Color) -> usize {
    let Some(target) = canvas.get(x, y) else {
        return 0;
    };
    if target == color {
        return 0;
    }

    let mut filled = 0;
    let mut stack = vec![(x, y)];
    while let Some((cx, cy)) = stack.pop() {
        if canvas.get(cx, cy) != Some(target) {
            continue;
        }
        canvas.set(cx, cy, color);
        filled += 1;
        stack.extend_from_slice(&[(cx + 1, cy), (cx - 1, cy), (cx, cy + 1), (cx, cy - 1)]);
    }
    filled
}
