//! Selection lifting and whole-image transforms.

use super::canvas::Canvas;
use crate::util::Rect;

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    /// Swap left and right (mirror across the vertical center line)
    Horizontal,
    /// Swap top and bottom (mirror across the horizontal center line)
    Vertical,
}

/// A rectangular region lifted off the canvas into a detached buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Where the pixels came from (already clipped to the canvas)
    pub origin: Rect,
    /// Detached copy of the lifted pixels
    pub pixels: Canvas,
}

/// Lifts `rect` off the canvas and blanks the source to the background color.
///
/// Returns `None` when the rectangle does not overlap the canvas.
pub fn crop_region(canvas: &mut Canvas, rect: Rect) -> Option<Selection> {
    let (origin, pixels) = canvas.sub_image(rect)?;
    canvas.fill_rect(origin, canvas.background());
    Some(Selection { origin, pixels })
}

/// Pastes a detached buffer with its top-left corner at `(x, y)`.
///
/// Opaque, last write wins; anything falling off the canvas is dropped.
pub fn commit_region(canvas: &mut Canvas, region: &Canvas, x: i32, y: i32) {
    canvas.paste(region, x, y);
}

/// Rotates a buffer 90° clockwise; the result has swapped dimensions.
pub fn rotate90(source: &Canvas) -> Canvas {
    let (width, height) = (source.width() as i32, source.height() as i32);
    let mut rotated = Canvas::new(height as u32, width as u32, source.background());
    for y in 0..height {
        for x in 0..width {
            if let Some(color) = source.get(x, y) {
                rotated.set(height - 1 - y, x, color);
            }
        }
    }
    rotated
}

/// Rotates the whole canvas 90° clockwise, keeping its dimensions.
///
/// The rotated image is centered on a fresh background canvas, cropping or
/// padding whichever axis no longer fits.
pub fn rotate_canvas(canvas: &mut Canvas) {
    let rotated = rotate90(canvas);
    let x = (canvas.width() as i32 - rotated.width() as i32).div_euclid(2);
    let y = (canvas.height() as i32 - rotated.height() as i32).div_euclid(2);

    let mut recentered = Canvas::new(canvas.width(), canvas.height(), canvas.background());
    recentered.paste(&rotated, x, y);
    *canvas = recentered;
}

/// Mirrors the whole canvas in place.
pub fn flip(canvas: &mut Canvas, axis: Flip) {
    let source = canvas.clone();
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);
    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = match axis {
                Flip::Horizontal => (width - 1 - x, y),
                Flip::Vertical => (x, height - 1 - y),
            };
            if let Some(color) = source.get(sx, sy) {
                canvas.set(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, GREEN, RED, WHITE};

    fn marked_canvas(width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height, WHITE);
        canvas.set(0, 0, RED);
        canvas.set(width as i32 - 1, 0, GREEN);
        canvas.set(0, height as i32 - 1, BLUE);
        canvas.set(1, 2, BLACK);
        canvas
    }

    #[test]
    fn crop_blanks_source_and_commit_restores_it() {
        let original = marked_canvas(10, 10);
        let mut canvas = original.clone();
        let rect = Rect::new(0, 0, 4, 4).unwrap();

        let selection = crop_region(&mut canvas, rect).unwrap();
        assert_eq!(selection.origin, rect);
        assert_eq!(canvas.get(0, 0), Some(WHITE));
        assert_eq!(canvas.get(1, 2), Some(WHITE));
        assert_eq!(selection.pixels.get(1, 2), Some(BLACK));

        commit_region(&mut canvas, &selection.pixels, rect.x, rect.y);
        assert_eq!(canvas, original);
    }

    #[test]
    fn crop_outside_canvas_yields_nothing() {
        let mut canvas = marked_canvas(10, 10);
        let before = canvas.clone();
        assert!(crop_region(&mut canvas, Rect::new(20, 20, 5, 5).unwrap()).is_none());
        assert_eq!(canvas, before);
    }

    #[test]
    fn commit_at_offset_clips_at_edges() {
        let mut canvas = Canvas::new(5, 5, WHITE);
        let mut region = Canvas::new(3, 3, WHITE);
        region.fill(RED);
        commit_region(&mut canvas, &region, 3, 3);
        assert_eq!(canvas.get(4, 4), Some(RED));
        assert_eq!(canvas.get(2, 2), Some(WHITE));
    }

    #[test]
    fn rotate90_moves_corners_clockwise() {
        let source = marked_canvas(4, 3);
        let rotated = rotate90(&source);
        assert_eq!((rotated.width(), rotated.height()), (3, 4));
        // top-left -> top-right, top-right -> bottom-right, bottom-left -> top-left
        assert_eq!(rotated.get(2, 0), Some(RED));
        assert_eq!(rotated.get(2, 3), Some(GREEN));
        assert_eq!(rotated.get(0, 0), Some(BLUE));
    }

    #[test]
    fn rotating_square_canvas_four_times_is_identity() {
        let original = marked_canvas(7, 7);
        let mut canvas = original.clone();
        for _ in 0..4 {
            rotate_canvas(&mut canvas);
        }
        assert_eq!(canvas, original);
    }

    #[test]
    fn rotating_wide_canvas_recenters_and_keeps_size() {
        let mut canvas = Canvas::new(6, 2, WHITE);
        canvas.set(0, 0, RED);
        rotate_canvas(&mut canvas);
        assert_eq!((canvas.width(), canvas.height()), (6, 2));
        // rotated is 2x6 pasted at (2, -2); the red pixel lands at (3, -2) and is cropped
        assert!(canvas.pixels().iter().all(|&p| p == WHITE));

        let mut canvas = Canvas::new(6, 2, WHITE);
        canvas.set(2, 1, RED);
        rotate_canvas(&mut canvas);
        assert_eq!(canvas.get(2, 0), Some(RED));
    }

    #[test]
    fn flips_mirror_along_each_axis() {
        let original = marked_canvas(5, 4);

        let mut horizontal = original.clone();
        flip(&mut horizontal, Flip::Horizontal);
        assert_eq!(horizontal.get(4, 0), Some(RED));
        assert_eq!(horizontal.get(0, 0), Some(GREEN));

        let mut vertical = original.clone();
        flip(&mut vertical, Flip::Vertical);
        assert_eq!(vertical.get(0, 3), Some(RED));
        assert_eq!(vertical.get(0, 0), Some(BLUE));

        flip(&mut vertical, Flip::Vertical);
        assert_eq!(vertical, original);
    }
}
