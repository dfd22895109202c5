//! In-memory RGB pixel buffer.

use super::color::Color;
use crate::util::Rect;

/// Fixed-size grid of opaque RGB pixels.
///
/// Pixels are stored row-major. Every accessor takes signed coordinates and
/// silently ignores anything outside the grid, so rasterizers can plot
/// freely without clipping first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Creates a canvas filled with `background`.
    ///
    /// Zero dimensions are bumped to 1 so the grid is never empty.
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            background,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color used for clearing, erasing and blanking lifted selections.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Returns true if `(x, y)` addresses a pixel of this canvas.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Reads a pixel, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes a pixel. Returns `false` (and does nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Paints every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Resets every pixel to the background color.
    pub fn clear(&mut self) {
        self.fill(self.background);
    }

    /// Paints the part of `rect` that overlaps the canvas.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clipped) = rect.clamp_to_bounds(self.width as i32, self.height as i32) else {
            return;
        };
        let stride = self.width as usize;
        for y in clipped.y..clipped.bottom() {
            let row = y as usize * stride;
            self.pixels[row + clipped.x as usize..row + clipped.right() as usize].fill(color);
        }
    }

    /// Copies the overlap of `rect` and the canvas into a new buffer.
    ///
    /// Returns the clipped rectangle alongside its pixels, or `None` when the
    /// rectangle lies entirely outside.
    pub fn sub_image(&self, rect: Rect) -> Option<(Rect, Canvas)> {
        let clipped = rect.clamp_to_bounds(self.width as i32, self.height as i32)?;
        let mut region = Canvas::new(clipped.width as u32, clipped.height as u32, self.background);
        for y in 0..clipped.height {
            for x in 0..clipped.width {
                if let Some(color) = self.get(clipped.x + x, clipped.y + y) {
                    region.set(x, y, color);
                }
            }
        }
        Some((clipped, region))
    }

    /// Pastes `source` with its top-left corner at `(x, y)`.
    ///
    /// The paste is opaque; source pixels falling outside the canvas are dropped.
    pub fn paste(&mut self, source: &Canvas, x: i32, y: i32) {
        for sy in 0..source.height as i32 {
            for sx in 0..source.width as i32 {
                if let Some(color) = source.get(sx, sy) {
                    self.set(x.saturating_add(sx), y.saturating_add(sy), color);
                }
            }
        }
    }

    /// Grows the canvas, keeping existing content anchored at the origin.
    ///
    /// Each axis becomes the larger of its current and requested size, so
    /// content is never cropped. Returns `false` when neither axis grows.
    pub fn grow_to(&mut self, width: u32, height: u32) -> bool {
        let new_width = self.width.max(width);
        let new_height = self.height.max(height);
        if new_width == self.width && new_height == self.height {
            return false;
        }

        let mut grown = Canvas::new(new_width, new_height, self.background);
        grown.paste(self, 0, 0);
        *self = grown;
        true
    }

    /// Flattens the pixels into packed `RGB8` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|color| color.to_rgb()).collect()
    }
}
