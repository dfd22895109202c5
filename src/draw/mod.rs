//! Pixel buffer and rasterization primitives.
//!
//! This module defines the core painting types:
//! - [`Color`]: opaque RGB color with predefined color constants
//! - [`Canvas`]: the in-memory pixel grid every tool writes into
//! - [`Shape`]: geometry committed by the shape tools
//! - [`UndoStack`]: linear history of canvas snapshots
//! - Rasterizers ([`raster`]) and whole-image transforms ([`transform`])

pub mod canvas;
pub mod color;
pub mod history;
pub mod raster;
pub mod shape;
pub mod transform;

// Re-export commonly used types at module level
pub use canvas::Canvas;
pub use color::Color;
pub use history::UndoStack;
pub use shape::{Shading, Shape};
pub use transform::{Flip, Selection};

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, DARK_GRAY, GRAY, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
