mod actions;
mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{DrawingState, InputState, MAX_PEN_SIZE, MIN_PEN_SIZE};
pub use render::Preview;
