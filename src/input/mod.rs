//! Input handling and tool state machine.
//!
//! This module translates pointer events and toolbar actions into canvas edits.
//! It maintains the current tool, drawing parameters (color, pen size), the
//! floating selection, and the per-gesture state machine.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use state::{DrawingState, InputState, Preview};
pub use tool::Tool;
