//! Library exports for the rasterpaint painting core.
//!
//! The pixel buffer, rasterizers and tool state machine live here so that any
//! frontend (the bundled headless CLI, or a GUI shell) drives the same code.
//! Frontends feed pointer events into [`input::InputState`] and draw the
//! canvas plus its [`input::Preview`].

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
