//! Scripted gesture replay for headless painting.
//!
//! A script is a TOML file holding an array of `[[step]]` tables, each tagged
//! by `action`. Steps map one-to-one onto pointer events and toolbar actions
//! of [`InputState`].
//!
//! ```toml
//! [[step]]
//! action = "tool"
//! name = "rectangle"
//!
//! [[step]]
//! action = "drag"
//! from = [10, 10]
//! to = [50, 50]
//! ```

use crate::config::ColorSpec;
use crate::input::{InputState, MouseButton, Tool};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Step {index}: unknown color {color:?}")]
    UnknownColor { index: usize, color: ColorSpec },
}

/// One scripted event or action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Select a tool by its snake_case name
    Tool { name: Tool },
    /// Pick a pen color
    Color { color: ColorSpec },
    /// Set the pen width (clamped to 1-50)
    PenSize { size: u32 },
    /// Left button press
    Press { x: i32, y: i32 },
    /// Pointer motion with the button held
    Move { x: i32, y: i32 },
    /// Left button release
    Release { x: i32, y: i32 },
    /// Pointer motion without a button
    Hover { x: i32, y: i32 },
    /// Press at `from`, move to `to`, release at `to`
    Drag { from: [i32; 2], to: [i32; 2] },
    Undo,
    Clear,
    Rotate,
    RotateSelection,
    FlipHorizontal,
    FlipVertical,
    /// Grow the canvas to at least this size
    Resize { width: u32, height: u32 },
}

impl Step {
    /// Feeds this step into the session.
    pub fn apply(&self, state: &mut InputState) {
        match *self {
            Step::Tool { name } => state.set_tool(name),
            Step::Color { ref color } => {
                state.set_color(Some(color.to_color()));
            }
            Step::PenSize { size } => state.set_pen_size(size),
            Step::Press { x, y } => state.on_mouse_press(MouseButton::Left, x, y),
            Step::Move { x, y } => state.on_mouse_motion(x, y),
            Step::Release { x, y } => state.on_mouse_release(MouseButton::Left, x, y),
            Step::Hover { x, y } => state.on_mouse_hover(x, y),
            Step::Drag {
                from: [x0, y0],
                to: [x1, y1],
            } => {
                state.on_mouse_press(MouseButton::Left, x0, y0);
                state.on_mouse_motion(x1, y1);
                state.on_mouse_release(MouseButton::Left, x1, y1);
            }
            Step::Undo => {
                state.undo();
            }
            Step::Clear => state.clear_canvas(),
            Step::Rotate => state.rotate_canvas(),
            Step::RotateSelection => {
                state.rotate_selection();
            }
            Step::FlipHorizontal => state.flip_horizontal(),
            Step::FlipVertical => state.flip_vertical(),
            Step::Resize { width, height } => {
                state.resize_canvas(width, height);
            }
        }
    }
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        source.parse()
    }

    /// Replays every step in order and returns how many ran.
    pub fn apply(&self, state: &mut InputState) -> usize {
        for (index, step) in self.steps.iter().enumerate() {
            debug!("Step {index}: {step:?}");
            step.apply(state);
        }
        self.steps.len()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let script: Script = toml::from_str(source)?;
        for (index, step) in script.steps.iter().enumerate() {
            if let Step::Color { color } = step
                && !color.is_known()
            {
                return Err(ScriptError::UnknownColor {
                    index,
                    color: color.clone(),
                });
            }
        }
        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, Shading, WHITE};

    fn session() -> InputState {
        InputState::with_defaults(40, 40, WHITE, BLUE, 1, Tool::Pencil, Shading::default(), 0)
    }

    #[test]
    fn parses_every_action() {
        let script: Script = r##"
            [[step]]
            action = "tool"
            name = "select_and_move"

            [[step]]
            action = "color"
            color = "#00ff00"

            [[step]]
            action = "pen-size"
            size = 4

            [[step]]
            action = "drag"
            from = [1, 2]
            to = [3, 4]

            [[step]]
            action = "rotate-selection"

            [[step]]
            action = "resize"
            width = 100
            height = 80
        "##
        .parse()
        .unwrap();

        assert_eq!(script.steps.len(), 6);
        assert_eq!(
            script.steps[0],
            Step::Tool {
                name: Tool::SelectAndMove
            }
        );
        assert_eq!(
            script.steps[3],
            Step::Drag {
                from: [1, 2],
                to: [3, 4]
            }
        );
        assert_eq!(script.steps[4], Step::RotateSelection);
    }

    #[test]
    fn rejects_unknown_action_and_color() {
        assert!(matches!(
            "[[step]]\naction = \"spray\"".parse::<Script>(),
            Err(ScriptError::Parse(_))
        ));
        assert!(matches!(
            "[[step]]\naction = \"color\"\ncolor = \"octarine\"".parse::<Script>(),
            Err(ScriptError::UnknownColor { index: 0, .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Script::load(Path::new("/nonexistent/steps.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/steps.toml"));
    }

    #[test]
    fn replay_drives_the_session() {
        let script: Script = r#"
            [[step]]
            action = "tool"
            name = "line_bresenham"

            [[step]]
            action = "drag"
            from = [0, 0]
            to = [10, 0]

            [[step]]
            action = "flip-vertical"
        "#
        .parse()
        .unwrap();

        let mut state = session();
        assert_eq!(script.apply(&mut state), 3);
        assert_eq!(state.current_tool, Tool::LineBresenham);
        assert_eq!(state.canvas.get(5, 39), Some(BLUE));
        assert_eq!(state.canvas.get(5, 0), Some(WHITE));
        assert_eq!(state.history.len(), 2);
    }
}
