//! Per-frame keyboard input resources.
//!
//! The keyboard collaborator writes the raw held state of the four actions
//! into [`RawInput`] before each frame. The
//! [`update_input_state`](crate::systems::input::update_input_state) system
//! turns that into [`InputState`], deriving the "just pressed" and "just
//! released" edges from the previous frame.
//!
//! [`InputScript`] replaces the keyboard in the headless binary.
use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

/// Raw held state of the four actions for this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub up: bool,
    #[serde(default)]
    pub reset: bool,
}

impl RawInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn left() -> Self {
        Self {
            left: true,
            ..Self::default()
        }
    }

    pub fn right() -> Self {
        Self {
            right: true,
            ..Self::default()
        }
    }

    pub fn up() -> Self {
        Self {
            up: true,
            ..Self::default()
        }
    }

    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean key state with edge detection.
pub struct BoolState {
    /// Whether the key is currently active/pressed this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    /// Feed this frame's held state. Edges fire for exactly one frame.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }
}

/// Resource capturing the per-frame state of the gameplay actions.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left: BoolState,
    pub right: BoolState,
    /// Jump.
    pub up: BoolState,
    /// Restart the session.
    pub reset: BoolState,
}

impl InputState {
    /// Whether either horizontal direction is held.
    pub fn horizontal_active(&self) -> bool {
        self.left.active || self.right.active
    }
}

/// One step of a scripted input timeline: hold these keys for `frames` frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub frames: u32,
    #[serde(flatten)]
    pub input: RawInput,
}

/// Scripted input timeline, loaded from JSON.
///
/// ```json
/// { "steps": [ { "frames": 30, "right": true }, { "frames": 1, "right": true, "up": true } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    /// Load a script from a JSON file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {}: {}", path.display(), e))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse input script {}: {}", path.display(), e))
    }

    /// Total number of frames covered by the script.
    pub fn len_frames(&self) -> u32 {
        self.steps.iter().map(|s| s.frames).sum()
    }

    /// Input for the zero-based `frame`. Past the end nothing is held.
    pub fn input_at(&self, frame: u32) -> RawInput {
        let mut start = 0;
        for step in &self.steps {
            if frame < start + step.frames {
                return step.input;
            }
            start += step.frames;
        }
        RawInput::none()
    }
}
