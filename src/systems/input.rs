//! Input systems.
//!
//! [`update_input_state`] turns the keyboard collaborator's [`RawInput`]
//! snapshot into [`InputState`], deriving one-frame edges for every action.
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::input::{InputState, RawInput};

/// Fold this frame's raw held state into `InputState`.
pub fn update_input_state(raw: Res<RawInput>, mut input: ResMut<InputState>) {
    input.left.update(raw.left);
    input.right.update(raw.right);
    input.up.update(raw.up);
    input.reset.update(raw.reset);

    if input.up.just_pressed {
        debug!("up pressed");
    }
    if input.reset.just_pressed {
        debug!("reset pressed");
    }
}
