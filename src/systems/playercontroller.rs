//! Side-scroller movement controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! the body's last reported [`Contacts`] and writes the control signals of
//! entities with a [`PlatformerControlled`] component:
//!
//! - left held: acceleration `-A`, no drag, facing left
//! - else right held: acceleration `+A`, no drag, facing right
//! - neither: acceleration `0`, drag `D`
//! - jump on the rising edge of `up` while grounded
//!
//! Acceleration and drag are never both nonzero for the same frame. Speed
//! clamping belongs to the physics step.
//!
//! [`freeze_horizontal_control`] runs right after the controller and
//! overrides it once the session outcome is terminal.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::inputcontrolled::PlatformerControlled;
use crate::components::player::{Contacts, Facing, Player};
use crate::components::rigidbody::RigidBody;
use crate::events::audio::AudioCmd;
use crate::resources::audio::JUMP_CUE;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::GameState;
use crate::resources::input::InputState;

/// Write acceleration, drag, facing and the jump impulse from input.
pub fn player_controller(
    mut query: Query<(
        &PlatformerControlled,
        &mut RigidBody,
        &mut Player,
        Option<&Contacts>,
    )>,
    input: Res<InputState>,
    config: Res<GameConfig>,
    mut audio: MessageWriter<AudioCmd>,
) {
    for (controlled, mut rb, mut player, contacts) in query.iter_mut() {
        if input.left.active {
            rb.set_horizontal_acceleration(-controlled.acceleration);
            rb.set_horizontal_drag(0.0);
            player.facing = Facing::Left;
        } else if input.right.active {
            rb.set_horizontal_acceleration(controlled.acceleration);
            rb.set_horizontal_drag(0.0);
            player.facing = Facing::Right;
        } else {
            rb.set_horizontal_acceleration(0.0);
            rb.set_horizontal_drag(controlled.drag);
        }

        let grounded = contacts.is_some_and(Contacts::ground_contact);
        if input.up.just_pressed && grounded {
            rb.set_vertical_velocity(controlled.jump_velocity);
            audio.write(AudioCmd::play(JUMP_CUE, config.volume));
            debug!("jump vy={}", controlled.jump_velocity);
        }
    }
}

/// Force horizontal acceleration to zero while the outcome is terminal.
///
/// Drag is applied instead so the character slides to a stop. Vertical
/// motion is left to the physics step.
pub fn freeze_horizontal_control(
    state: Res<GameState>,
    mut query: Query<(&PlatformerControlled, &mut RigidBody)>,
) {
    if !state.is_terminal() {
        return;
    }
    for (controlled, mut rb) in query.iter_mut() {
        rb.set_horizontal_acceleration(0.0);
        rb.set_horizontal_drag(controlled.drag);
    }
}
