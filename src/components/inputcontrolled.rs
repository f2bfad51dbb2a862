//! Input-controlled movement component.
//!
//! [`PlatformerControlled`] describes how an entity responds to the
//! four-direction + jump contract. The
//! [`player_controller`](crate::systems::playercontroller::player_controller)
//! system reads it together with the current
//! [`InputState`](crate::resources::input::InputState) and the entity's
//! ground contact to write acceleration, drag and the jump impulse.

use bevy_ecs::prelude::Component;

/// Side-scroller control tuning for one entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct PlatformerControlled {
    /// Horizontal acceleration magnitude while a direction is held.
    pub acceleration: f32,
    /// Horizontal drag applied while no direction is held.
    pub drag: f32,
    /// Vertical velocity set on a jump. Negative is up.
    pub jump_velocity: f32,
}

impl PlatformerControlled {
    pub fn new(acceleration: f32, drag: f32, jump_velocity: f32) -> Self {
        Self {
            acceleration,
            drag,
            jump_velocity,
        }
    }
}
