//! Handles to the entities of the current session.
//!
//! A session is everything spawned from the [`LevelDefinition`] for one
//! playthrough attempt. Its entities all carry a
//! [`Group`](crate::components::group::Group) so a restart can discard them
//! wholesale; this resource only keeps direct handles to the ones systems
//! need by identity.
//!
//! [`LevelDefinition`]: crate::resources::level::LevelDefinition

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    /// Incremented on every restart, starting at 1.
    pub generation: u32,
    pub player: Entity,
    pub walking_emitter: Entity,
    pub jumping_emitter: Entity,
}
