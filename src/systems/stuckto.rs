//! Follow binding system.
//!
//! Moves entities with a [`StuckTo`] component to their target's position
//! plus offset. The dust emitters use it to stay at the player's feet. A
//! binding whose target no longer exists is left where it is.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::stuckto::StuckTo;

pub fn stuck_to_entity_system(
    mut followers: Query<(&StuckTo, &mut MapPosition)>,
    targets: Query<&MapPosition, Without<StuckTo>>,
) {
    for (stuck_to, mut follower_pos) in followers.iter_mut() {
        if let Ok(target_pos) = targets.get(stuck_to.target) {
            follower_pos.pos = stuck_to.anchor(target_pos.pos);
        }
    }
}
