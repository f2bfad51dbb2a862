//! TTL (Time-to-live) system.
//!
//! Counts down every [`Ttl`](crate::components::ttl::Ttl) and despawns the
//! entity when it runs out. Dust particles are the only users.
//!
//! The countdown uses the already scaled
//! [`WorldTime::delta`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::*;

use crate::components::ttl::Ttl;
use crate::resources::worldtime::WorldTime;

pub fn ttl_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Ttl)>,
    mut commands: Commands,
) {
    let dt = world_time.delta;
    for (entity, mut ttl) in query.iter_mut() {
        if ttl.tick(dt) {
            commands.entity(entity).try_despawn();
        }
    }
}
