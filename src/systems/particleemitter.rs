//! Dust effect systems.
//!
//! - [`vfx_trigger`] decides every frame which of the two emitters runs and
//!   refreshes its follow offset and particle speed.
//! - [`particle_emitter_system`] spawns [`Particle`] entities from active
//!   emitters.
//!
//! # Behavior
//!
//! - Walking dust runs while a direction is held and the player is grounded.
//!   It trails behind the feet, on the side opposite to the facing.
//! - Jumping puffs run while the player is airborne and stop on the frame
//!   ground contact comes back.
//! - Emission accumulates time and catches up if dt is large. When an
//!   emitter's `max_alive` is reached the pending emission is dropped.
//!
//! # Coordinate System
//!
//! - Y+ is down (screen coordinates)

use bevy_ecs::prelude::*;
use fastrand::Rng;
use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::particleemitter::{EmitterId, Particle, ParticleEmitter};
use crate::components::player::{Contacts, Facing, Player};
use crate::components::rigidbody::RigidBody;
use crate::components::stuckto::StuckTo;
use crate::components::ttl::Ttl;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Group of spawned particle entities.
pub const PARTICLES_GROUP: &str = "particles";

/// Follow offset and particle speed of the walking dust for `facing`.
pub fn walking_follow(config: &GameConfig, facing: Facing) -> (Vec2, Vec2) {
    let trailing = -facing.sign();
    (
        Vec2::new(trailing * config.walk_trail_offset, config.foot_offset),
        Vec2::new(trailing * config.particle_velocity, 0.0),
    )
}

/// Follow offset and particle speed of the jumping puffs.
pub fn jumping_follow(config: &GameConfig) -> (Vec2, Vec2) {
    (
        Vec2::new(config.jump_offset_x, config.foot_offset),
        Vec2::new(config.particle_velocity, 0.0),
    )
}

/// Start, stop and re-aim both emitters from the player's state.
pub fn vfx_trigger(
    players: Query<(Entity, &Player, Option<&Contacts>)>,
    mut emitters: Query<(&mut ParticleEmitter, &mut StuckTo)>,
    input: Res<InputState>,
    config: Res<GameConfig>,
) {
    let Ok((player_entity, player, contacts)) = players.single() else {
        return;
    };
    let grounded = contacts.is_some_and(Contacts::ground_contact);

    for (mut emitter, mut stuck_to) in emitters.iter_mut() {
        let (active, (offset, speed)) = match emitter.id {
            EmitterId::Walking => (
                input.horizontal_active() && grounded,
                walking_follow(&config, player.facing),
            ),
            EmitterId::Jumping => (!grounded, jumping_follow(&config)),
        };

        if active {
            stuck_to.follow(player_entity, offset);
            emitter.set_speed(speed);
            if !emitter.active {
                emitter.start();
            }
        } else if emitter.active {
            emitter.stop();
        }
    }
}

/// Sample a random f32 in the range between `a` and `b`.
#[inline]
fn random_f32_between(rng: &mut Rng, a: f32, b: f32) -> f32 {
    let (min, max) = if a <= b { (a, b) } else { (b, a) };
    let range = max - min;
    if range < f32::EPSILON {
        return min;
    }
    min + rng.f32() * range
}

/// Spawn particles from active emitters.
///
/// # Ordering
///
/// Runs after [`crate::systems::stuckto::stuck_to_entity_system`] so
/// particles appear at the emitter's current follow position.
pub fn particle_emitter_system(
    mut emitter_query: Query<(&MapPosition, &mut ParticleEmitter)>,
    particles: Query<&Particle>,
    time: Res<WorldTime>,
    mut commands: Commands,
    mut rng: Local<Rng>,
) {
    let dt = time.delta; // delta is already scaled
    if dt <= 0.0 {
        return;
    }

    let mut alive: FxHashMap<EmitterId, u32> = FxHashMap::default();
    for particle in particles.iter() {
        *alive.entry(particle.emitter).or_default() += 1;
    }

    for (position, mut emitter) in emitter_query.iter_mut() {
        if !emitter.active || emitter.frames.is_empty() || emitter.emissions_per_second <= 0.0 {
            continue;
        }

        let period = 1.0 / emitter.emissions_per_second;
        emitter.time_since_emit += dt;

        // Catch-up loop: emit multiple times if dt is large
        while emitter.time_since_emit >= period {
            emitter.time_since_emit -= period;

            let count = alive.entry(emitter.id).or_default();
            if emitter.max_alive.is_some_and(|max| *count >= max) {
                continue;
            }
            *count += 1;

            let frame = emitter.frames[rng.usize(0..emitter.frames.len())].clone();
            let scale = random_f32_between(&mut rng, emitter.scale_start, emitter.scale_end);
            commands.spawn((
                Particle {
                    emitter: emitter.id,
                    frame,
                    scale,
                },
                MapPosition::from_vec(position.pos),
                RigidBody::with_velocity(emitter.speed),
                Ttl::new(emitter.lifespan),
                Group::new(PARTICLES_GROUP),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::RawInput;
    use crate::systems::input::update_input_state;

    struct Rig {
        world: World,
        schedule: Schedule,
        player: Entity,
        walking: Entity,
        jumping: Entity,
    }

    fn rig(contacts: Contacts) -> Rig {
        let mut world = World::new();
        world.init_resource::<InputState>();
        world.init_resource::<RawInput>();
        world.insert_resource(GameConfig::new());
        world.insert_resource(WorldTime {
            delta: 1.0 / 60.0,
            ..WorldTime::default()
        });
        let player = world
            .spawn((Player::default(), MapPosition::new(100.0, 100.0), contacts))
            .id();
        let walking = world
            .spawn((
                ParticleEmitter::walking(60.0, 0.35),
                StuckTo::new(player),
                MapPosition::new(0.0, 0.0),
            ))
            .id();
        let jumping = world
            .spawn((
                ParticleEmitter::jumping(600.0, 0.35, 20),
                StuckTo::new(player),
                MapPosition::new(0.0, 0.0),
            ))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems((update_input_state, vfx_trigger, particle_emitter_system).chain());
        Rig {
            world,
            schedule,
            player,
            walking,
            jumping,
        }
    }

    fn active(world: &World, e: Entity) -> bool {
        world.get::<ParticleEmitter>(e).unwrap().active
    }

    #[test]
    fn walking_dust_needs_input_and_ground() {
        let mut r = rig(Contacts::grounded());
        r.world.insert_resource(RawInput::right());
        r.schedule.run(&mut r.world);
        assert!(active(&r.world, r.walking));
        assert!(!active(&r.world, r.jumping));

        r.world.insert_resource(RawInput::none());
        r.schedule.run(&mut r.world);
        assert!(!active(&r.world, r.walking));

        r.world.insert_resource(RawInput::right());
        *r.world.get_mut::<Contacts>(r.player).unwrap() = Contacts::airborne();
        r.schedule.run(&mut r.world);
        assert!(!active(&r.world, r.walking));
        assert!(active(&r.world, r.jumping));
    }

    #[test]
    fn walking_offset_trails_the_facing() {
        let config = GameConfig::new();
        let (right_offset, right_speed) = walking_follow(&config, Facing::Right);
        let (left_offset, left_speed) = walking_follow(&config, Facing::Left);
        assert!(right_offset.x < 0.0 && left_offset.x > 0.0);
        assert_eq!(right_offset.x, -left_offset.x);
        assert!(right_speed.x < 0.0 && left_speed.x > 0.0);
        assert_eq!(right_offset.y, config.foot_offset);
    }

    #[test]
    fn jumping_puffs_stop_on_landing() {
        let mut r = rig(Contacts::airborne());
        r.schedule.run(&mut r.world);
        assert!(active(&r.world, r.jumping));
        *r.world.get_mut::<Contacts>(r.player).unwrap() = Contacts::grounded();
        r.schedule.run(&mut r.world);
        assert!(!active(&r.world, r.jumping));
    }

    #[test]
    fn unreported_contact_runs_jumping_puffs() {
        let mut r = rig(Contacts::default());
        r.schedule.run(&mut r.world);
        assert!(active(&r.world, r.jumping));
    }

    #[test]
    fn jumping_particles_are_capped() {
        let mut r = rig(Contacts::airborne());
        for _ in 0..10 {
            r.schedule.run(&mut r.world);
        }
        let mut q = r.world.query::<&Particle>();
        let jumping = q
            .iter(&r.world)
            .filter(|p| p.emitter == EmitterId::Jumping)
            .count();
        assert_eq!(jumping, 20);
    }

    #[test]
    fn trigger_rebinds_follow_target() {
        let mut r = rig(Contacts::airborne());
        r.schedule.run(&mut r.world);
        let stuck = r.world.get::<StuckTo>(r.jumping).unwrap();
        assert_eq!(stuck.target, r.player);
        assert_eq!(stuck.offset, jumping_follow(&GameConfig::new()).0);
    }
}
