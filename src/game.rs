//! Session construction and the per-frame schedule.
//!
//! [`Game`] owns the ECS [`World`] and the frame [`Schedule`]. One call to
//! [`Game::step`] runs one frame:
//!
//! ```text
//! Input -> Control -> Physics -> React -> Outcome -> Reset -> Present
//! ```
//!
//! Session entities are spawned by [`spawn_session`] from the
//! [`LevelDefinition`] and all carry a [`Group`]. [`restart_session`]
//! despawns them and spawns a fresh set, resetting every session resource
//! with them.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::SystemSet;
use glam::Vec2;
use log::info;

use crate::components::animation::{Animation, AnimationClip};
use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::{Collectible, CollectibleKind};
use crate::components::collision::OverlapRule;
use crate::components::group::Group;
use crate::components::inputcontrolled::PlatformerControlled;
use crate::components::mapposition::MapPosition;
use crate::components::particleemitter::ParticleEmitter;
use crate::components::player::{Contacts, Player};
use crate::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use crate::components::sprite::Sprite;
use crate::components::stuckto::StuckTo;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::collision::OverlapMessage;
use crate::events::gamestate::observe_outcome_changed;
use crate::resources::animationstore::AnimationStore;
use crate::resources::camera::CameraBinding;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameOutcome, GameState};
use crate::resources::input::{InputState, RawInput};
use crate::resources::level::LevelDefinition;
use crate::resources::session::Session;
use crate::resources::status::StatusText;
use crate::resources::systemsstore::{RESTART_SESSION, SystemsStore};
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, animation_controller};
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::collision::{
    GROUND_GROUP, body_collision_system, overlap_detector, update_overlap_messages,
};
use crate::systems::input::update_input_state;
use crate::systems::movement::movement_system;
use crate::systems::outcome::game_outcome_tracker;
use crate::systems::particleemitter::{particle_emitter_system, vfx_trigger};
use crate::systems::playercontroller::{freeze_horizontal_control, player_controller};
use crate::systems::reset::reset_handler;
use crate::systems::stuckto::stuck_to_entity_system;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;

pub const PLAYER_GROUP: &str = "player";
pub const EMITTERS_GROUP: &str = "emitters";
pub const RULES_GROUP: &str = "rules";

/// Ordered phases of one frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Control,
    Physics,
    React,
    Outcome,
    Reset,
    Present,
}

/// Build the schedule that advances one frame.
pub fn build_frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.configure_sets(
        (
            FrameSet::Input,
            FrameSet::Control,
            FrameSet::Physics,
            FrameSet::React,
            FrameSet::Outcome,
            FrameSet::Reset,
            FrameSet::Present,
        )
            .chain(),
    );
    schedule.add_systems(
        (
            update_overlap_messages,
            update_bevy_audio_cmds,
            update_input_state,
        )
            .in_set(FrameSet::Input),
    );
    schedule.add_systems(
        (player_controller, freeze_horizontal_control)
            .chain()
            .in_set(FrameSet::Control),
    );
    schedule.add_systems(
        (movement_system, body_collision_system, overlap_detector, ttl_system)
            .chain()
            .in_set(FrameSet::Physics),
    );
    schedule.add_systems(
        (
            (animation_controller, animation).chain(),
            (vfx_trigger, stuck_to_entity_system, particle_emitter_system).chain(),
        )
            .in_set(FrameSet::React),
    );
    schedule.add_systems(game_outcome_tracker.in_set(FrameSet::Outcome));
    schedule.add_systems(reset_handler.in_set(FrameSet::Reset));
    schedule.add_systems(
        (
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain()
            .in_set(FrameSet::Present),
    );
    schedule
}

/// Spawn every entity of a fresh session and return its handles.
pub fn spawn_session(world: &mut World, generation: u32) -> Session {
    let config = world.resource::<GameConfig>().clone();
    let level = world.resource::<LevelDefinition>().clone();

    for rect in &level.ground {
        world.spawn((
            Group::new(GROUND_GROUP),
            MapPosition::new(rect.x, rect.y),
            BoxCollider::new(rect.w, rect.h),
        ));
    }

    let collectible_size = level.tile_size;
    for (kind, points, tex_key) in [
        (CollectibleKind::Coin, &level.coins, "coin"),
        (CollectibleKind::Flag, &level.flags, "flag"),
    ] {
        for point in points {
            world.spawn((
                Group::new(kind.group()),
                Collectible::new(kind),
                MapPosition::from_vec(*point),
                BoxCollider::centered(collectible_size, collectible_size),
                Sprite::new(tex_key),
            ));
        }
    }

    let mut body = RigidBody::new()
        .with_max_velocity(Vec2::new(config.max_speed_x, config.max_speed_y));
    body.add_force(GRAVITY_FORCE, Vec2::new(0.0, config.gravity));
    body.set_horizontal_acceleration(0.0);

    let player = world
        .spawn((
            Group::new(PLAYER_GROUP),
            Player::default(),
            PlatformerControlled::new(config.acceleration, config.drag, config.jump_velocity),
            MapPosition::from_vec(level.spawn),
            body,
            BoxCollider::centered(config.player_width, config.player_height),
            Contacts::default(),
            Animation::new(AnimationClip::Idle),
            Sprite::new("character00"),
        ))
        .id();

    let walking_emitter = world
        .spawn((
            Group::new(EMITTERS_GROUP),
            ParticleEmitter::walking(config.emissions_per_second, config.particle_lifespan),
            StuckTo::new(player),
            MapPosition::from_vec(level.spawn),
        ))
        .id();
    let jumping_emitter = world
        .spawn((
            Group::new(EMITTERS_GROUP),
            ParticleEmitter::jumping(
                config.emissions_per_second,
                config.particle_lifespan,
                config.jump_max_alive,
            ),
            StuckTo::new(player),
            MapPosition::from_vec(level.spawn),
        ))
        .id();

    for kind in [CollectibleKind::Coin, CollectibleKind::Flag] {
        world.spawn((
            Group::new(RULES_GROUP),
            OverlapRule::new(PLAYER_GROUP, kind.group()),
        ));
    }

    world.insert_resource(CameraBinding::follow(
        player,
        Vec2::new(level.width, level.height),
        config.camera_lerp,
        config.camera_deadzone,
        config.camera_zoom,
    ));
    world.insert_resource(GameState::new());
    world.insert_resource(StatusText::default());

    let session = Session {
        generation,
        player,
        walking_emitter,
        jumping_emitter,
    };
    world.insert_resource(session);
    info!(
        "session {} started in '{}' ({} coins, {} flags)",
        generation,
        level.name,
        level.coins.len(),
        level.flags.len()
    );
    session
}

/// One-shot system: discard the current session and build a new one.
pub fn restart_session(world: &mut World) {
    let generation = world
        .get_resource::<Session>()
        .map_or(1, |session| session.generation + 1);

    let mut query = world.query_filtered::<Entity, With<Group>>();
    let entities: Vec<Entity> = query.iter(world).collect();
    for entity in entities {
        world.despawn(entity);
    }
    world.resource_mut::<Messages<OverlapMessage>>().clear();

    spawn_session(world, generation);
}

/// Owner of the world and the frame schedule.
pub struct Game {
    world: World,
    schedule: Schedule,
}

impl Game {
    /// Build a world for `level` tuned by `config` and start the first session.
    pub fn new(config: GameConfig, level: LevelDefinition) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(config);
        world.insert_resource(level);
        world.insert_resource(AnimationStore::default());
        world.init_resource::<RawInput>();
        world.init_resource::<InputState>();
        world.init_resource::<Messages<OverlapMessage>>();
        world.init_resource::<Messages<AudioCmd>>();
        world.init_resource::<Messages<AudioMessage>>();
        world.add_observer(observe_outcome_changed);

        let mut systems_store = SystemsStore::new();
        let restart_id = world.register_system(restart_session);
        systems_store.insert(RESTART_SESSION, restart_id);
        world.insert_resource(systems_store);
        world.flush();

        spawn_session(&mut world, 1);

        Self {
            world,
            schedule: build_frame_schedule(),
        }
    }

    /// Advance one frame with this frame's raw input and delta seconds.
    pub fn step(&mut self, input: RawInput, dt: f32) {
        self.world.insert_resource(input);
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Restart immediately, outside of the frame loop.
    pub fn restart(&mut self) {
        restart_session(&mut self.world);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn session(&self) -> Session {
        *self.world.resource::<Session>()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.world.resource::<GameState>().outcome()
    }

    pub fn coins_collected(&self) -> u32 {
        self.world.resource::<GameState>().coins_collected()
    }

    pub fn status(&self) -> &StatusText {
        self.world.resource::<StatusText>()
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<MapPosition>(self.session().player)
            .map_or(Vec2::ZERO, |p| p.pos)
    }

    /// Player components the core writes or reads, if the player exists.
    pub fn player<C: Component>(&self) -> Option<&C> {
        self.world.get::<C>(self.session().player)
    }

    pub fn emitter(&self, entity: Entity) -> Option<&ParticleEmitter> {
        self.world.get::<ParticleEmitter>(entity)
    }

    /// Drain every queued audio command.
    pub fn drain_audio(&mut self) -> Vec<AudioCmd> {
        self.world
            .resource_mut::<Messages<AudioCmd>>()
            .drain()
            .collect()
    }
}
