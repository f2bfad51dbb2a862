//! Tick integration tests driving hand-picked systems over a small world.

use bevy_ecs::prelude::*;
use glam::Vec2;

use snowday::components::animation::{Animation, AnimationClip};
use snowday::components::boxcollider::BoxCollider;
use snowday::components::collectible::{Collectible, CollectibleKind};
use snowday::components::collision::OverlapRule;
use snowday::components::group::Group;
use snowday::components::inputcontrolled::PlatformerControlled;
use snowday::components::mapposition::MapPosition;
use snowday::components::particleemitter::ParticleEmitter;
use snowday::components::player::{Contacts, Facing, Player};
use snowday::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use snowday::components::sprite::Sprite;
use snowday::components::stuckto::StuckTo;
use snowday::components::ttl::Ttl;
use snowday::events::audio::AudioCmd;
use snowday::events::collision::OverlapMessage;
use snowday::events::gamestate::observe_outcome_changed;
use snowday::resources::animationstore::AnimationStore;
use snowday::resources::gameconfig::GameConfig;
use snowday::resources::gamestate::{GameOutcome, GameState};
use snowday::resources::input::{InputState, RawInput};
use snowday::resources::status::{StatusMessage, StatusText};
use snowday::resources::worldtime::WorldTime;
use snowday::systems::animation::{animation, animation_controller};
use snowday::systems::collision::{body_collision_system, overlap_detector};
use snowday::systems::input::update_input_state;
use snowday::systems::movement::movement_system;
use snowday::systems::outcome::game_outcome_tracker;
use snowday::systems::particleemitter::vfx_trigger;
use snowday::systems::playercontroller::{freeze_horizontal_control, player_controller};
use snowday::systems::time::update_world_time;
use snowday::systems::ttl::ttl_system;

const EPSILON: f32 = 1e-4;
const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(GameConfig::new());
    world.insert_resource(GameState::new());
    world.insert_resource(StatusText::default());
    world.insert_resource(AnimationStore::default());
    world.init_resource::<RawInput>();
    world.init_resource::<InputState>();
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<OverlapMessage>>();
    world.add_observer(observe_outcome_changed);
    world
}

fn spawn_player(world: &mut World, pos: Vec2, contacts: Contacts) -> Entity {
    let config = world.resource::<GameConfig>().clone();
    world
        .spawn((
            Group::new("player"),
            Player::default(),
            PlatformerControlled::new(config.acceleration, config.drag, config.jump_velocity),
            MapPosition::from_vec(pos),
            RigidBody::new(),
            BoxCollider::centered(24.0, 24.0),
            contacts,
            Animation::new(AnimationClip::Idle),
            Sprite::new("character00"),
        ))
        .id()
}

fn spawn_emitters(world: &mut World, player: Entity) -> (Entity, Entity) {
    let walking = world
        .spawn((
            ParticleEmitter::walking(60.0, 0.35),
            StuckTo::new(player),
            MapPosition::new(0.0, 0.0),
        ))
        .id();
    let jumping = world
        .spawn((
            ParticleEmitter::jumping(60.0, 0.35, 20),
            StuckTo::new(player),
            MapPosition::new(0.0, 0.0),
        ))
        .id();
    (walking, jumping)
}

/// Input, control and reaction systems without physics; contacts are set by the test.
fn control_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_input_state,
            player_controller,
            freeze_horizontal_control,
            animation_controller,
            animation,
            vfx_trigger,
        )
            .chain(),
    );
    schedule
}

fn tick(world: &mut World, schedule: &mut Schedule, raw: RawInput) {
    world.insert_resource(raw);
    update_world_time(world, DT);
    schedule.run(world);
}

#[test]
fn movement_integrates_gravity_and_run_force() {
    let mut world = make_world();
    let mut rb = RigidBody::new();
    rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, 10.0));
    rb.set_horizontal_acceleration(2.0);
    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    update_world_time(&mut world, 1.0);
    let mut schedule = Schedule::default();
    schedule.add_systems(movement_system);
    schedule.run(&mut world);

    let rb = world.get::<RigidBody>(entity).unwrap();
    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(rb.velocity.x, 2.0));
    assert!(approx_eq(rb.velocity.y, 10.0));
    assert!(approx_eq(pos.pos.x, 2.0));
    assert!(approx_eq(pos.pos.y, 10.0));
}

#[test]
fn ttl_decrements_and_despawns() {
    let mut world = make_world();
    let entity = world.spawn((Ttl::new(1.0),)).id();
    let mut schedule = Schedule::default();
    schedule.add_systems(ttl_system);

    update_world_time(&mut world, 0.5);
    schedule.run(&mut world);
    assert!(world.get_entity(entity).is_ok());
    assert!(approx_eq(world.get::<Ttl>(entity).unwrap().remaining, 0.5));

    update_world_time(&mut world, 0.5);
    schedule.run(&mut world);
    assert!(world.get_entity(entity).is_err());
}

#[test]
fn held_direction_never_combines_acceleration_and_drag() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Vec2::ZERO, Contacts::grounded());
    let mut schedule = control_schedule();

    let inputs = [
        RawInput::left(),
        RawInput::none(),
        RawInput::right(),
        RawInput::up(),
        RawInput::none(),
        RawInput::left(),
    ];
    for raw in inputs {
        tick(&mut world, &mut schedule, raw);
        let rb = world.get::<RigidBody>(player).unwrap();
        let accel = rb.horizontal_acceleration();
        let drag = rb.horizontal_drag();
        assert!(accel == 0.0 || drag == 0.0, "accel={accel} drag={drag}");
        if !raw.left && !raw.right {
            assert_eq!(accel, 0.0);
            assert_eq!(drag, 158.0);
        }
    }
}

#[test]
fn airborne_frames_always_select_jump() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Vec2::ZERO, Contacts::airborne());
    let mut schedule = control_schedule();

    for raw in [RawInput::left(), RawInput::right(), RawInput::none(), RawInput::up()] {
        tick(&mut world, &mut schedule, raw);
        assert_eq!(
            world.get::<Animation>(player).unwrap().clip,
            AnimationClip::Jump
        );
    }
}

#[test]
fn jump_scenario_with_reported_contacts() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Vec2::ZERO, Contacts::grounded());
    let (_, jumping) = spawn_emitters(&mut world, player);
    let mut schedule = control_schedule();

    for frame in 1..=21 {
        let contacts = if (6..=20).contains(&frame) {
            Contacts::airborne()
        } else {
            Contacts::grounded()
        };
        *world.get_mut::<Contacts>(player).unwrap() = contacts;
        let raw = if frame == 5 { RawInput::up() } else { RawInput::none() };
        tick(&mut world, &mut schedule, raw);

        let vy = world.get::<RigidBody>(player).unwrap().velocity.y;
        let clip = world.get::<Animation>(player).unwrap().clip;
        let puffs = world.get::<ParticleEmitter>(jumping).unwrap().active;
        match frame {
            1..=4 => {
                assert_eq!(vy, 0.0, "frame {frame}");
                assert!(!puffs, "frame {frame}");
            }
            5 => {
                assert_eq!(vy, -600.0);
                assert!(!puffs);
                assert_ne!(clip, AnimationClip::Jump);
            }
            6..=20 => {
                assert_eq!(clip, AnimationClip::Jump, "frame {frame}");
                assert!(puffs, "frame {frame}");
            }
            _ => {
                assert!(!puffs);
                assert_eq!(clip, AnimationClip::Idle);
            }
        }
    }

    let jumps = world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .filter(|c| matches!(c, AudioCmd::PlayFx { id, .. } if id == "jump"))
        .count();
    assert_eq!(jumps, 1);
}

#[test]
fn facing_persists_through_neutral_input() {
    let mut world = make_world();
    let player = spawn_player(&mut world, Vec2::ZERO, Contacts::grounded());
    let mut schedule = control_schedule();

    tick(&mut world, &mut schedule, RawInput::right());
    tick(&mut world, &mut schedule, RawInput::none());
    tick(&mut world, &mut schedule, RawInput::none());
    assert_eq!(world.get::<Player>(player).unwrap().facing, Facing::Right);
    assert!(world.get::<Sprite>(player).unwrap().flip_h);
}

#[test]
fn physics_pipeline_lands_collects_and_wins() {
    let mut world = make_world();
    world.spawn((
        Group::new("ground"),
        MapPosition::new(0.0, 100.0),
        BoxCollider::new(400.0, 20.0),
    ));
    world.spawn(OverlapRule::new("player", "coins"));
    world.spawn(OverlapRule::new("player", "flags"));
    let coin = world
        .spawn((
            Group::new("coins"),
            Collectible::new(CollectibleKind::Coin),
            MapPosition::new(60.0, 88.0),
            BoxCollider::centered(18.0, 18.0),
        ))
        .id();
    world.spawn((
        Group::new("flags"),
        Collectible::new(CollectibleKind::Flag),
        MapPosition::new(150.0, 88.0),
        BoxCollider::centered(18.0, 18.0),
    ));

    let player = spawn_player(&mut world, Vec2::new(20.0, 60.0), Contacts::default());
    world
        .get_mut::<RigidBody>(player)
        .unwrap()
        .add_force(GRAVITY_FORCE, Vec2::new(0.0, 1500.0));

    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_input_state,
            player_controller,
            freeze_horizontal_control,
            movement_system,
            body_collision_system,
            overlap_detector,
            game_outcome_tracker,
        )
            .chain(),
    );

    // settle on the ground
    for _ in 0..30 {
        tick(&mut world, &mut schedule, RawInput::none());
    }
    assert!(world.get::<Contacts>(player).unwrap().ground_contact());
    assert!(approx_eq(world.get::<MapPosition>(player).unwrap().pos.y, 88.0));

    for _ in 0..120 {
        tick(&mut world, &mut schedule, RawInput::right());
        if world.resource::<GameState>().is_terminal() {
            break;
        }
    }

    assert!(!world.get::<Collectible>(coin).unwrap().alive);
    assert_eq!(world.resource::<GameState>().coins_collected(), 1);
    assert_eq!(world.resource::<GameState>().outcome(), GameOutcome::Won);
    assert_eq!(
        world.resource::<StatusText>().message,
        StatusMessage::LevelComplete
    );

    tick(&mut world, &mut schedule, RawInput::right());
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!(rb.horizontal_acceleration(), 0.0);
}
