//! Game outcome tracker.
//!
//! Runs once per frame after physics. It first drains the overlap queue, then
//! checks the fall threshold, so a flag touch and a fall on the same frame end
//! as a win.
//!
//! - Coin: consumed, counted, pickup cue. Never changes the outcome.
//! - Flag: consumed. While playing it also plays the victory cue and moves
//!   the session to `Won`.
//! - Fall: player below `fall_threshold` while playing moves the session to
//!   `Fallen`.
//!
//! A consumed collectible leaves play: its collider and sprite are removed,
//! and any further notification for it is ignored.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::{Collectible, CollectibleKind};
use crate::components::inputcontrolled::PlatformerControlled;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::events::collision::OverlapMessage;
use crate::events::gamestate::OutcomeChangedEvent;
use crate::resources::audio::{COIN_CUE, VICTORY_CUE};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameOutcome, GameState};

pub fn game_outcome_tracker(
    mut overlaps: MessageReader<OverlapMessage>,
    mut collectibles: Query<&mut Collectible>,
    mut players: Query<
        (&MapPosition, &mut RigidBody, Option<&PlatformerControlled>),
        With<Player>,
    >,
    mut state: ResMut<GameState>,
    config: Res<GameConfig>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    let mut transitioned = false;

    for overlap in overlaps.read() {
        let target = if collectibles.contains(overlap.b) {
            overlap.b
        } else {
            overlap.a
        };
        let Ok(mut collectible) = collectibles.get_mut(target) else {
            continue;
        };
        if !collectible.consume() {
            debug!("ignored repeated overlap with {:?}", target);
            continue;
        }
        commands
            .entity(target)
            .try_remove::<(BoxCollider, Sprite)>();

        match collectible.kind {
            CollectibleKind::Coin => {
                state.collect_coin();
                audio.write(AudioCmd::play(COIN_CUE, config.volume));
                debug!("coin collected ({} total)", state.coins_collected());
            }
            CollectibleKind::Flag => {
                if state.finish(GameOutcome::Won) {
                    audio.write(AudioCmd::play(VICTORY_CUE, config.volume));
                    transitioned = true;
                } else {
                    debug!("flag consumed after {:?}", state.outcome());
                }
            }
        }
    }

    if !state.is_terminal() {
        let fell = players
            .iter()
            .any(|(position, _, _)| position.pos.y > config.fall_threshold);
        if fell && state.finish(GameOutcome::Fallen) {
            transitioned = true;
        }
    }

    if transitioned {
        let outcome = state.outcome();
        for (_, mut rb, controlled) in players.iter_mut() {
            rb.set_horizontal_acceleration(0.0);
            rb.set_horizontal_drag(controlled.map_or(config.drag, |c| c.drag));
        }
        info!(
            "session finished: {:?} with {} coins",
            outcome,
            state.coins_collected()
        );
        commands.trigger(OutcomeChangedEvent { outcome });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::gamestate::observe_outcome_changed;
    use crate::resources::status::{StatusMessage, StatusText};
    use bevy_ecs::observer::On;

    #[derive(Resource, Default)]
    struct Transitions(u32);

    fn count_transitions(_trigger: On<OutcomeChangedEvent>, mut n: ResMut<Transitions>) {
        n.0 += 1;
    }

    struct Rig {
        world: World,
        schedule: Schedule,
        player: Entity,
    }

    fn rig() -> Rig {
        let mut world = World::new();
        world.init_resource::<Messages<OverlapMessage>>();
        world.init_resource::<Messages<AudioCmd>>();
        world.insert_resource(GameState::new());
        world.insert_resource(GameConfig::new());
        world.insert_resource(StatusText::default());
        world.init_resource::<Transitions>();
        world.add_observer(observe_outcome_changed);
        world.add_observer(count_transitions);
        let player = world
            .spawn((Player::default(), MapPosition::new(0.0, 0.0), RigidBody::new()))
            .id();
        let mut schedule = Schedule::default();
        schedule.add_systems(game_outcome_tracker);
        Rig {
            world,
            schedule,
            player,
        }
    }

    fn spawn(world: &mut World, kind: CollectibleKind) -> Entity {
        world
            .spawn((
                Collectible::new(kind),
                BoxCollider::centered(18.0, 18.0),
                Sprite::new("coin"),
            ))
            .id()
    }

    fn notify(world: &mut World, a: Entity, b: Entity) {
        world
            .resource_mut::<Messages<OverlapMessage>>()
            .write(OverlapMessage { a, b });
    }

    fn cues(world: &mut World, cue: &str) -> usize {
        world
            .resource_mut::<Messages<AudioCmd>>()
            .drain()
            .filter(|c| matches!(c, AudioCmd::PlayFx { id, .. } if id == cue))
            .count()
    }

    #[test]
    fn coin_is_collected_once() {
        let mut r = rig();
        let coin = spawn(&mut r.world, CollectibleKind::Coin);
        notify(&mut r.world, r.player, coin);
        notify(&mut r.world, r.player, coin);
        r.schedule.run(&mut r.world);

        assert_eq!(r.world.resource::<GameState>().coins_collected(), 1);
        assert_eq!(cues(&mut r.world, "coin"), 1);
        assert!(!r.world.get::<Collectible>(coin).unwrap().alive);
        assert!(r.world.get::<BoxCollider>(coin).is_none());
        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Playing);
    }

    #[test]
    fn flag_wins_and_updates_status() {
        let mut r = rig();
        let flag = spawn(&mut r.world, CollectibleKind::Flag);
        notify(&mut r.world, r.player, flag);
        r.schedule.run(&mut r.world);

        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Won);
        assert_eq!(cues(&mut r.world, "victory"), 1);
        assert_eq!(
            r.world.resource::<StatusText>().message,
            StatusMessage::LevelComplete
        );
    }

    #[test]
    fn fall_past_threshold_is_game_over() {
        let mut r = rig();
        r.world.get_mut::<MapPosition>(r.player).unwrap().pos.y = 701.0;
        r.schedule.run(&mut r.world);
        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Fallen);
        assert_eq!(r.world.resource::<StatusText>().message, StatusMessage::GameOver);
    }

    #[test]
    fn exactly_at_threshold_is_still_playing() {
        let mut r = rig();
        r.world.get_mut::<MapPosition>(r.player).unwrap().pos.y = 700.0;
        r.schedule.run(&mut r.world);
        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Playing);
    }

    #[test]
    fn flag_and_fall_on_same_frame_is_a_win() {
        let mut r = rig();
        let flag = spawn(&mut r.world, CollectibleKind::Flag);
        r.world.get_mut::<MapPosition>(r.player).unwrap().pos.y = 800.0;
        notify(&mut r.world, r.player, flag);
        r.schedule.run(&mut r.world);
        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Won);
    }

    #[test]
    fn flag_after_fall_does_not_win() {
        let mut r = rig();
        r.world.get_mut::<MapPosition>(r.player).unwrap().pos.y = 800.0;
        r.schedule.run(&mut r.world);
        cues(&mut r.world, "victory");

        let flag = spawn(&mut r.world, CollectibleKind::Flag);
        notify(&mut r.world, r.player, flag);
        r.schedule.run(&mut r.world);
        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Fallen);
        assert_eq!(cues(&mut r.world, "victory"), 0);
        assert!(!r.world.get::<Collectible>(flag).unwrap().alive);
    }

    #[test]
    fn coins_still_count_after_win() {
        let mut r = rig();
        let flag = spawn(&mut r.world, CollectibleKind::Flag);
        notify(&mut r.world, r.player, flag);
        r.schedule.run(&mut r.world);
        let coin = spawn(&mut r.world, CollectibleKind::Coin);
        notify(&mut r.world, r.player, coin);
        r.schedule.run(&mut r.world);
        assert_eq!(r.world.resource::<GameState>().coins_collected(), 1);
        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Won);
    }

    #[test]
    fn repeated_flag_notification_wins_once() {
        let mut r = rig();
        let flag = spawn(&mut r.world, CollectibleKind::Flag);
        notify(&mut r.world, r.player, flag);
        notify(&mut r.world, flag, r.player);
        r.schedule.run(&mut r.world);

        assert_eq!(r.world.resource::<GameState>().outcome(), GameOutcome::Won);
        assert_eq!(cues(&mut r.world, "victory"), 1);
        assert_eq!(r.world.resource::<Transitions>().0, 1);

        notify(&mut r.world, r.player, flag);
        r.schedule.run(&mut r.world);
        assert_eq!(cues(&mut r.world, "victory"), 0);
        assert_eq!(r.world.resource::<Transitions>().0, 1);
    }

    #[test]
    fn transition_frame_sets_drag_with_zero_acceleration() {
        let mut r = rig();
        {
            let mut rb = r.world.get_mut::<RigidBody>(r.player).unwrap();
            rb.set_horizontal_acceleration(559.0);
            rb.set_horizontal_drag(0.0);
        }
        r.world.get_mut::<MapPosition>(r.player).unwrap().pos.y = 800.0;
        r.schedule.run(&mut r.world);

        let rb = r.world.get::<RigidBody>(r.player).unwrap();
        assert_eq!(rb.horizontal_acceleration(), 0.0);
        assert_eq!(rb.horizontal_drag(), GameConfig::new().drag);
    }
}
