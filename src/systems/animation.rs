//! Animation systems.
//!
//! - [`animation_controller`] picks the player's clip for the frame with
//!   [`select_clip`] and restarts playback only when the pick changes. It
//!   also mirrors the sprite from the player's facing.
//! - [`animation`] advances the playing clip and writes the visible frame
//!   into the [`Sprite`].
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity playback state
//! - [`crate::resources::animationstore::AnimationStore`] – clip definitions

use bevy_ecs::prelude::*;

use crate::components::animation::{Animation, select_clip};
use crate::components::player::{Contacts, Player};
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Select the clip from horizontal input and ground contact.
///
/// A missing contact report selects the airborne clip.
pub fn animation_controller(
    mut query: Query<(&Player, &mut Animation, &mut Sprite, Option<&Contacts>)>,
    input: Res<InputState>,
) {
    for (player, mut anim, mut sprite, contacts) in query.iter_mut() {
        let grounded = contacts.is_some_and(Contacts::ground_contact);
        let clip = select_clip(input.horizontal_active(), grounded);
        if anim.clip != clip {
            anim.play(clip);
        }
        sprite.flip_h = player.facing.flip_h();
    }
}

/// Advance playback and update the sprite frame.
///
/// Looping clips wrap to the first frame. Other clips hold their last frame.
pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(clip) = animation_store.get(anim.clip) else {
            continue;
        };
        let frame_count = clip.frame_count();
        if frame_count == 0 {
            continue;
        }

        if clip.fps > 0.0 {
            anim.elapsed_time += time.delta;
            let frame_duration = 1.0 / clip.fps;
            while anim.elapsed_time >= frame_duration {
                anim.elapsed_time -= frame_duration;
                anim.frame_index += 1;
                if anim.frame_index >= frame_count {
                    if clip.looped {
                        anim.frame_index = 0;
                    } else {
                        anim.frame_index = frame_count - 1; // hold last frame
                        anim.elapsed_time = 0.0;
                        break;
                    }
                }
            }
        }

        if let Some(key) = clip.frame(anim.frame_index) {
            if sprite.tex_key != key {
                sprite.tex_key = key.to_string();
            }
        }
    }
}
