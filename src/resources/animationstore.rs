//! Animation clip registry.
//!
//! The store maps each [`AnimationClip`] to the frames it cycles through.
//! The animation system reads it to advance the playing clip and to pick the
//! texture key shown on the sprite.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::components::animation::AnimationClip;

/// Immutable data describing one clip.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture keys of the frames, in playback order.
    pub frames: Vec<String>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the clip restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Texture key of `index`, clamped to the last frame.
    pub fn frame(&self, index: usize) -> Option<&str> {
        let last = self.frames.len().checked_sub(1)?;
        self.frames.get(index.min(last)).map(String::as_str)
    }
}

/// Central registry of clip definitions.
#[derive(Resource, Debug, Clone)]
pub struct AnimationStore {
    pub animations: FxHashMap<AnimationClip, AnimationResource>,
}

impl Default for AnimationStore {
    /// The character's three clips.
    fn default() -> Self {
        let mut animations = FxHashMap::default();
        animations.insert(
            AnimationClip::Walk,
            AnimationResource {
                frames: vec!["character01".into(), "character00".into()],
                fps: 15.0,
                looped: true,
            },
        );
        animations.insert(
            AnimationClip::Idle,
            AnimationResource {
                frames: vec!["character00".into()],
                fps: 1.0,
                looped: true,
            },
        );
        animations.insert(
            AnimationClip::Jump,
            AnimationResource {
                frames: vec!["character01".into()],
                fps: 1.0,
                looped: false,
            },
        );
        Self { animations }
    }
}

impl AnimationStore {
    pub fn get(&self, clip: AnimationClip) -> Option<&AnimationResource> {
        self.animations.get(&clip)
    }
}
