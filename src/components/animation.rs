use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Closed set of character clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationClip {
    Walk,
    #[default]
    Idle,
    Jump,
}

impl AnimationClip {
    /// Key into [`AnimationStore`](crate::resources::animationstore::AnimationStore).
    pub fn key(self) -> &'static str {
        match self {
            AnimationClip::Walk => "walk",
            AnimationClip::Idle => "idle",
            AnimationClip::Jump => "jump",
        }
    }
}

/// Pick the clip for this frame.
///
/// Airborne always wins over horizontal input.
pub fn select_clip(horizontal_input_active: bool, ground_contact: bool) -> AnimationClip {
    if !ground_contact {
        AnimationClip::Jump
    } else if horizontal_input_active {
        AnimationClip::Walk
    } else {
        AnimationClip::Idle
    }
}

/// Playback state of the clip currently shown on an entity.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub clip: AnimationClip,
    pub frame_index: usize,
    pub elapsed_time: f32,
    /// How many times a clip has been (re)started on this entity.
    pub plays: u32,
}

impl Animation {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            clip,
            frame_index: 0,
            elapsed_time: 0.0,
            plays: 1,
        }
    }

    /// Start `clip` from its first frame.
    pub fn play(&mut self, clip: AnimationClip) {
        self.clip = clip;
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        self.plays += 1;
    }
}
