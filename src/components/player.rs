//! Player-owned state that is not part of the physics body.
//!
//! - [`Player`] marks the controlled character and remembers its [`Facing`].
//! - [`Contacts`] is written by the physics step and only read by the core.

use bevy_ecs::prelude::Component;

/// Horizontal facing of the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// +1.0 for right, -1.0 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Whether the sprite should be drawn mirrored. Source art faces left.
    pub fn flip_h(self) -> bool {
        matches!(self, Facing::Right)
    }
}

/// Marker and per-character state for the controlled player.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player {
    /// Last nonzero horizontal input direction; persists while input is neutral.
    pub facing: Facing,
}

/// Per-body contact flags reported by the physics step.
///
/// `blocked_down` is `None` until the physics step has reported for this
/// body. A missing report reads as airborne.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub blocked_down: Option<bool>,
}

impl Contacts {
    pub fn grounded() -> Self {
        Self {
            blocked_down: Some(true),
        }
    }

    pub fn airborne() -> Self {
        Self {
            blocked_down: Some(false),
        }
    }

    /// Ground contact for this frame, `false` when unreported.
    pub fn ground_contact(&self) -> bool {
        self.blocked_down.unwrap_or(false)
    }
}
