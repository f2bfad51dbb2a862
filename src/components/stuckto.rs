//! Follow binding: keep an entity at a fixed offset from another one.
//!
//! The dust emitters are bound to the player this way. The VFX trigger
//! rewrites `offset` whenever the facing changes and
//! [`crate::systems::stuckto::stuck_to_entity_system`] applies it.

use bevy_ecs::prelude::{Component, Entity};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct StuckTo {
    pub target: Entity,
    /// Added to the target position.
    pub offset: Vec2,
}

impl StuckTo {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            offset: Vec2::ZERO,
        }
    }

    /// Rebind to `target` at `offset`.
    pub fn follow(&mut self, target: Entity, offset: Vec2) {
        self.target = target;
        self.offset = offset;
    }

    /// Where the follower belongs given the target position.
    pub fn anchor(&self, target_pos: Vec2) -> Vec2 {
        target_pos + self.offset
    }
}
