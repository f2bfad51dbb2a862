//! Overlap notifications from the physics step.
//!
//! The overlap detector writes one [`OverlapMessage`] when the player starts
//! overlapping a still-alive collectible. The message stays quiet for as long
//! as the two keep overlapping; a new message needs the overlap to end and
//! begin again. The outcome tracker drains the queue once per frame, after
//! physics and before the reset handler, so nothing reacts mid-step.
use bevy_ecs::prelude::*;

/// New overlap between a rule's `group_a` entity (`a`) and a `group_b`
/// entity (`b`).
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapMessage {
    pub a: Entity,
    pub b: Entity,
}

