//! Contact and overlap detection.
//!
//! - [`body_collision_system`] pushes bodies with [`Contacts`] out of the
//!   `"ground"` group and the level's horizontal bounds, and reports whether
//!   each one is resting on something.
//! - [`overlap_detector`] writes an [`OverlapMessage`] the first frame two
//!   entities matched by an [`OverlapRule`] overlap.

use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::collectible::Collectible;
use crate::components::collision::OverlapRule;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::player::Contacts;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::OverlapMessage;
use crate::resources::level::LevelDefinition;
use crate::resources::worldtime::WorldTime;

/// Name of the group holding solid level geometry.
pub const GROUND_GROUP: &str = "ground";

/// Slack when deciding which side a body came from.
const CONTACT_EPSILON: f32 = 0.5;

/// Resolve bodies against static ground and the level's side walls.
///
/// `Contacts` is rewritten from scratch every step. The side a body entered
/// from is decided with its position before this frame's move, recovered
/// from its velocity.
pub fn body_collision_system(
    mut bodies: Query<(&mut MapPosition, &mut RigidBody, &BoxCollider, &mut Contacts)>,
    ground: Query<(&MapPosition, &BoxCollider, &Group), Without<Contacts>>,
    level: Option<Res<LevelDefinition>>,
    time: Res<WorldTime>,
) {
    let solids: Vec<(Vec2, Vec2)> = ground
        .iter()
        .filter(|(_, _, group)| group.name() == GROUND_GROUP)
        .map(|(pos, collider, _)| collider.aabb(pos.pos))
        .collect();

    for (mut position, mut rb, collider, mut contacts) in bodies.iter_mut() {
        let mut blocked_down = false;
        let prev = position.pos - rb.velocity * time.delta;
        let (prev_min, prev_max) = collider.aabb(prev);

        for &(g_min, g_max) in &solids {
            let (b_min, b_max) = collider.aabb(position.pos);
            let overlapping =
                b_min.x < g_max.x && b_max.x > g_min.x && b_min.y < g_max.y && b_max.y > g_min.y;
            if !overlapping {
                continue;
            }
            if prev_max.y <= g_min.y + CONTACT_EPSILON && rb.velocity.y >= 0.0 {
                position.pos.y -= b_max.y - g_min.y;
                rb.velocity.y = 0.0;
                blocked_down = true;
            } else if prev_min.y >= g_max.y - CONTACT_EPSILON && rb.velocity.y <= 0.0 {
                position.pos.y += g_max.y - b_min.y;
                rb.velocity.y = 0.0;
            } else if prev_max.x <= g_min.x + CONTACT_EPSILON {
                position.pos.x -= b_max.x - g_min.x;
                rb.velocity.x = rb.velocity.x.min(0.0);
            } else if prev_min.x >= g_max.x - CONTACT_EPSILON {
                position.pos.x += g_max.x - b_min.x;
                rb.velocity.x = rb.velocity.x.max(0.0);
            }
        }

        // Resting exactly on a surface without sinking into it, e.g. a zero dt frame.
        if !blocked_down && rb.velocity.y >= 0.0 {
            let (b_min, b_max) = collider.aabb(position.pos);
            blocked_down = solids.iter().any(|&(g_min, g_max)| {
                (b_max.y - g_min.y).abs() <= CONTACT_EPSILON && b_min.x < g_max.x && b_max.x > g_min.x
            });
        }

        if let Some(level) = level.as_deref() {
            let (b_min, b_max) = collider.aabb(position.pos);
            if b_min.x < 0.0 {
                position.pos.x -= b_min.x;
                rb.velocity.x = rb.velocity.x.max(0.0);
            } else if b_max.x > level.width {
                position.pos.x -= b_max.x - level.width;
                rb.velocity.x = rb.velocity.x.min(0.0);
            }
        }

        contacts.blocked_down = Some(blocked_down);
    }
}

/// Report new overlaps between the groups named by each [`OverlapRule`].
///
/// A rule matches its two groups in either order. The message is oriented
/// like the rule: `a` is the `group_a` member. Pairs overlapping last frame
/// stay silent. Collectibles that are no longer alive are skipped.
pub fn overlap_detector(
    rules: Query<&OverlapRule>,
    colliders: Query<(Entity, &MapPosition, &BoxCollider, &Group, Option<&Collectible>)>,
    mut previous: Local<FxHashSet<(Entity, Entity)>>,
    mut writer: MessageWriter<OverlapMessage>,
) {
    let alive = |c: Option<&Collectible>| c.is_none_or(|c| c.alive);
    let mut current: FxHashSet<(Entity, Entity)> = FxHashSet::default();

    for [(e1, pos1, col1, group1, coll1), (e2, pos2, col2, group2, coll2)] in
        colliders.iter_combinations()
    {
        if !alive(coll1) || !alive(coll2) {
            continue;
        }
        let Some(rule) = rules
            .iter()
            .find(|rule| rule.matches(group1.name(), group2.name()))
        else {
            continue;
        };
        if !col1.overlaps(pos1.pos, col2, pos2.pos) {
            continue;
        }
        let pair = if group1.name() == rule.group_a {
            (e1, e2)
        } else {
            (e2, e1)
        };
        if current.insert(pair) && !previous.contains(&pair) {
            writer.write(OverlapMessage {
                a: pair.0,
                b: pair.1,
            });
        }
    }

    *previous = current;
}

/// Advance the overlap queue so last frame's notifications age out.
pub fn update_overlap_messages(mut msgs: ResMut<Messages<OverlapMessage>>) {
    msgs.update();
}
