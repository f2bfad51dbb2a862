//! Kinematic integration step.
//!
//! For each [`RigidBody`]:
//!
//! 1. velocity += sum of enabled forces * dt
//! 2. on each axis with no acceleration, drag moves velocity toward zero
//!    without overshooting
//! 3. velocity is clamped per axis by `max_velocity`
//! 4. position += velocity * dt
//!
//! Contact resolution happens afterwards in
//! [`crate::systems::collision::body_collision_system`].

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Move `value` toward zero by `amount`, stopping at zero.
fn approach_zero(value: f32, amount: f32) -> f32 {
    if value > 0.0 {
        (value - amount).max(0.0)
    } else {
        (value + amount).min(0.0)
    }
}

fn integrate(rb: &mut RigidBody, dt: f32) -> Vec2 {
    let accel = rb.total_acceleration();
    let mut velocity = rb.velocity + accel * dt;

    if accel.x == 0.0 && rb.drag.x > 0.0 {
        velocity.x = approach_zero(velocity.x, rb.drag.x * dt);
    }
    if accel.y == 0.0 && rb.drag.y > 0.0 {
        velocity.y = approach_zero(velocity.y, rb.drag.y * dt);
    }
    if let Some(max) = rb.max_velocity {
        velocity = velocity.clamp(-max, max);
    }

    rb.velocity = velocity;
    velocity * dt
}

pub fn movement_system(
    mut query: Query<(&mut MapPosition, &mut RigidBody)>,
    time: Res<WorldTime>,
) {
    let dt = time.delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        let delta = integrate(&mut rigidbody, dt);
        position.pos += delta;
    }
}
