//! Camera follow binding.
//!
//! The presentation layer owns the actual camera. The core only records what
//! it should follow and within which bounds, and rebuilds that record on
//! every restart so no binding to a despawned player survives.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;

/// What the camera follows and how.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraBinding {
    /// Followed entity, the current session's player.
    pub target: Option<Entity>,
    /// World size the view is clamped to, from the origin.
    pub bounds: Vec2,
    pub lerp: f32,
    pub deadzone: Vec2,
    pub zoom: f32,
}

impl Default for CameraBinding {
    fn default() -> Self {
        Self {
            target: None,
            bounds: Vec2::ZERO,
            lerp: 0.25,
            deadzone: Vec2::splat(50.0),
            zoom: 2.5,
        }
    }
}

impl CameraBinding {
    pub fn follow(target: Entity, bounds: Vec2, lerp: f32, deadzone: f32, zoom: f32) -> Self {
        Self {
            target: Some(target),
            bounds,
            lerp,
            deadzone: Vec2::splat(deadzone),
            zoom,
        }
    }
}
