//! Kinematic body component with named acceleration forces.
//!
//! The [`RigidBody`] component is the control surface the player core writes
//! to and the physics step reads from. It stores velocity, named acceleration
//! forces (gravity, the horizontal `"run"` force), a linear per-axis drag and
//! an optional per-axis speed clamp.
//!
//! The core never touches position directly: it only calls
//! [`RigidBody::set_horizontal_acceleration`],
//! [`RigidBody::set_horizontal_drag`] and [`RigidBody::set_vertical_velocity`].
//! The physics step in [`crate::systems::movement`] integrates the result.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the force driven by the movement controller.
pub const RUN_FORCE: &str = "run";
/// Name of the world gravity force.
pub const GRAVITY_FORCE: &str = "gravity";

/// Kinematic body storing velocity, named forces and drag.
///
/// # Fields
/// - `velocity` - Current velocity in world units per second
/// - `forces` - Named accelerations, summed every step
/// - `drag` - Linear deceleration per axis, applied only while that axis has
///   no acceleration (world units per second squared)
/// - `max_velocity` - Optional per-axis speed clamp
///
/// # Example
/// ```ignore
/// let mut rb = RigidBody::new();
/// rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, 1500.0));
/// rb.set_horizontal_acceleration(559.0);
/// rb.set_horizontal_drag(0.0);
/// ```
#[derive(Component, Clone, Debug)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub forces: FxHashMap<String, Vec2>,
    pub drag: Vec2,
    /// Absolute speed limit per axis.
    pub max_velocity: Option<Vec2>,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody with zero velocity and no forces.
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
            forces: FxHashMap::default(),
            drag: Vec2::ZERO,
            max_velocity: None,
        }
    }

    /// Create a RigidBody with a starting velocity and nothing else.
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            ..Self::new()
        }
    }

    pub fn with_max_velocity(mut self, max: Vec2) -> Self {
        self.max_velocity = Some(max);
        self
    }

    /// Add or replace a named force.
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces.insert(name.to_string(), value);
    }

    pub fn total_acceleration(&self) -> Vec2 {
        self.forces.values().fold(Vec2::ZERO, |acc, force| acc + *force)
    }

    /// Set the horizontal component of the `"run"` force.
    pub fn set_horizontal_acceleration(&mut self, value: f32) {
        self.add_force(RUN_FORCE, Vec2::new(value, 0.0));
    }

    /// Current horizontal acceleration requested through the `"run"` force.
    pub fn horizontal_acceleration(&self) -> f32 {
        self.forces.get(RUN_FORCE).map_or(0.0, |force| force.x)
    }

    pub fn set_horizontal_drag(&mut self, value: f32) {
        self.drag.x = value;
    }

    pub fn horizontal_drag(&self) -> f32 {
        self.drag.x
    }

    /// Overwrite the vertical velocity (negative is up).
    pub fn set_vertical_velocity(&mut self, value: f32) {
        self.velocity.y = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new() {
        let rb = RigidBody::new();
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert!(rb.forces.is_empty());
        assert_eq!(rb.drag, Vec2::ZERO);
        assert!(rb.max_velocity.is_none());
    }

    #[test]
    fn test_total_acceleration_sums_named_forces() {
        let mut rb = RigidBody::new();
        rb.add_force(GRAVITY_FORCE, Vec2::new(0.0, 1500.0));
        rb.set_horizontal_acceleration(-100.0);

        let total = rb.total_acceleration();
        assert!(approx_eq(total.x, -100.0));
        assert!(approx_eq(total.y, 1500.0));
    }

    #[test]
    fn test_horizontal_acceleration_defaults_to_zero() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.horizontal_acceleration(), 0.0));
    }

    #[test]
    fn test_set_horizontal_acceleration_overwrites_run_force() {
        let mut rb = RigidBody::new();
        rb.set_horizontal_acceleration(158.0);
        rb.set_horizontal_acceleration(-158.0);
        assert!(approx_eq(rb.horizontal_acceleration(), -158.0));
        assert_eq!(rb.forces.len(), 1);
    }

    #[test]
    fn test_set_vertical_velocity_keeps_horizontal() {
        let mut rb = RigidBody::with_velocity(Vec2::new(40.0, 10.0));
        rb.set_vertical_velocity(-600.0);
        assert!(approx_eq(rb.velocity.x, 40.0));
        assert!(approx_eq(rb.velocity.y, -600.0));
    }
}
