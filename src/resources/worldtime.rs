//! Simulation clock.
//!
//! Every time-based system (movement, particles, animation, ttl) reads
//! `delta` from here rather than taking a frame time of its own, so the
//! whole frame advances by the same step.
use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since the world was created.
    pub elapsed: f32,
    /// Scaled seconds of the current frame.
    pub delta: f32,
    /// Multiplier applied to every incoming frame delta. 1.0 is real time.
    pub time_scale: f32,
    /// Frames advanced so far. Survives session restarts.
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}
