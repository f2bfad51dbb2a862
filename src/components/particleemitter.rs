//! Particle emitter component for the character's dust effects.
//!
//! Two emitters exist per session, identified by [`EmitterId`]. Each one is a
//! separate entity carrying a [`ParticleEmitter`] and a
//! [`StuckTo`](crate::components::stuckto::StuckTo) binding to the player.
//!
//! # How It Works
//!
//! 1. The VFX trigger decides every frame whether an emitter is `active`,
//!    and refreshes its follow offset and particle speed while active.
//! 2. [`crate::systems::stuckto::stuck_to_entity_system`] moves the emitter
//!    to the followed position.
//! 3. [`crate::systems::particleemitter::particle_emitter_system`] spawns
//!    [`Particle`] entities from active emitters at `emissions_per_second`,
//!    capped by `max_alive`. Particles expire through
//!    [`Ttl`](crate::components::ttl::Ttl).
//!
//! Stopping an emitter keeps its already spawned particles alive until
//! their lifespan ends.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Which of the two character effects an emitter drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmitterId {
    /// Dust behind the feet while running on the ground.
    Walking,
    /// Puffs under the character while airborne.
    Jumping,
}

/// Particle emitter component.
///
/// # Fields
///
/// - `id` - Which effect this emitter is
/// - `active` - Whether particles are currently emitted
/// - `speed` - Velocity given to spawned particles
/// - `emissions_per_second` - Emission frequency (0 or negative = disabled)
/// - `lifespan` - Seconds a spawned particle lives
/// - `max_alive` - Optional cap on particles alive at once for this emitter
/// - `frames` - Texture frames picked at random for each particle
/// - `scale_start` / `scale_end` - Scale range sampled for each particle
/// - `time_since_emit` - Internal accumulator for emission timing
#[derive(Component, Debug, Clone)]
pub struct ParticleEmitter {
    pub id: EmitterId,
    pub active: bool,
    pub speed: Vec2,
    pub emissions_per_second: f32,
    pub lifespan: f32,
    pub max_alive: Option<u32>,
    pub frames: Vec<String>,
    pub scale_start: f32,
    pub scale_end: f32,
    pub time_since_emit: f32,
}

impl ParticleEmitter {
    /// Walking dust preset.
    pub fn walking(emissions_per_second: f32, lifespan: f32) -> Self {
        Self {
            id: EmitterId::Walking,
            active: false,
            speed: Vec2::ZERO,
            emissions_per_second,
            lifespan,
            max_alive: None,
            frames: vec![
                "smoke_03.png".to_string(),
                "smoke_02.png".to_string(),
                "smoke_02.png".to_string(),
            ],
            scale_start: 0.05,
            scale_end: 0.01,
            time_since_emit: 0.0,
        }
    }

    /// Jumping puff preset.
    pub fn jumping(emissions_per_second: f32, lifespan: f32, max_alive: u32) -> Self {
        Self {
            id: EmitterId::Jumping,
            active: false,
            speed: Vec2::ZERO,
            emissions_per_second,
            lifespan,
            max_alive: Some(max_alive),
            frames: vec!["smoke_04.png".to_string(), "smoke_09.png".to_string()],
            scale_start: 0.005,
            scale_end: 0.01,
            time_since_emit: 0.0,
        }
    }

    pub fn start(&mut self) {
        self.active = true;
    }

    /// Stop emitting. Pending emission time is discarded.
    pub fn stop(&mut self) {
        self.active = false;
        self.time_since_emit = 0.0;
    }

    pub fn set_speed(&mut self, speed: Vec2) {
        self.speed = speed;
    }
}

/// A single spawned particle.
#[derive(Component, Debug, Clone)]
pub struct Particle {
    /// Emitter that produced this particle.
    pub emitter: EmitterId,
    /// Texture frame chosen at spawn.
    pub frame: String,
    pub scale: f32,
}
