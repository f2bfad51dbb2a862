//! Lifespan countdown for short-lived entities.
//!
//! Dust particles are spawned with a [`Ttl`] equal to their emitter's
//! lifespan. [`crate::systems::ttl::ttl_system`] ticks it with the frame delta
//! and despawns the entity once it has run out.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ttl {
    /// Seconds left. Zero or below means expired.
    pub remaining: f32,
}

impl Ttl {
    pub fn new(seconds: f32) -> Self {
        Ttl { remaining: seconds }
    }

    /// Consume `dt` seconds and report whether the lifespan is over.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.expired()
    }

    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_counts_down_to_expiry() {
        let mut ttl = Ttl::new(0.35);
        assert!(!ttl.tick(0.2));
        assert!(ttl.tick(0.2));
        assert!(ttl.expired());
    }

    #[test]
    fn zero_lifespan_is_already_expired() {
        assert!(Ttl::new(0.0).expired());
    }
}
