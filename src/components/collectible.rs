//! One-shot pickups placed by the level.

use bevy_ecs::prelude::Component;

/// Kind of pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectibleKind {
    Coin,
    /// Level goal. Touching it wins the session.
    Flag,
}

impl CollectibleKind {
    /// Name of the collision group holding this kind.
    pub fn group(self) -> &'static str {
        match self {
            CollectibleKind::Coin => "coins",
            CollectibleKind::Flag => "flags",
        }
    }
}

/// Static pickup volume. `alive` goes from true to false exactly once.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collectible {
    pub kind: CollectibleKind,
    pub alive: bool,
}

impl Collectible {
    pub fn new(kind: CollectibleKind) -> Self {
        Self { kind, alive: true }
    }

    /// Mark the collectible as taken. Returns false if it already was.
    pub fn consume(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        true
    }
}
