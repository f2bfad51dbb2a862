use bevy_ecs::prelude::Component;

/// Tag component grouping session entities by name ("player", "coins", ...).
///
/// Every entity that belongs to a play session carries a `Group`; the
/// restart path despawns exactly those.
#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
