use bevy_ecs::prelude::*;

/// Declares that overlaps between members of two groups must be reported.
///
/// The overlap detector emits an
/// [`OverlapMessage`](crate::events::collision::OverlapMessage) the first
/// frame two matching entities start overlapping.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct OverlapRule {
    pub group_a: String,
    pub group_b: String,
}

impl OverlapRule {
    pub fn new(group_a: impl Into<String>, group_b: impl Into<String>) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
        }
    }

    pub fn matches(&self, group_a: &str, group_b: &str) -> bool {
        (self.group_a == group_a && self.group_b == group_b)
            || (self.group_a == group_b && self.group_b == group_a)
    }
}
