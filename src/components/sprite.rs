use bevy_ecs::prelude::Component;

/// Presentation hint for the renderer collaborator: which texture frame to
/// draw and whether to mirror it.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: String,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
            flip_h: false,
        }
    }
}
