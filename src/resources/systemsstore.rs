//! Named one-shot systems.
//!
//! [`Game::new`](crate::game::Game::new) registers the session restart here
//! under [`RESTART_SESSION`]; the reset handler looks it up by name and runs
//! it through `Commands::run_system`, so it never touches the spawn code.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

pub const RESTART_SESSION: &str = "restart_session";

#[derive(Resource, Default)]
pub struct SystemsStore {
    pub map: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    pub fn get(&self, name: impl AsRef<str>) -> Option<SystemId> {
        self.map.get(name.as_ref()).copied()
    }
}
