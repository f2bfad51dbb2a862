//! Snow Day player-control core.
//!
//! This module exposes the ECS components, resources, systems, and events
//! of the platformer core, plus the [`game::Game`] driver, for use by the
//! headless binary and integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
