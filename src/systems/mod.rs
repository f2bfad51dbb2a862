//! Per-frame systems.
//!
//! Submodules overview
//! - [`animation`] – select the character clip and advance playback
//! - [`audio`] – bridge with the audio thread (forward/poll message queues)
//! - [`collision`] – ground contact, world bounds and overlap notification
//! - [`input`] – turn the raw snapshot into [`crate::resources::input::InputState`]
//! - [`movement`] – integrate rigid bodies
//! - [`outcome`] – coin, flag and fall handling
//! - [`particleemitter`] – dust trigger and particle emission
//! - [`playercontroller`] – acceleration, drag and jump from input
//! - [`reset`] – restart the session on the reset edge
//! - [`stuckto`] – follow bindings
//! - [`time`] – update simulation time and delta
//! - [`ttl`] – despawn expired particles

pub mod animation;
pub mod audio;
pub mod collision;
pub mod input;
pub mod movement;
pub mod outcome;
pub mod particleemitter;
pub mod playercontroller;
pub mod reset;
pub mod stuckto;
pub mod time;
pub mod ttl;
