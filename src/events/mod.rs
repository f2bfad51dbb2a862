//! Messages, events and observers exchanged between systems.
//!
//! Submodules:
//! - [`audio`] – commands and replies for the background audio thread
//! - [`collision`] – overlap notifications produced by the physics step
//! - [`gamestate`] – outcome transitions and the status line observer
pub mod audio;
pub mod collision;
pub mod gamestate;
