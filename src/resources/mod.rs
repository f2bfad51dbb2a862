//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, tuning,
//! level data, session handles, and the collaborator bridges.
//!
//! Overview
//! - `animationstore` – clip definitions for the character
//! - `audio` – bridge and channels for the background audio thread
//! - `camera` – follow binding handed to the presentation layer
//! - `gameconfig` – tuning constants loaded from INI
//! - `gamestate` – outcome and coin count of the current session
//! - `input` – raw and edge-detected state of the four actions
//! - `level` – static level layout used to (re)build a session
//! - `session` – handles to the entities of the current session
//! - `status` – status line text for the presentation layer
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod audio;
pub mod camera;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod session;
pub mod status;
pub mod systemsstore;
pub mod worldtime;
