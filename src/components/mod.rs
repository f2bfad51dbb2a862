//! ECS components for session entities.
//!
//! Submodules overview:
//! - [`animation`] – clip selection and playback state for the character
//! - [`boxcollider`] – axis-aligned rectangular collider
//! - [`collectible`] – one-shot coins and flags
//! - [`collision`] – overlap rules between named groups
//! - [`group`] – tag component grouping session entities by name
//! - [`inputcontrolled`] – platformer control tuning read by the controller
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`particleemitter`] – dust emitters and the particles they spawn
//! - [`player`] – player marker, facing and contact flags
//! - [`rigidbody`] – kinematic body with named forces and drag
//! - [`sprite`] – texture frame and mirroring hint for the renderer
//! - [`stuckto`] – follow binding used by the emitters
//! - [`ttl`] – time-to-live countdown

pub mod animation;
pub mod boxcollider;
pub mod collectible;
pub mod collision;
pub mod group;
pub mod inputcontrolled;
pub mod mapposition;
pub mod particleemitter;
pub mod player;
pub mod rigidbody;
pub mod sprite;
pub mod stuckto;
pub mod ttl;
