//! ECS components consumed or written by the combat core.
//!
//! Organized by domain:
//! - actor: health, protection, motion, knockback resistance, collision box
//! - player: player identity + privileges
//! - input: aim input and direction cursor state

pub mod actor;
pub mod input;
pub mod player;

pub use actor::*;
pub use input::*;
pub use player::*;
