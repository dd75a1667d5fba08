//! Collaborator trait interfaces for pellet
//!
//! This crate defines the seams between the rules core and the engine that
//! hosts it: rendering/animation, spawn-point storage and the collectible
//! field. It contains no engine code itself, only the traits and an
//! in-memory mock for tests.

mod mock;
mod traits;

pub use mock::*;
pub use traits::*;
