//! Shared types for pellet
//!
//! This crate defines the vocabulary shared between the core and its hosts:
//! - Match phase and enemy state enums
//! - Contact events delivered by the collision collaborator
//! - Presentation cues
//! - Snapshots and the outward event envelope

mod events;
mod types;

pub use events::*;
pub use types::*;

/// Current event/snapshot format version
pub const API_VERSION: u32 = 1;
