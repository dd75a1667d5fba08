//! Shared utilities for pellet
//!
//! This crate provides:
//! - ID types (EnemyId, CollectibleId, MatchId)
//! - Simulation time (GameInstant, duration helpers)
//! - Error types
//! - Default paths for the configuration file

mod error;
mod ids;
mod paths;
mod time;

pub use error::*;
pub use ids::*;
pub use paths::*;
pub use time::*;
