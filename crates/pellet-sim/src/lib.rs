//! Headless simulator for pellet
//!
//! Stands in for a game engine: owns the clock, holds the collectible field
//! and feeds scripted contacts to a `MatchController`.

mod runner;
mod scenario;
mod world;

pub use runner::*;
pub use scenario::*;
pub use world::*;
