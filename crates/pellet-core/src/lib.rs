//! Match rules and enemy state machine for pellet
//!
//! This crate is the heart of pellet, containing:
//! - Match controller (score, lives, phase; win/loss polling once per tick)
//! - Player agent (interprets contact events)
//! - Enemy state machine (Normal -> Scared -> Recovering -> Normal, or -> Eaten -> Normal)
//! - Deadline-based timers driven by the host's simulation clock

mod bindings;
mod enemy;
mod engine;
mod events;
mod player;

pub use bindings::*;
pub use enemy::*;
pub use engine::*;
pub use events::*;
pub use player::*;
