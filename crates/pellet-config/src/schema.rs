//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// Match-level settings
    #[serde(default, rename = "match")]
    pub match_settings: RawMatchConfig,

    /// Point values
    #[serde(default)]
    pub scoring: RawScoring,

    /// Enemy timer durations
    #[serde(default)]
    pub timers: RawTimers,

    /// Enemy roster. Empty means the default roster.
    #[serde(default)]
    pub enemies: Vec<RawEnemy>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMatchConfig {
    /// Lives at match start and after restart
    pub starting_lives: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawScoring {
    pub collectible: Option<u32>,
    pub power_collectible: Option<u32>,
    pub enemy_eaten: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawTimers {
    /// Seconds from scare until the Recovering cue
    pub scare_seconds: Option<f64>,

    /// Seconds from scare until the enemy returns to Normal
    pub scare_total_seconds: Option<f64>,

    /// Seconds an eaten enemy stays out of play
    pub respawn_seconds: Option<f64>,
}

/// Raw roster entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawEnemy {
    /// Unique stable ID
    pub id: String,

    /// Display label (defaults to the id)
    pub label: Option<String>,
}
