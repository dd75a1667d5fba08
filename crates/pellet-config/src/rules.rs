//! Validated rule structures

use crate::schema::{RawConfig, RawEnemy, RawScoring, RawTimers};
use pellet_util::EnemyId;
use std::time::Duration;

pub const DEFAULT_STARTING_LIVES: u32 = 3;
pub const DEFAULT_COLLECTIBLE_POINTS: u32 = 10;
pub const DEFAULT_POWER_COLLECTIBLE_POINTS: u32 = 50;
pub const DEFAULT_ENEMY_EATEN_POINTS: u32 = 200;
pub const DEFAULT_SCARE_SECS: f64 = 7.0;
pub const DEFAULT_SCARE_TOTAL_SECS: f64 = 10.0;
pub const DEFAULT_RESPAWN_SECS: f64 = 3.0;

/// Upper bound for any timer, one day
pub const MAX_TIMER_SECS: f64 = 86_400.0;

/// Roster used when the config lists no enemies
const DEFAULT_ROSTER: [&str; 4] = ["blinky", "pinky", "inky", "clyde"];

/// Validated rules ready for use by the core
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    pub match_rules: MatchRules,
    pub scoring: ScoringRules,
    pub timers: TimerRules,
    pub roster: Vec<EnemySpec>,
}

impl Rules {
    /// Convert from raw config (after validation)
    pub fn from_raw(raw: RawConfig) -> Self {
        let roster = if raw.enemies.is_empty() {
            default_roster()
        } else {
            raw.enemies.into_iter().map(EnemySpec::from_raw).collect()
        };

        Self {
            match_rules: MatchRules {
                starting_lives: raw
                    .match_settings
                    .starting_lives
                    .unwrap_or(DEFAULT_STARTING_LIVES),
            },
            scoring: ScoringRules::from_raw(raw.scoring),
            timers: TimerRules::from_raw(raw.timers),
            roster,
        }
    }

    /// Get roster entry by ID
    pub fn get_enemy(&self, id: &EnemyId) -> Option<&EnemySpec> {
        self.roster.iter().find(|e| &e.id == id)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            match_rules: MatchRules::default(),
            scoring: ScoringRules::default(),
            timers: TimerRules::default(),
            roster: default_roster(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRules {
    pub starting_lives: u32,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            starting_lives: DEFAULT_STARTING_LIVES,
        }
    }
}

/// Points awarded per contact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringRules {
    pub collectible: u32,
    pub power_collectible: u32,
    pub enemy_eaten: u32,
}

impl ScoringRules {
    fn from_raw(raw: RawScoring) -> Self {
        Self {
            collectible: raw.collectible.unwrap_or(DEFAULT_COLLECTIBLE_POINTS),
            power_collectible: raw
                .power_collectible
                .unwrap_or(DEFAULT_POWER_COLLECTIBLE_POINTS),
            enemy_eaten: raw.enemy_eaten.unwrap_or(DEFAULT_ENEMY_EATEN_POINTS),
        }
    }
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self::from_raw(RawScoring::default())
    }
}

/// Enemy timer durations. `scare` and `scare_total` are both measured from
/// the moment the scare starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRules {
    pub scare: Duration,
    pub scare_total: Duration,
    pub respawn: Duration,
}

impl TimerRules {
    fn from_raw(raw: RawTimers) -> Self {
        Self {
            scare: Duration::from_secs_f64(raw.scare_seconds.unwrap_or(DEFAULT_SCARE_SECS)),
            scare_total: Duration::from_secs_f64(
                raw.scare_total_seconds.unwrap_or(DEFAULT_SCARE_TOTAL_SECS),
            ),
            respawn: Duration::from_secs_f64(raw.respawn_seconds.unwrap_or(DEFAULT_RESPAWN_SECS)),
        }
    }
}

impl Default for TimerRules {
    fn default() -> Self {
        Self::from_raw(RawTimers::default())
    }
}

/// Validated roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemySpec {
    pub id: EnemyId,
    pub label: String,
}

impl EnemySpec {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id: EnemyId::new(id),
        }
    }

    fn from_raw(raw: RawEnemy) -> Self {
        let label = raw.label.unwrap_or_else(|| raw.id.clone());
        Self {
            id: EnemyId::new(raw.id),
            label,
        }
    }
}

fn default_roster() -> Vec<EnemySpec> {
    DEFAULT_ROSTER.iter().map(|id| EnemySpec::new(*id)).collect()
}
