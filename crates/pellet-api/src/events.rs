//! Event types for pellet -> host streaming

use chrono::{DateTime, Local};
use pellet_util::{EnemyId, MatchId};
use serde::{Deserialize, Serialize};

use crate::{EnemyState, MatchPhase, MatchSnapshot, API_VERSION};

/// Event envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub api_version: u32,
    pub timestamp: DateTime<Local>,
    /// Simulation time in seconds since the match epoch
    pub game_time: f64,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(game_time: f64, payload: EventPayload) -> Self {
        Self {
            api_version: API_VERSION,
            timestamp: Local::now(),
            game_time,
            payload,
        }
    }
}

/// All events a match can report to its host
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    /// Full state snapshot
    StateChanged(MatchSnapshot),

    ScoreChanged {
        score: u32,
        delta: u32,
    },

    LifeLost {
        lives: u32,
    },

    PositionsReset,

    EnemiesScared {
        count: usize,
    },

    EnemyStateChanged {
        enemy_id: EnemyId,
        from: EnemyState,
        to: EnemyState,
    },

    MatchEnded {
        match_id: MatchId,
        phase: MatchPhase,
        score: u32,
        message: String,
    },

    MatchRestarted {
        match_id: MatchId,
    },
}
