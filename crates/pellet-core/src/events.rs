//! Core events emitted by the match controller

use pellet_api::{EnemyState, EventPayload, MatchPhase};
use pellet_util::{EnemyId, MatchId};

/// Events emitted by the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    ScoreChanged {
        score: u32,
        delta: u32,
    },

    /// A life was lost; `lives` is the count remaining
    LifeLost {
        lives: u32,
    },

    /// Player and enemies were sent back to their start positions
    PositionsReset,

    /// A scare broadcast went out; `count` enemies actually became Scared
    EnemiesScared {
        count: usize,
    },

    EnemyStateChanged {
        enemy_id: EnemyId,
        from: EnemyState,
        to: EnemyState,
    },

    /// The match reached a terminal phase
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

impl From<CoreEvent> for EventPayload {
    fn from(event: CoreEvent) -> Self {
        match event {
            CoreEvent::ScoreChanged { score, delta } => EventPayload::ScoreChanged { score, delta },
            CoreEvent::LifeLost { lives } => EventPayload::LifeLost { lives },
            CoreEvent::PositionsReset => EventPayload::PositionsReset,
            CoreEvent::EnemiesScared { count } => EventPayload::EnemiesScared { count },
            CoreEvent::EnemyStateChanged { enemy_id, from, to } => {
                EventPayload::EnemyStateChanged { enemy_id, from, to }
            }
            CoreEvent::MatchEnded {
                match_id,
                phase,
                score,
                message,
            } => EventPayload::MatchEnded {
                match_id,
                phase,
                score,
                message,
            },
            CoreEvent::MatchRestarted { match_id } => EventPayload::MatchRestarted { match_id },
        }
    }
}
