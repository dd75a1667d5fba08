//! Shared types for the pellet API

use chrono::{DateTime, Local};
use pellet_util::{CollectibleId, EnemyId, MatchId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Match-level phase. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl MatchPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchPhase::Playing)
    }
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPhase::Playing => write!(f, "playing"),
            MatchPhase::Won => write!(f, "won"),
            MatchPhase::Lost => write!(f, "lost"),
        }
    }
}

/// Enemy state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnemyState {
    #[default]
    Normal,
    Scared,
    Recovering,
    Eaten,
}

impl EnemyState {
    /// Scared and Recovering enemies can be eaten
    pub fn is_vulnerable(&self) -> bool {
        matches!(self, EnemyState::Scared | EnemyState::Recovering)
    }
}

impl fmt::Display for EnemyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnemyState::Normal => write!(f, "normal"),
            EnemyState::Scared => write!(f, "scared"),
            EnemyState::Recovering => write!(f, "recovering"),
            EnemyState::Eaten => write!(f, "eaten"),
        }
    }
}

/// Which agent a collaborator call refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "agent", content = "id", rename_all = "snake_case")]
pub enum AgentRef {
    Player,
    Enemy(EnemyId),
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentRef::Player => write!(f, "player"),
            AgentRef::Enemy(id) => write!(f, "enemy:{}", id),
        }
    }
}

/// Contact-begin event delivered by the collision collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Contact {
    Collectible { id: CollectibleId },
    PowerCollectible { id: CollectibleId },
    Enemy { enemy: EnemyId },
}

/// Player heading as resolved by the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// One-way presentation cues (animation triggers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cue {
    WalkLeft,
    WalkRight,
    WalkUp,
    WalkDown,
    Idle,
    Dead,
    Scared,
    Recovering,
    Walking,
}

impl Cue {
    pub fn walk(direction: Direction) -> Self {
        match direction {
            Direction::Left => Cue::WalkLeft,
            Direction::Right => Cue::WalkRight,
            Direction::Up => Cue::WalkUp,
            Direction::Down => Cue::WalkDown,
        }
    }
}

/// View of one roster slot for snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub enemy_id: EnemyId,
    pub label: String,
    pub state: EnemyState,
    pub active: bool,
    /// Time until the next pending timer fires, if any
    pub next_timer_in: Option<Duration>,
    /// Time until a scared or eaten enemy is Normal again
    pub normal_in: Option<Duration>,
}

/// Observable match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub api_version: u32,
    pub match_id: MatchId,
    /// Wall-clock start of the current match, for display
    pub started_at: DateTime<Local>,
    pub score: u32,
    pub lives: u32,
    pub phase: MatchPhase,
    pub remaining_collectibles: usize,
    pub player_active: bool,
    pub enemies: Vec<EnemyView>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!MatchPhase::Playing.is_terminal());
        assert!(MatchPhase::Won.is_terminal());
        assert!(MatchPhase::Lost.is_terminal());
    }

    #[test]
    fn vulnerable_states() {
        assert!(!EnemyState::Normal.is_vulnerable());
        assert!(EnemyState::Scared.is_vulnerable());
        assert!(EnemyState::Recovering.is_vulnerable());
        assert!(!EnemyState::Eaten.is_vulnerable());
    }

    #[test]
    fn contact_serialization() {
        let contact = Contact::Enemy {
            enemy: EnemyId::new("inky"),
        };
        let json = serde_json::to_string(&contact).unwrap();
        assert_eq!(json, r#"{"kind":"enemy","enemy":"inky"}"#);

        let parsed: Contact = serde_json::from_str(r#"{"kind":"power_collectible","id":4}"#).unwrap();
        assert_eq!(
            parsed,
            Contact::PowerCollectible {
                id: CollectibleId::new(4)
            }
        );
    }

    #[test]
    fn walk_cue_per_direction() {
        assert_eq!(Cue::walk(Direction::Left), Cue::WalkLeft);
        assert_eq!(Cue::walk(Direction::Down), Cue::WalkDown);
    }
}
