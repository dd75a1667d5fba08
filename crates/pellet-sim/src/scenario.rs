//! Scripted scenario files
//!
//! ```toml
//! collectibles = 20
//! power_collectibles = 4
//! max_seconds = 30.0
//!
//! [[steps]]
//! at = 0.5
//! contact = "power"
//!
//! [[steps]]
//! at = 1.0
//! contact = "enemy"
//! enemy = "blinky"
//! ```

use pellet_api::Direction;
use pellet_util::{EnemyId, GameInstant};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Used when a scenario does not set `max_seconds`
pub const DEFAULT_MAX_SECONDS: f64 = 120.0;

/// Longest scenario accepted, one day of simulated time
pub const MAX_SCENARIO_SECONDS: f64 = 86_400.0;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to read scenario file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Step {index}: {message}")]
    InvalidStep { index: usize, message: String },

    #[error("max_seconds must be positive and at most one day, got {0}")]
    InvalidMaxSeconds(f64),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;

#[derive(Debug, Deserialize)]
struct RawScenario {
    #[serde(default)]
    collectibles: u32,
    #[serde(default)]
    power_collectibles: u32,
    max_seconds: Option<f64>,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawContactKind {
    Collectible,
    Power,
    Enemy,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    at: f64,
    contact: Option<RawContactKind>,
    enemy: Option<String>,
    /// Explicit collectible id; otherwise the next unused one of that kind
    id: Option<u32>,
    heading: Option<Direction>,
    #[serde(default)]
    restart: bool,
}

/// What a step does when it comes due
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Collect { power: bool, id: Option<u32> },
    TouchEnemy(EnemyId),
    Heading(Direction),
    Restart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub at: GameInstant,
    pub action: Action,
}

/// A validated scenario. Steps are sorted by time; ties keep file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub collectibles: u32,
    pub power_collectibles: u32,
    pub max_duration: Duration,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn load(path: impl AsRef<Path>) -> ScenarioResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> ScenarioResult<Self> {
        let raw: RawScenario = toml::from_str(content)?;

        let max_seconds = raw.max_seconds.unwrap_or(DEFAULT_MAX_SECONDS);
        if !max_seconds.is_finite() || max_seconds <= 0.0 || max_seconds > MAX_SCENARIO_SECONDS {
            return Err(ScenarioError::InvalidMaxSeconds(max_seconds));
        }

        let mut steps = raw
            .steps
            .into_iter()
            .enumerate()
            .map(|(index, raw)| convert_step(index, raw))
            .collect::<ScenarioResult<Vec<_>>>()?;
        steps.sort_by_key(|s| s.at);

        Ok(Self {
            collectibles: raw.collectibles,
            power_collectibles: raw.power_collectibles,
            max_duration: Duration::from_secs_f64(max_seconds),
            steps,
        })
    }

    /// Total collectibles placed in the world
    pub fn field_size(&self) -> u32 {
        self.collectibles + self.power_collectibles
    }
}

fn convert_step(index: usize, raw: RawStep) -> ScenarioResult<Step> {
    let invalid = |message: &str| ScenarioError::InvalidStep {
        index,
        message: message.to_string(),
    };

    if !raw.at.is_finite() || raw.at < 0.0 || raw.at > MAX_SCENARIO_SECONDS {
        return Err(invalid(&format!(
            "`at` must be between 0 and {MAX_SCENARIO_SECONDS} seconds"
        )));
    }

    let chosen = [raw.contact.is_some(), raw.heading.is_some(), raw.restart]
        .iter()
        .filter(|set| **set)
        .count();
    if chosen != 1 {
        return Err(invalid(
            "exactly one of `contact`, `heading` or `restart` is required",
        ));
    }

    let action = if let Some(kind) = raw.contact {
        match kind {
            RawContactKind::Collectible => Action::Collect {
                power: false,
                id: raw.id,
            },
            RawContactKind::Power => Action::Collect {
                power: true,
                id: raw.id,
            },
            RawContactKind::Enemy => match raw.enemy {
                Some(id) if !id.is_empty() => Action::TouchEnemy(EnemyId::new(id)),
                _ => return Err(invalid("enemy contact needs an `enemy` id")),
            },
        }
    } else if let Some(direction) = raw.heading {
        Action::Heading(direction)
    } else {
        Action::Restart
    };

    Ok(Step {
        at: GameInstant::from_secs_f64(raw.at),
        action,
    })
}
