//! Error types for pellet

use thiserror::Error;

use crate::EnemyId;

/// Core error type for pellet operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PelletError {
    #[error("Match already ended ({phase}); mutation rejected")]
    PostTerminalMutation { phase: String },

    #[error("Invalid point value: {0}")]
    InvalidPoints(u32),

    #[error("Missing collaborator: {0}")]
    MissingCollaborator(String),

    #[error("Unknown enemy: {0}")]
    UnknownEnemy(EnemyId),
}

impl PelletError {
    pub fn post_terminal(phase: impl std::fmt::Display) -> Self {
        Self::PostTerminalMutation {
            phase: phase.to_string(),
        }
    }

    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingCollaborator(what.into())
    }
}

pub type Result<T> = std::result::Result<T, PelletError>;
