//! Collaborator traits

use pellet_api::{AgentRef, Cue};
use pellet_util::CollectibleId;
use std::sync::Arc;
use thiserror::Error;

/// Errors a collaborator may report back.
///
/// The core never propagates these; they are logged and the affected
/// entity is skipped.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Cue not available: {0:?}")]
    CueUnavailable(Cue),
}

pub type HostResult<T> = Result<T, HostError>;

/// Animation/rendering collaborator. Fire-and-forget.
pub trait Presentation: Send + Sync {
    /// Play a one-shot cue on the given agent
    fn play_cue(&self, agent: &AgentRef, cue: Cue) -> HostResult<()>;
}

/// Spawn-point collaborator. Coordinates live outside the core.
pub trait Positioner: Send + Sync {
    /// Move the agent back to its start position
    fn move_to_start(&self, agent: &AgentRef) -> HostResult<()>;
}

/// The collectible field
pub trait CollectibleSource: Send + Sync {
    /// Number of collectibles (regular and power) still in the world
    fn remaining_count(&self) -> usize;

    /// Remove a collectible from the world. Returns false if it was already gone.
    fn consume(&self, id: CollectibleId) -> bool;
}

/// Collaborator handles wired into a match at construction time
#[derive(Clone)]
pub struct Collaborators {
    pub collectibles: Arc<dyn CollectibleSource>,
    pub presentation: Option<Arc<dyn Presentation>>,
    pub positions: Option<Arc<dyn Positioner>>,
}

impl Collaborators {
    pub fn new(collectibles: Arc<dyn CollectibleSource>) -> Self {
        Self {
            collectibles,
            presentation: None,
            positions: None,
        }
    }

    pub fn with_presentation(mut self, presentation: Arc<dyn Presentation>) -> Self {
        self.presentation = Some(presentation);
        self
    }

    pub fn with_positions(mut self, positions: Arc<dyn Positioner>) -> Self {
        self.positions = Some(positions);
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("remaining_collectibles", &self.collectibles.remaining_count())
            .field("presentation", &self.presentation.is_some())
            .field("positions", &self.positions.is_some())
            .finish()
    }
}

/// Play a cue, logging instead of failing
pub fn play_cue_logged(presentation: &dyn Presentation, agent: &AgentRef, cue: Cue) {
    if let Err(e) = presentation.play_cue(agent, cue) {
        tracing::warn!(agent = %agent, cue = ?cue, error = %e, "Cue failed, ignoring");
    }
}

/// Move an agent to start, logging instead of failing
pub fn move_to_start_logged(positions: &dyn Positioner, agent: &AgentRef) {
    if let Err(e) = positions.move_to_start(agent) {
        tracing::warn!(agent = %agent, error = %e, "Move to start failed, ignoring");
    }
}
