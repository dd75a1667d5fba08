//! Per-agent collaborator handles

use pellet_api::{AgentRef, Cue};
use pellet_host_api::{move_to_start_logged, play_cue_logged, Collaborators, Positioner, Presentation};
use std::sync::Arc;
use tracing::{trace, warn};

/// Presentation and position handles for one agent.
///
/// Either handle may be unbound; calls through an unbound handle are
/// skipped.
#[derive(Clone)]
pub struct AgentBindings {
    agent: AgentRef,
    presentation: Option<Arc<dyn Presentation>>,
    positions: Option<Arc<dyn Positioner>>,
}

impl AgentBindings {
    pub fn new(
        agent: AgentRef,
        presentation: Option<Arc<dyn Presentation>>,
        positions: Option<Arc<dyn Positioner>>,
    ) -> Self {
        if presentation.is_none() {
            warn!(agent = %agent, "Presentation not bound, cues will be skipped");
        }
        if positions.is_none() {
            warn!(agent = %agent, "Positioner not bound, resets will not move the agent");
        }

        Self {
            agent,
            presentation,
            positions,
        }
    }

    /// Bindings taken from the shared match collaborators
    pub fn from_collaborators(agent: AgentRef, collaborators: &Collaborators) -> Self {
        Self::new(
            agent,
            collaborators.presentation.clone(),
            collaborators.positions.clone(),
        )
    }

    pub fn agent(&self) -> &AgentRef {
        &self.agent
    }

    pub fn cue(&self, cue: Cue) {
        let agent = &self.agent;
        match &self.presentation {
            Some(presentation) => play_cue_logged(presentation.as_ref(), agent, cue),
            None => trace!(agent = %agent, cue = ?cue, "Cue skipped, no presentation"),
        }
    }

    pub fn move_to_start(&self) {
        let agent = &self.agent;
        match &self.positions {
            Some(positions) => move_to_start_logged(positions.as_ref(), agent),
            None => trace!(agent = %agent, "Move skipped, no positioner"),
        }
    }
}

impl std::fmt::Debug for AgentBindings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentBindings")
            .field("agent", &self.agent)
            .field("presentation", &self.presentation.is_some())
            .field("positions", &self.positions.is_some())
            .finish()
    }
}
