//! Player agent: turns contact events into match decisions

use pellet_api::{AgentRef, Contact, Cue, Direction, EnemyState};
use pellet_config::ScoringRules;
use pellet_host_api::Collaborators;
use pellet_util::{CollectibleId, EnemyId};
use tracing::debug;

use crate::AgentBindings;

/// What the match controller should do with a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactDecision {
    /// Consume the collectible and award points; power collectibles also scare
    Collect {
        id: CollectibleId,
        points: u32,
        power: bool,
    },

    /// Award points and send the enemy to Eaten
    EatEnemy { enemy_id: EnemyId, points: u32 },

    /// Player dies; one life is lost
    Die { enemy_id: EnemyId },

    Ignored { reason: IgnoreReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    PlayerInactive,
    /// The contacted enemy is not bound in the roster
    UnknownEnemy,
}

/// The player. Holds no match state beyond its activity flag.
#[derive(Debug)]
pub struct PlayerAgent {
    active: bool,
    heading: Option<Direction>,
    bindings: AgentBindings,
}

impl PlayerAgent {
    pub fn new(bindings: AgentBindings) -> Self {
        Self {
            active: true,
            heading: None,
            bindings,
        }
    }

    pub fn from_collaborators(collaborators: &Collaborators) -> Self {
        Self::new(AgentBindings::from_collaborators(
            AgentRef::Player,
            collaborators,
        ))
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn heading(&self) -> Option<Direction> {
        self.heading
    }

    /// Interpret a contact.
    ///
    /// `enemy_state` is the current state of the contacted enemy, or `None`
    /// when the contact is not with an enemy or the enemy is unbound.
    pub fn decide(
        &self,
        contact: &Contact,
        enemy_state: Option<EnemyState>,
        scoring: &ScoringRules,
    ) -> ContactDecision {
        if !self.active {
            return ContactDecision::Ignored {
                reason: IgnoreReason::PlayerInactive,
            };
        }

        match contact {
            Contact::Collectible { id } => ContactDecision::Collect {
                id: *id,
                points: scoring.collectible,
                power: false,
            },
            Contact::PowerCollectible { id } => ContactDecision::Collect {
                id: *id,
                points: scoring.power_collectible,
                power: true,
            },
            Contact::Enemy { enemy } => match enemy_state {
                None => ContactDecision::Ignored {
                    reason: IgnoreReason::UnknownEnemy,
                },
                Some(state) if state.is_vulnerable() => ContactDecision::EatEnemy {
                    enemy_id: enemy.clone(),
                    points: scoring.enemy_eaten,
                },
                Some(_) => ContactDecision::Die {
                    enemy_id: enemy.clone(),
                },
            },
        }
    }

    /// Update the heading resolved by the input collaborator and play the
    /// matching walk cue. Returns false if the player is inactive or the
    /// heading did not change.
    pub fn set_heading(&mut self, direction: Direction) -> bool {
        if !self.active || self.heading == Some(direction) {
            return false;
        }
        self.heading = Some(direction);
        self.bindings.cue(Cue::walk(direction));
        true
    }

    /// Fatal contact cue
    pub fn die(&self) {
        self.bindings.cue(Cue::Dead);
    }

    /// Back to the start position after a lost life
    pub fn respawn(&mut self) {
        debug!("Player respawning");
        self.heading = None;
        self.bindings.move_to_start();
        self.bindings.cue(Cue::Idle);
    }

    /// Full reset for a new match
    pub fn reset_to_start(&mut self) {
        self.respawn();
    }
}
