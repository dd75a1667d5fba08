//! Enemy state machine

use pellet_api::{AgentRef, Cue, EnemyState, EnemyView};
use pellet_config::{EnemySpec, TimerRules};
use pellet_host_api::Collaborators;
use pellet_util::{EnemyId, GameInstant};
use std::time::Duration;
use tracing::debug;

use crate::AgentBindings;

/// A single state change on one enemy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnemyTransition {
    pub enemy_id: EnemyId,
    pub from: EnemyState,
    pub to: EnemyState,
}

/// One enemy and its pending timers.
///
/// Timers are stored as deadlines and compared against the `now` passed to
/// [`EnemyAgent::tick`]. At most one timed sequence is pending at a time:
/// either the scare pair (`scare_deadline`, `recover_deadline`) or the
/// respawn deadline. Every transition that starts a sequence clears all
/// deadlines first.
#[derive(Debug)]
pub struct EnemyAgent {
    spec: EnemySpec,
    timers: TimerRules,
    state: EnemyState,
    active: bool,

    /// Scared -> Recovering
    scare_deadline: Option<GameInstant>,
    /// Scared/Recovering -> Normal
    recover_deadline: Option<GameInstant>,
    /// Eaten -> Normal
    respawn_deadline: Option<GameInstant>,

    bindings: AgentBindings,
}

impl EnemyAgent {
    pub fn new(spec: EnemySpec, timers: TimerRules, bindings: AgentBindings) -> Self {
        Self {
            spec,
            timers,
            state: EnemyState::Normal,
            active: true,
            scare_deadline: None,
            recover_deadline: None,
            respawn_deadline: None,
            bindings,
        }
    }

    pub fn from_collaborators(
        spec: EnemySpec,
        timers: TimerRules,
        collaborators: &Collaborators,
    ) -> Self {
        let agent = AgentRef::Enemy(spec.id.clone());
        Self::new(
            spec,
            timers,
            AgentBindings::from_collaborators(agent, collaborators),
        )
    }

    pub fn id(&self) -> &EnemyId {
        &self.spec.id
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable or disable gameplay reactions. A disabled enemy ignores
    /// signals and its timers do not advance.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn has_pending_timers(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Earliest pending deadline, if any
    pub fn next_deadline(&self) -> Option<GameInstant> {
        [self.scare_deadline, self.recover_deadline, self.respawn_deadline]
            .into_iter()
            .flatten()
            .min()
    }

    /// Scare signal. Only a Normal enemy reacts; scares never stack or
    /// extend a running sequence.
    pub fn scare(&mut self, now: GameInstant) -> Option<EnemyTransition> {
        if !self.active {
            debug!(enemy = %self.spec.id, "Scare ignored, enemy disabled");
            return None;
        }
        if self.state != EnemyState::Normal {
            debug!(enemy = %self.spec.id, state = %self.state, "Scare ignored");
            return None;
        }

        self.cancel_timers();
        self.scare_deadline = Some(now + self.timers.scare);
        self.recover_deadline = Some(now + self.timers.scare_total);
        self.bindings.cue(Cue::Scared);

        Some(self.transition(EnemyState::Scared))
    }

    /// Eaten signal from the player. Only Scared or Recovering enemies react.
    pub fn eat(&mut self, now: GameInstant) -> Option<EnemyTransition> {
        if !self.active {
            debug!(enemy = %self.spec.id, "Eat ignored, enemy disabled");
            return None;
        }
        if !self.state.is_vulnerable() {
            debug!(enemy = %self.spec.id, state = %self.state, "Eat ignored");
            return None;
        }

        self.cancel_timers();
        self.respawn_deadline = Some(now + self.timers.respawn);
        self.bindings.cue(Cue::Dead);

        Some(self.transition(EnemyState::Eaten))
    }

    /// Fire every deadline that has elapsed by `now`.
    ///
    /// A long tick may cross both scare deadlines at once; both transitions
    /// are reported in order.
    pub fn tick(&mut self, now: GameInstant) -> Vec<EnemyTransition> {
        let mut transitions = Vec::new();
        if !self.active {
            return transitions;
        }

        if let Some(deadline) = self.scare_deadline
            && now >= deadline
        {
            self.scare_deadline = None;
            if self.state == EnemyState::Scared {
                self.bindings.cue(Cue::Recovering);
                transitions.push(self.transition(EnemyState::Recovering));
            }
        }

        if let Some(deadline) = self.recover_deadline
            && now >= deadline
        {
            self.recover_deadline = None;
            if self.state.is_vulnerable() {
                self.bindings.cue(Cue::Walking);
                transitions.push(self.transition(EnemyState::Normal));
            }
        }

        if let Some(deadline) = self.respawn_deadline
            && now >= deadline
        {
            self.respawn_deadline = None;
            if self.state == EnemyState::Eaten {
                self.bindings.move_to_start();
                self.bindings.cue(Cue::Walking);
                transitions.push(self.transition(EnemyState::Normal));
            }
        }

        transitions
    }

    /// Back to Normal at the start position with nothing pending.
    /// Applies regardless of the active flag.
    pub fn reset_to_start(&mut self) -> Option<EnemyTransition> {
        self.cancel_timers();
        self.bindings.move_to_start();
        self.bindings.cue(Cue::Walking);

        if self.state == EnemyState::Normal {
            None
        } else {
            Some(self.transition(EnemyState::Normal))
        }
    }

    /// Get view for snapshots
    pub fn to_view(&self, now: GameInstant) -> EnemyView {
        EnemyView {
            enemy_id: self.spec.id.clone(),
            label: self.spec.label.clone(),
            state: self.state,
            active: self.active,
            next_timer_in: self
                .next_deadline()
                .map(|d| d.saturating_duration_until(now)),
            normal_in: self.time_until_normal(now),
        }
    }

    /// Time left until the enemy returns to Normal, if a sequence is running
    pub fn time_until_normal(&self, now: GameInstant) -> Option<Duration> {
        self.recover_deadline
            .or(self.respawn_deadline)
            .map(|d| d.saturating_duration_until(now))
    }

    fn cancel_timers(&mut self) {
        self.scare_deadline = None;
        self.recover_deadline = None;
        self.respawn_deadline = None;
    }

    fn transition(&mut self, to: EnemyState) -> EnemyTransition {
        let from = self.state;
        self.state = to;
        debug!(enemy = %self.spec.id, from = %from, to = %to, "Enemy state changed");
        EnemyTransition {
            enemy_id: self.spec.id.clone(),
            from,
            to,
        }
    }
}
