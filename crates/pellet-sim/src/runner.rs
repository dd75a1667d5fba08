//! Fixed-step scenario runner

use pellet_api::{Contact, Event, EventPayload, MatchSnapshot};
use pellet_config::Rules;
use pellet_core::{CoreEvent, MatchController};
use pellet_util::{CollectibleId, GameInstant};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::{Action, Scenario, SimWorld, Step};

/// Drives one match through a scenario with a fixed tick.
///
/// Each tick advances the clock, delivers every step that has come due,
/// then ticks the controller.
pub struct Simulation {
    controller: MatchController,
    world: Arc<SimWorld>,
    steps: Vec<Step>,
    next_step: usize,
    tick: Duration,
    max_duration: Duration,
    now: GameInstant,
}

impl Simulation {
    pub fn new(rules: Rules, scenario: Scenario, tick: Duration) -> Self {
        let world = Arc::new(SimWorld::new(
            scenario.collectibles,
            scenario.power_collectibles,
        ));
        let controller = MatchController::new(rules, &world.collaborators());

        info!(
            steps = scenario.steps.len(),
            tick_ms = tick.as_millis() as u64,
            max_seconds = scenario.max_duration.as_secs_f64(),
            "Simulation ready"
        );

        Self {
            controller,
            world,
            steps: scenario.steps,
            next_step: 0,
            tick,
            max_duration: scenario.max_duration,
            now: GameInstant::ZERO,
        }
    }

    pub fn controller(&self) -> &MatchController {
        &self.controller
    }

    pub fn now(&self) -> GameInstant {
        self.now
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.controller.snapshot(self.now)
    }

    /// Done once the time limit is reached, or the match has ended with no
    /// scripted steps left to deliver.
    pub fn is_finished(&self) -> bool {
        if self.now.since_epoch() >= self.max_duration {
            return true;
        }
        self.controller.phase().is_terminal() && self.next_step >= self.steps.len()
    }

    /// Run one fixed tick
    pub fn step(&mut self) -> Vec<Event> {
        self.now += self.tick;
        let now = self.now;
        let mut core_events = Vec::new();

        while let Some(step) = self.steps.get(self.next_step)
            && step.at <= now
        {
            let action = step.action.clone();
            self.next_step += 1;
            core_events.extend(self.apply(action, now));
        }

        core_events.extend(self.controller.tick(now));

        let game_time = now.since_epoch().as_secs_f64();
        core_events
            .into_iter()
            .map(|e| Event::new(game_time, EventPayload::from(e)))
            .collect()
    }

    /// Run to completion as fast as possible, handing each event to `on_event`
    pub fn run(&mut self, mut on_event: impl FnMut(&Event)) -> MatchSnapshot {
        while !self.is_finished() {
            for event in self.step() {
                on_event(&event);
            }
        }
        self.finish()
    }

    /// Final snapshot, logged
    pub fn finish(&self) -> MatchSnapshot {
        let snapshot = self.snapshot();
        info!(
            phase = %snapshot.phase,
            score = snapshot.score,
            lives = snapshot.lives,
            game_time = %pellet_util::format_duration(self.now.since_epoch()),
            "Simulation finished"
        );
        snapshot
    }

    fn apply(&mut self, action: Action, now: GameInstant) -> Vec<CoreEvent> {
        debug!(action = ?action, at = now.since_epoch().as_secs_f64(), "Scenario step");

        match action {
            Action::Collect { power, id } => {
                let id = match id.map(CollectibleId::new) {
                    Some(id) => id,
                    None => match self.world.next_remaining(power) {
                        Some(id) => id,
                        None => {
                            warn!(power, "No collectible of this kind left, step skipped");
                            return Vec::new();
                        }
                    },
                };
                let contact = if power {
                    Contact::PowerCollectible { id }
                } else {
                    Contact::Collectible { id }
                };
                self.controller.handle_contact(&contact, now)
            }
            Action::TouchEnemy(enemy) => {
                self.controller.handle_contact(&Contact::Enemy { enemy }, now)
            }
            Action::Heading(direction) => {
                self.controller.set_player_heading(direction);
                Vec::new()
            }
            Action::Restart => {
                self.world.refill();
                self.controller.restart()
            }
        }
    }
}
