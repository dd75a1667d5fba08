//! Match controller

use chrono::{DateTime, Local};
use pellet_api::{API_VERSION, Contact, Direction, EnemyState, MatchPhase, MatchSnapshot};
use pellet_config::Rules;
use pellet_host_api::{CollectibleSource, Collaborators};
use pellet_util::{EnemyId, GameInstant, MatchId, PelletError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{ContactDecision, CoreEvent, EnemyAgent, EnemyTransition, PlayerAgent};

/// Owns score, lives and phase for one match, plus the player and the
/// enemy roster.
///
/// All mutation goes through these methods, called from the host's single
/// tick thread. Win/loss is detected by polling in [`MatchController::tick`],
/// not at the moment a threshold is crossed.
pub struct MatchController {
    rules: Rules,
    match_id: MatchId,
    started_at: DateTime<Local>,
    score: u32,
    lives: u32,
    phase: MatchPhase,
    player: Option<PlayerAgent>,
    /// Roster slots; `None` is an enemy that was never bound
    enemies: Vec<Option<EnemyAgent>>,
    collectibles: Arc<dyn CollectibleSource>,
}

impl MatchController {
    /// Create a match with a player and one enemy per roster entry, all
    /// bound to the shared collaborators
    pub fn new(rules: Rules, collaborators: &Collaborators) -> Self {
        let player = PlayerAgent::from_collaborators(collaborators);
        let enemies = rules
            .roster
            .iter()
            .map(|spec| {
                Some(EnemyAgent::from_collaborators(
                    spec.clone(),
                    rules.timers,
                    collaborators,
                ))
            })
            .collect();

        Self::from_parts(rules, collaborators.collectibles.clone(), Some(player), enemies)
    }

    /// Create a match from explicitly wired agents
    pub fn from_parts(
        rules: Rules,
        collectibles: Arc<dyn CollectibleSource>,
        player: Option<PlayerAgent>,
        enemies: Vec<Option<EnemyAgent>>,
    ) -> Self {
        if player.is_none() {
            warn!(error = %PelletError::missing("player"), "Match has no player");
        }
        let unbound = enemies.iter().filter(|e| e.is_none()).count();
        if unbound > 0 {
            warn!(
                unbound,
                error = %PelletError::missing("enemy"),
                "Enemy slots without a bound enemy"
            );
        }

        let match_id = MatchId::new();
        let lives = rules.match_rules.starting_lives;

        info!(
            match_id = %match_id,
            lives,
            enemies = enemies.len() - unbound,
            collectibles = collectibles.remaining_count(),
            "Match started"
        );

        Self {
            rules,
            match_id,
            started_at: Local::now(),
            score: 0,
            lives,
            phase: MatchPhase::Playing,
            player,
            enemies,
            collectibles,
        }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn match_id(&self) -> &MatchId {
        &self.match_id
    }

    /// Wall-clock time the current match started (display only)
    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn remaining_collectibles(&self) -> usize {
        self.collectibles.remaining_count()
    }

    pub fn player(&self) -> Option<&PlayerAgent> {
        self.player.as_ref()
    }

    pub fn enemy(&self, id: &EnemyId) -> Option<&EnemyAgent> {
        self.enemies.iter().flatten().find(|e| e.id() == id)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &EnemyAgent> {
        self.enemies.iter().flatten()
    }

    /// Current state of a bound enemy
    pub fn enemy_state(&self, id: &EnemyId) -> Result<EnemyState> {
        self.enemy(id)
            .map(EnemyAgent::state)
            .ok_or_else(|| PelletError::UnknownEnemy(id.clone()))
    }

    /// Add points to the score. Rejected once the match has ended.
    pub fn add_score(&mut self, points: u32) -> Result<Vec<CoreEvent>> {
        self.ensure_playing("add_score")?;
        if points == 0 {
            return Err(PelletError::InvalidPoints(points));
        }

        self.score = self.score.saturating_add(points);
        debug!(score = self.score, delta = points, "Score changed");

        Ok(vec![CoreEvent::ScoreChanged {
            score: self.score,
            delta: points,
        }])
    }

    /// Lose one life. With lives remaining, everyone returns to start.
    /// Reaching zero does nothing here; the next tick ends the match.
    pub fn lose_life(&mut self) -> Result<Vec<CoreEvent>> {
        self.ensure_playing("lose_life")?;

        if self.lives == 0 {
            debug!("Life lost with none remaining, awaiting end-of-match check");
            return Ok(Vec::new());
        }

        self.lives -= 1;
        info!(lives = self.lives, score = self.score, "Life lost");

        let mut events = vec![CoreEvent::LifeLost { lives: self.lives }];
        if self.lives > 0 {
            events.extend(self.reset_positions());
        }
        Ok(events)
    }

    /// Broadcast a scare to every enemy. Enemies that are not Normal ignore it.
    pub fn scare_all_enemies(&mut self, now: GameInstant) -> Vec<CoreEvent> {
        let mut events = Vec::new();
        let mut count = 0;

        for slot in &mut self.enemies {
            let Some(enemy) = slot else {
                debug!("Skipping unbound enemy slot in scare broadcast");
                continue;
            };
            if let Some(t) = enemy.scare(now) {
                count += 1;
                events.push(transition_event(t));
            }
        }

        info!(count, "Enemies scared");
        events.insert(0, CoreEvent::EnemiesScared { count });
        events
    }

    /// Handle a contact-begin event from the collision collaborator.
    ///
    /// Never fails: rejected or impossible reactions are logged and dropped.
    pub fn handle_contact(&mut self, contact: &Contact, now: GameInstant) -> Vec<CoreEvent> {
        if self.phase.is_terminal() {
            debug!(contact = ?contact, phase = %self.phase, "Contact after match end ignored");
            return Vec::new();
        }

        let Some(player) = &self.player else {
            warn!(contact = ?contact, error = %PelletError::missing("player"), "Contact ignored");
            return Vec::new();
        };

        let enemy_state = match contact {
            Contact::Enemy { enemy } => match self.enemy_state(enemy) {
                Ok(state) => Some(state),
                Err(e) => {
                    warn!(error = %e, "Enemy contact ignored");
                    return Vec::new();
                }
            },
            _ => None,
        };

        let decision = player.decide(contact, enemy_state, &self.rules.scoring);
        self.apply_decision(decision, now)
    }

    /// Forward a resolved heading to the player
    pub fn set_player_heading(&mut self, direction: Direction) -> bool {
        match &mut self.player {
            Some(player) => player.set_heading(direction),
            None => false,
        }
    }

    /// Advance enemy timers, then check for the end of the match.
    ///
    /// Win is checked before loss: clearing the board wins even if the last
    /// life went in the same tick. Once terminal, ticks do nothing.
    pub fn tick(&mut self, now: GameInstant) -> Vec<CoreEvent> {
        let mut events = Vec::new();
        if self.phase.is_terminal() {
            return events;
        }

        for enemy in self.enemies.iter_mut().flatten() {
            events.extend(enemy.tick(now).into_iter().map(transition_event));
        }

        let next_phase = if self.collectibles.remaining_count() == 0 {
            Some(MatchPhase::Won)
        } else if self.lives == 0 {
            Some(MatchPhase::Lost)
        } else {
            None
        };

        if let Some(phase) = next_phase {
            events.push(self.end_match(phase));
        }

        events
    }

    /// Start over: score 0, full lives, everyone enabled and back at start.
    /// Valid in any phase.
    pub fn restart(&mut self) -> Vec<CoreEvent> {
        let mut events = Vec::new();

        self.score = 0;
        self.lives = self.rules.match_rules.starting_lives;
        self.phase = MatchPhase::Playing;
        self.match_id = MatchId::new();
        self.started_at = Local::now();

        if let Some(player) = &mut self.player {
            player.set_active(true);
            player.reset_to_start();
        }

        for enemy in self.enemies.iter_mut().flatten() {
            enemy.set_active(true);
            if let Some(t) = enemy.reset_to_start() {
                events.push(transition_event(t));
            }
        }

        info!(match_id = %self.match_id, lives = self.lives, "Game restarted");

        events.insert(
            0,
            CoreEvent::MatchRestarted {
                match_id: self.match_id.clone(),
            },
        );
        events
    }

    /// Get current match snapshot
    pub fn snapshot(&self, now: GameInstant) -> MatchSnapshot {
        MatchSnapshot {
            api_version: API_VERSION,
            match_id: self.match_id.clone(),
            started_at: self.started_at,
            score: self.score,
            lives: self.lives,
            phase: self.phase,
            remaining_collectibles: self.collectibles.remaining_count(),
            player_active: self.player.as_ref().is_some_and(PlayerAgent::is_active),
            enemies: self.enemies().map(|e| e.to_view(now)).collect(),
        }
    }

    fn apply_decision(&mut self, decision: ContactDecision, now: GameInstant) -> Vec<CoreEvent> {
        let mut events = Vec::new();

        match decision {
            ContactDecision::Collect { id, points, power } => {
                if !self.collectibles.consume(id) {
                    warn!(collectible = %id, "Collectible not in world, contact ignored");
                    return events;
                }
                absorb(self.add_score(points), &mut events);
                if power {
                    events.extend(self.scare_all_enemies(now));
                }
            }

            ContactDecision::EatEnemy { enemy_id, points } => {
                let transition = self
                    .enemies
                    .iter_mut()
                    .flatten()
                    .find(|e| e.id() == &enemy_id)
                    .and_then(|e| e.eat(now));

                match transition {
                    Some(t) => {
                        absorb(self.add_score(points), &mut events);
                        events.push(transition_event(t));
                    }
                    None => debug!(enemy = %enemy_id, "Enemy could not be eaten"),
                }
            }

            ContactDecision::Die { enemy_id } => {
                debug!(enemy = %enemy_id, "Player caught");
                if let Some(player) = &self.player {
                    player.die();
                }
                absorb(self.lose_life(), &mut events);
            }

            ContactDecision::Ignored { reason } => {
                debug!(reason = ?reason, "Contact ignored");
            }
        }

        events
    }

    fn ensure_playing(&self, operation: &'static str) -> Result<()> {
        if self.phase.is_terminal() {
            warn!(operation, phase = %self.phase, "Mutation after match end rejected");
            return Err(PelletError::post_terminal(self.phase));
        }
        Ok(())
    }

    fn reset_positions(&mut self) -> Vec<CoreEvent> {
        let mut events = Vec::new();

        match &mut self.player {
            Some(player) => player.respawn(),
            None => debug!("Skipping player respawn, no player bound"),
        }

        for slot in &mut self.enemies {
            let Some(enemy) = slot else {
                debug!("Skipping unbound enemy slot in reset");
                continue;
            };
            if let Some(t) = enemy.reset_to_start() {
                events.push(transition_event(t));
            }
        }

        events.insert(0, CoreEvent::PositionsReset);
        events
    }

    fn end_match(&mut self, phase: MatchPhase) -> CoreEvent {
        self.phase = phase;

        let message = match phase {
            MatchPhase::Won => format!("WIN! Score: {}", self.score),
            _ => format!("GAME OVER! Score: {}", self.score),
        };
        info!(match_id = %self.match_id, phase = %phase, score = self.score, "{}", message);

        self.disable_gameplay();

        CoreEvent::MatchEnded {
            match_id: self.match_id.clone(),
            phase,
            score: self.score,
            message,
        }
    }

    fn disable_gameplay(&mut self) {
        if let Some(player) = &mut self.player {
            player.set_active(false);
        }
        for enemy in self.enemies.iter_mut().flatten() {
            enemy.set_active(false);
        }
    }
}

fn transition_event(t: EnemyTransition) -> CoreEvent {
    CoreEvent::EnemyStateChanged {
        enemy_id: t.enemy_id,
        from: t.from,
        to: t.to,
    }
}

fn absorb(result: Result<Vec<CoreEvent>>, events: &mut Vec<CoreEvent>) {
    match result {
        Ok(more) => events.extend(more),
        Err(e) => warn!(error = %e, "Match mutation rejected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pellet_api::{AgentRef, Cue};
    use pellet_config::EnemySpec;
    use pellet_host_api::MockWorld;
    use pellet_util::CollectibleId;
    use std::time::Duration;

    fn secs(s: f64) -> GameInstant {
        GameInstant::from_secs_f64(s)
    }

    fn collaborators(world: &MockWorld) -> Collaborators {
        Collaborators::new(Arc::new(world.clone()))
            .with_presentation(Arc::new(world.clone()))
            .with_positions(Arc::new(world.clone()))
    }

    fn make_match(collectibles: u32) -> (MatchController, MockWorld) {
        let world = MockWorld::with_collectibles(collectibles);
        let controller = MatchController::new(Rules::default(), &collaborators(&world));
        (controller, world)
    }

    fn blinky() -> EnemyId {
        EnemyId::new("blinky")
    }

    fn pellet(id: u32) -> Contact {
        Contact::Collectible {
            id: CollectibleId::new(id),
        }
    }

    fn power(id: u32) -> Contact {
        Contact::PowerCollectible {
            id: CollectibleId::new(id),
        }
    }

    fn touch(enemy: EnemyId) -> Contact {
        Contact::Enemy { enemy }
    }

    #[test]
    fn test_initial_state() {
        let (controller, _) = make_match(5);

        assert_eq!(controller.score(), 0);
        assert_eq!(controller.lives(), 3);
        assert_eq!(controller.phase(), MatchPhase::Playing);
        assert_eq!(controller.enemies().count(), 4);
        assert_eq!(controller.remaining_collectibles(), 5);
    }

    #[test]
    fn test_add_score_accumulates() {
        let (mut controller, _) = make_match(5);

        for p in [10, 50, 200, 10] {
            controller.add_score(p).unwrap();
        }
        assert_eq!(controller.score(), 270);
        assert_eq!(controller.add_score(0), Err(PelletError::InvalidPoints(0)));
    }

    #[test]
    fn test_score_rejected_after_match_end() {
        let (mut controller, world) = make_match(1);
        controller.add_score(10).unwrap();

        world.clear_collectibles();
        controller.tick(secs(0.1));
        assert_eq!(controller.phase(), MatchPhase::Won);

        assert!(matches!(
            controller.add_score(10),
            Err(PelletError::PostTerminalMutation { .. })
        ));
        assert!(controller.lose_life().is_err());
        assert_eq!(controller.score(), 10);
        assert_eq!(controller.lives(), 3);
    }

    #[test]
    fn test_lose_life_resets_positions() {
        let (mut controller, world) = make_match(5);
        controller.scare_all_enemies(secs(0.0));
        world.clear_log();

        let events = controller.lose_life().unwrap();
        assert_eq!(controller.lives(), 2);
        assert_eq!(events[0], CoreEvent::LifeLost { lives: 2 });
        assert_eq!(events[1], CoreEvent::PositionsReset);
        // Four enemies went back from Scared to Normal
        assert_eq!(events.len(), 6);

        assert!(controller.enemies().all(|e| e.state() == EnemyState::Normal));
        assert!(controller.enemies().all(|e| !e.has_pending_timers()));
        assert_eq!(world.moves().len(), 5);
        assert_eq!(world.moves()[0], AgentRef::Player);
    }

    #[test]
    fn test_last_life_is_polled_not_immediate() {
        let (mut controller, world) = make_match(5);
        controller.lose_life().unwrap();
        controller.lose_life().unwrap();
        world.clear_log();

        let events = controller.lose_life().unwrap();
        assert_eq!(events, vec![CoreEvent::LifeLost { lives: 0 }]);
        assert_eq!(controller.phase(), MatchPhase::Playing);
        assert!(world.moves().is_empty());

        let events = controller.tick(secs(1.0));
        assert_eq!(controller.phase(), MatchPhase::Lost);
        assert!(matches!(
            events.last(),
            Some(CoreEvent::MatchEnded { phase: MatchPhase::Lost, message, .. })
                if message == "GAME OVER! Score: 0"
        ));
        assert!(!controller.player().unwrap().is_active());
        assert!(controller.enemies().all(|e| !e.is_active()));
    }

    #[test]
    fn test_win_takes_precedence_over_loss() {
        let (mut controller, world) = make_match(1);
        for _ in 0..3 {
            controller.lose_life().unwrap();
        }
        world.clear_collectibles();

        controller.tick(secs(1.0));
        assert_eq!(controller.phase(), MatchPhase::Won);
    }

    #[test]
    fn test_match_ends_exactly_once() {
        let (mut controller, world) = make_match(1);
        world.clear_collectibles();

        let first = controller.tick(secs(1.0));
        let second = controller.tick(secs(2.0));

        assert_eq!(
            first
                .iter()
                .filter(|e| matches!(e, CoreEvent::MatchEnded { .. }))
                .count(),
            1
        );
        assert!(second.is_empty());
    }

    #[test]
    fn test_scare_after_match_end_changes_nothing() {
        let (mut controller, world) = make_match(3);
        world.clear_collectibles();
        controller.tick(secs(1.0));
        assert_eq!(controller.phase(), MatchPhase::Won);
        world.clear_log();

        let events = controller.scare_all_enemies(secs(2.0));
        assert_eq!(events, vec![CoreEvent::EnemiesScared { count: 0 }]);
        assert!(controller
            .enemies()
            .all(|e| e.state() == EnemyState::Normal && !e.has_pending_timers()));
        assert!(world.cues().is_empty());
    }

    #[test]
    fn test_timers_frozen_after_match_end() {
        let (mut controller, world) = make_match(3);
        controller.scare_all_enemies(secs(0.0));
        controller.handle_contact(&touch(blinky()), secs(1.0));

        world.clear_collectibles();
        controller.tick(secs(2.0));
        assert_eq!(controller.phase(), MatchPhase::Won);

        // Scare, recovery and respawn deadlines have all passed
        assert!(controller.tick(secs(30.0)).is_empty());
        assert_eq!(controller.enemy(&blinky()).unwrap().state(), EnemyState::Eaten);
        assert!(controller
            .enemies()
            .filter(|e| e.id() != &blinky())
            .all(|e| e.state() == EnemyState::Scared));
        assert!(controller.enemies().all(|e| e.has_pending_timers()));
    }

    #[test]
    fn test_scare_broadcast_is_idempotent() {
        let (mut controller, _) = make_match(5);

        let events = controller.scare_all_enemies(secs(0.0));
        assert_eq!(events[0], CoreEvent::EnemiesScared { count: 4 });

        let events = controller.scare_all_enemies(secs(3.0));
        assert_eq!(events, vec![CoreEvent::EnemiesScared { count: 0 }]);

        controller.tick(secs(10.0));
        assert!(controller.enemies().all(|e| e.state() == EnemyState::Normal));
    }

    #[test]
    fn test_concrete_scenario() {
        let (mut controller, _) = make_match(10);

        controller.handle_contact(&pellet(0), secs(0.5));
        assert_eq!(controller.score(), 10);

        controller.handle_contact(&power(1), secs(1.0));
        assert_eq!(controller.score(), 60);
        assert!(controller.enemies().all(|e| e.state() == EnemyState::Scared));

        controller.handle_contact(&touch(blinky()), secs(2.0));
        assert_eq!(controller.score(), 260);
        assert_eq!(controller.enemy(&blinky()).unwrap().state(), EnemyState::Eaten);

        controller.tick(secs(4.9));
        assert_eq!(controller.enemy(&blinky()).unwrap().state(), EnemyState::Eaten);
        controller.tick(secs(5.0));
        assert_eq!(controller.enemy(&blinky()).unwrap().state(), EnemyState::Normal);

        // The scare's 11s return does not disturb the respawned enemy
        controller.tick(secs(11.0));
        assert_eq!(controller.enemy(&blinky()).unwrap().state(), EnemyState::Normal);
        assert_eq!(controller.lives(), 3);
    }

    #[test]
    fn test_normal_enemy_contact_costs_a_life() {
        let (mut controller, world) = make_match(5);

        let events = controller.handle_contact(&touch(blinky()), secs(1.0));
        assert_eq!(controller.lives(), 2);
        assert!(events.contains(&CoreEvent::LifeLost { lives: 2 }));
        assert_eq!(world.cues_for(&AgentRef::Player), vec![Cue::Dead, Cue::Idle]);
    }

    #[test]
    fn test_eaten_enemy_contact_costs_a_life() {
        let (mut controller, _) = make_match(5);
        controller.scare_all_enemies(secs(0.0));
        controller.handle_contact(&touch(blinky()), secs(1.0));
        assert_eq!(controller.enemy(&blinky()).unwrap().state(), EnemyState::Eaten);

        let events = controller.handle_contact(&touch(blinky()), secs(1.5));
        assert!(events.contains(&CoreEvent::LifeLost { lives: 2 }));
        assert_eq!(controller.score(), 200);
        assert_eq!(controller.lives(), 2);

        // The reset brings the eaten enemy back with its respawn cancelled
        let enemy = controller.enemy(&blinky()).unwrap();
        assert_eq!(enemy.state(), EnemyState::Normal);
        assert!(!enemy.has_pending_timers());
    }

    #[test]
    fn test_collectible_already_gone() {
        let (mut controller, _) = make_match(2);

        controller.handle_contact(&pellet(0), secs(0.0));
        let events = controller.handle_contact(&pellet(0), secs(0.1));

        assert!(events.is_empty());
        assert_eq!(controller.score(), 10);
    }

    #[test]
    fn test_eating_last_collectible_wins_on_next_tick() {
        let (mut controller, _) = make_match(1);

        controller.handle_contact(&pellet(0), secs(0.0));
        assert_eq!(controller.phase(), MatchPhase::Playing);

        let events = controller.tick(secs(0.016));
        assert!(matches!(
            events.last(),
            Some(CoreEvent::MatchEnded { phase: MatchPhase::Won, score: 10, message, .. })
                if message == "WIN! Score: 10"
        ));

        // Disabled gameplay: further contacts change nothing
        assert!(controller.handle_contact(&touch(blinky()), secs(1.0)).is_empty());
        assert_eq!(controller.lives(), 3);
    }

    #[test]
    fn test_restart_from_terminal_phase() {
        let (mut controller, world) = make_match(3);
        controller.handle_contact(&power(0), secs(0.0));
        controller.handle_contact(&touch(blinky()), secs(1.0));
        for _ in 0..3 {
            controller.lose_life().unwrap();
        }
        controller.tick(secs(2.0));
        assert_eq!(controller.phase(), MatchPhase::Lost);
        let old_id = controller.match_id().clone();

        world.seed(0..3);
        let events = controller.restart();

        assert!(matches!(events[0], CoreEvent::MatchRestarted { .. }));
        assert_ne!(controller.match_id(), &old_id);
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.lives(), 3);
        assert_eq!(controller.phase(), MatchPhase::Playing);
        assert!(controller.player().unwrap().is_active());
        assert!(controller
            .enemies()
            .all(|e| e.is_active() && e.state() == EnemyState::Normal && !e.has_pending_timers()));

        // Gameplay works again
        controller.handle_contact(&pellet(1), secs(3.0));
        assert_eq!(controller.score(), 10);
    }

    #[test]
    fn test_unbound_slots_are_skipped() {
        let world = MockWorld::with_collectibles(3);
        let collab = collaborators(&world);
        let rules = Rules::default();
        let enemies = vec![
            Some(EnemyAgent::from_collaborators(
                EnemySpec::new("blinky"),
                rules.timers,
                &collab,
            )),
            None,
        ];
        let mut controller =
            MatchController::from_parts(rules, collab.collectibles.clone(), None, enemies);

        let events = controller.scare_all_enemies(secs(0.0));
        assert_eq!(events[0], CoreEvent::EnemiesScared { count: 1 });

        // No player: contacts are dropped, match keeps ticking
        assert!(controller.handle_contact(&pellet(0), secs(0.5)).is_empty());
        assert_eq!(controller.tick(secs(7.0)).len(), 1);

        let events = controller.lose_life().unwrap();
        assert!(events.contains(&CoreEvent::PositionsReset));
        assert!(!controller.snapshot(secs(7.0)).player_active);
    }

    #[test]
    fn test_unknown_enemy_contact_is_ignored() {
        let (mut controller, _) = make_match(3);

        let sue = EnemyId::new("sue");
        assert_eq!(
            controller.enemy_state(&sue),
            Err(PelletError::UnknownEnemy(sue.clone()))
        );
        assert_eq!(controller.enemy_state(&blinky()), Ok(EnemyState::Normal));

        let events = controller.handle_contact(&touch(sue), secs(0.0));
        assert!(events.is_empty());
        assert_eq!(controller.lives(), 3);
    }

    #[test]
    fn test_heading_forwarded_to_player() {
        let (mut controller, world) = make_match(3);

        assert!(controller.set_player_heading(Direction::Left));
        assert_eq!(world.cues_for(&AgentRef::Player), vec![Cue::WalkLeft]);
    }

    #[test]
    fn test_snapshot() {
        let (mut controller, _) = make_match(4);
        controller.handle_contact(&power(0), secs(0.0));

        let snapshot = controller.snapshot(secs(1.0));
        assert_eq!(snapshot.score, 50);
        assert_eq!(snapshot.remaining_collectibles, 3);
        assert_eq!(snapshot.enemies.len(), 4);
        assert!(snapshot.enemies.iter().all(|e| e.state == EnemyState::Scared));
        assert!(snapshot
            .enemies
            .iter()
            .all(|e| e.normal_in == Some(Duration::from_secs(9))));
        assert_eq!(snapshot.started_at, controller.started_at());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["phase"], "playing");
        assert_eq!(json["enemies"][0]["state"], "scared");
    }
}
