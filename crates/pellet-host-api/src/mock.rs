//! Mock world for testing

use pellet_api::{AgentRef, Cue};
use pellet_util::CollectibleId;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use crate::{CollectibleSource, HostError, HostResult, Positioner, Presentation};

/// In-memory world implementing every collaborator trait.
///
/// Clones share state, so a test can hand one clone to the core and keep
/// another to inspect what happened.
#[derive(Clone, Default)]
pub struct MockWorld {
    collectibles: Arc<Mutex<BTreeSet<CollectibleId>>>,
    cues: Arc<Mutex<Vec<(AgentRef, Cue)>>>,
    moves: Arc<Mutex<Vec<AgentRef>>>,

    /// Configure every cue to fail
    pub fail_cues: Arc<Mutex<bool>>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// World seeded with collectibles `0..count`
    pub fn with_collectibles(count: u32) -> Self {
        let world = Self::new();
        world.seed(0..count);
        world
    }

    /// Place additional collectibles in the world
    pub fn seed(&self, ids: impl IntoIterator<Item = u32>) {
        let mut collectibles = self.collectibles.lock().unwrap();
        collectibles.extend(ids.into_iter().map(CollectibleId::new));
    }

    /// Remove every collectible without going through the core
    pub fn clear_collectibles(&self) {
        self.collectibles.lock().unwrap().clear();
    }

    /// Every cue played so far, in order
    pub fn cues(&self) -> Vec<(AgentRef, Cue)> {
        self.cues.lock().unwrap().clone()
    }

    /// Cues played on one agent, in order
    pub fn cues_for(&self, agent: &AgentRef) -> Vec<Cue> {
        self.cues
            .lock()
            .unwrap()
            .iter()
            .filter(|(a, _)| a == agent)
            .map(|(_, c)| *c)
            .collect()
    }

    /// Every move-to-start request so far, in order
    pub fn moves(&self) -> Vec<AgentRef> {
        self.moves.lock().unwrap().clone()
    }

    pub fn clear_log(&self) {
        self.cues.lock().unwrap().clear();
        self.moves.lock().unwrap().clear();
    }
}

impl Presentation for MockWorld {
    fn play_cue(&self, agent: &AgentRef, cue: Cue) -> HostResult<()> {
        if *self.fail_cues.lock().unwrap() {
            return Err(HostError::CueUnavailable(cue));
        }
        self.cues.lock().unwrap().push((agent.clone(), cue));
        Ok(())
    }
}

impl Positioner for MockWorld {
    fn move_to_start(&self, agent: &AgentRef) -> HostResult<()> {
        self.moves.lock().unwrap().push(agent.clone());
        Ok(())
    }
}

impl CollectibleSource for MockWorld {
    fn remaining_count(&self) -> usize {
        self.collectibles.lock().unwrap().len()
    }

    fn consume(&self, id: CollectibleId) -> bool {
        self.collectibles.lock().unwrap().remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play_cue_logged;
    use pellet_util::EnemyId;

    #[test]
    fn mock_consume_and_count() {
        let world = MockWorld::with_collectibles(3);
        assert_eq!(world.remaining_count(), 3);

        assert!(world.consume(CollectibleId::new(1)));
        assert!(!world.consume(CollectibleId::new(1)));
        assert_eq!(world.remaining_count(), 2);
    }

    #[test]
    fn mock_records_cues_per_agent() {
        let world = MockWorld::new();
        let blinky = AgentRef::Enemy(EnemyId::new("blinky"));

        world.play_cue(&AgentRef::Player, Cue::Idle).unwrap();
        world.play_cue(&blinky, Cue::Scared).unwrap();

        assert_eq!(world.cues_for(&blinky), vec![Cue::Scared]);
        assert_eq!(world.cues().len(), 2);
    }

    #[test]
    fn failed_cue_is_absorbed() {
        let world = MockWorld::new();
        *world.fail_cues.lock().unwrap() = true;

        play_cue_logged(&world, &AgentRef::Player, Cue::Dead);
        assert!(world.cues().is_empty());
    }
}
