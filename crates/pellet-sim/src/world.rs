//! Headless world: a collectible field plus logging-only presentation and
//! positioning

use pellet_api::{AgentRef, Cue};
use pellet_host_api::{CollectibleSource, Collaborators, HostResult, Positioner, Presentation};
use pellet_util::CollectibleId;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Collectibles `0..collectibles` are regular, the next
/// `power_collectibles` ids are power collectibles.
pub struct SimWorld {
    collectibles: u32,
    power_collectibles: u32,
    field: Mutex<BTreeSet<CollectibleId>>,
}

impl SimWorld {
    pub fn new(collectibles: u32, power_collectibles: u32) -> Self {
        let world = Self {
            collectibles,
            power_collectibles,
            field: Mutex::new(BTreeSet::new()),
        };
        world.refill();
        world
    }

    /// Put every collectible back, as at the start of a match
    pub fn refill(&self) {
        let total = self.collectibles + self.power_collectibles;
        let mut field = self.field();
        *field = (0..total).map(CollectibleId::new).collect();
        debug!(total, "Collectible field filled");
    }

    /// Lowest remaining collectible of the requested kind
    pub fn next_remaining(&self, power: bool) -> Option<CollectibleId> {
        let range = if power {
            self.collectibles..self.collectibles + self.power_collectibles
        } else {
            0..self.collectibles
        };
        let field = self.field();
        field
            .range(CollectibleId::new(range.start)..CollectibleId::new(range.end))
            .next()
            .copied()
    }

    // A panic while holding the lock cannot leave the set half-updated
    fn field(&self) -> MutexGuard<'_, BTreeSet<CollectibleId>> {
        self.field.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Bind this world as every collaborator of a match
    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        Collaborators::new(self.clone())
            .with_presentation(self.clone())
            .with_positions(self.clone())
    }
}

impl CollectibleSource for SimWorld {
    fn remaining_count(&self) -> usize {
        self.field().len()
    }

    fn consume(&self, id: CollectibleId) -> bool {
        self.field().remove(&id)
    }
}

impl Presentation for SimWorld {
    fn play_cue(&self, agent: &AgentRef, cue: Cue) -> HostResult<()> {
        trace!(agent = %agent, cue = ?cue, "Cue");
        Ok(())
    }
}

impl Positioner for SimWorld {
    fn move_to_start(&self, agent: &AgentRef) -> HostResult<()> {
        trace!(agent = %agent, "Moved to start");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout() {
        let world = SimWorld::new(2, 1);
        assert_eq!(world.remaining_count(), 3);
        assert_eq!(world.next_remaining(false), Some(CollectibleId::new(0)));
        assert_eq!(world.next_remaining(true), Some(CollectibleId::new(2)));

        assert!(world.consume(CollectibleId::new(2)));
        assert!(!world.consume(CollectibleId::new(2)));
        assert_eq!(world.next_remaining(true), None);

        world.refill();
        assert_eq!(world.remaining_count(), 3);
    }

    #[test]
    fn test_poisoned_field_still_usable() {
        let world = Arc::new(SimWorld::new(2, 0));
        let held = world.clone();
        let _ = std::thread::spawn(move || {
            let _guard = held.field.lock().unwrap();
            panic!("poison the field");
        })
        .join();
        assert!(world.field.is_poisoned());

        assert_eq!(world.remaining_count(), 2);
        assert!(world.consume(CollectibleId::new(1)));
        assert_eq!(world.next_remaining(false), Some(CollectibleId::new(0)));
    }
}
