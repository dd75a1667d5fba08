//! Strongly-typed identifiers for pellet

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier for an enemy in the roster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(String);

impl EnemyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnemyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EnemyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EnemyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifier for a single collectible placed in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectibleId(u32);

impl CollectibleId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for CollectibleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for one match (regenerated on restart)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(Uuid);

impl MatchId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemy_id_equality() {
        let id1 = EnemyId::new("blinky");
        let id2 = EnemyId::new("blinky");
        let id3 = EnemyId::new("pinky");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn match_id_uniqueness() {
        assert_ne!(MatchId::new(), MatchId::new());
    }

    #[test]
    fn ids_serialize_deserialize() {
        let enemy_id = EnemyId::new("clyde");
        let json = serde_json::to_string(&enemy_id).unwrap();
        assert_eq!(json, "\"clyde\"");
        let parsed: EnemyId = serde_json::from_str(&json).unwrap();
        assert_eq!(enemy_id, parsed);

        let match_id = MatchId::new();
        let json = serde_json::to_string(&match_id).unwrap();
        let parsed: MatchId = serde_json::from_str(&json).unwrap();
        assert_eq!(match_id, parsed);
    }
}
