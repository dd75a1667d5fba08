//! Simulation time for pellet
//!
//! The host loop owns the clock. Every time-dependent call in the core takes
//! a `GameInstant` so that timers are deterministic and testable without
//! sleeping.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A point in simulation time, measured from the match epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct GameInstant(Duration);

impl GameInstant {
    /// The match epoch
    pub const ZERO: GameInstant = GameInstant(Duration::ZERO);

    pub fn from_duration(since_epoch: Duration) -> Self {
        Self(since_epoch)
    }

    pub fn from_secs_f64(secs: f64) -> Self {
        Self(Duration::from_secs_f64(secs.max(0.0)))
    }

    pub fn since_epoch(&self) -> Duration {
        self.0
    }

    /// Duration since `earlier`, or zero if `earlier` is later than `self`
    pub fn duration_since(&self, earlier: GameInstant) -> Duration {
        self.0.saturating_sub(earlier.0)
    }

    pub fn checked_add(&self, duration: Duration) -> Option<GameInstant> {
        self.0.checked_add(duration).map(GameInstant)
    }

    /// Returns duration until `self`, or zero if `self` is in the past
    pub fn saturating_duration_until(&self, from: GameInstant) -> Duration {
        self.0.saturating_sub(from.0)
    }
}

impl std::ops::Add<Duration> for GameInstant {
    type Output = GameInstant;

    fn add(self, rhs: Duration) -> Self::Output {
        GameInstant(self.0 + rhs)
    }
}

impl std::ops::AddAssign<Duration> for GameInstant {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs;
    }
}

/// Helper to format durations in human-readable form
pub fn format_duration(d: Duration) -> String {
    let total_ms = d.as_millis();
    let minutes = total_ms / 60_000;
    let seconds = (total_ms % 60_000) / 1000;
    let millis = total_ms % 1000;

    if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else if millis > 0 {
        format!("{}.{:03}s", seconds, millis)
    } else {
        format!("{}s", seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instant_arithmetic() {
        let t0 = GameInstant::ZERO;
        let t7 = t0 + Duration::from_secs(7);

        assert!(t7 > t0);
        assert_eq!(t7.duration_since(t0), Duration::from_secs(7));
        assert_eq!(t0.duration_since(t7), Duration::ZERO);
    }

    #[test]
    fn test_saturating_until() {
        let deadline = GameInstant::from_secs_f64(10.0);
        let now = GameInstant::from_secs_f64(4.0);

        assert_eq!(deadline.saturating_duration_until(now), Duration::from_secs(6));
        assert_eq!(now.saturating_duration_until(deadline), Duration::ZERO);
    }

    #[test]
    fn test_negative_seconds_clamp_to_epoch() {
        assert_eq!(GameInstant::from_secs_f64(-3.0), GameInstant::ZERO);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(3)), "3s");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.500s");
        assert_eq!(format_duration(Duration::from_secs(95)), "1m 35s");
    }
}
