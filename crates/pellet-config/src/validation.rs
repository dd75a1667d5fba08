//! Configuration validation

use crate::rules::{
    DEFAULT_RESPAWN_SECS, DEFAULT_SCARE_SECS, DEFAULT_SCARE_TOTAL_SECS, MAX_TIMER_SECS,
};
use crate::schema::RawConfig;
use std::collections::HashSet;
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Enemy '{enemy_id}': {message}")]
    EnemyError { enemy_id: String, message: String },

    #[error("Duplicate enemy ID: {0}")]
    DuplicateEnemyId(String),

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must be a finite number of seconds, got {value}")]
    InvalidDuration { field: &'static str, value: f64 },

    #[error("{field} must be at most {max} seconds, got {value}")]
    DurationTooLong {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("scare_seconds ({scare}) must be less than scare_total_seconds ({total})")]
    ScareExceedsTotal { scare: f64, total: f64 },
}

/// Validate a raw configuration
pub fn validate_config(config: &RawConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.match_settings.starting_lives == Some(0) {
        errors.push(ValidationError::NotPositive {
            field: "starting_lives",
        });
    }

    let scoring = &config.scoring;
    for (field, value) in [
        ("scoring.collectible", scoring.collectible),
        ("scoring.power_collectible", scoring.power_collectible),
        ("scoring.enemy_eaten", scoring.enemy_eaten),
    ] {
        if value == Some(0) {
            errors.push(ValidationError::NotPositive { field });
        }
    }

    let timers = &config.timers;
    let scare = timers.scare_seconds.unwrap_or(DEFAULT_SCARE_SECS);
    let total = timers.scare_total_seconds.unwrap_or(DEFAULT_SCARE_TOTAL_SECS);
    let respawn = timers.respawn_seconds.unwrap_or(DEFAULT_RESPAWN_SECS);

    let mut durations_ok = true;
    for (field, value) in [
        ("timers.scare_seconds", scare),
        ("timers.scare_total_seconds", total),
        ("timers.respawn_seconds", respawn),
    ] {
        if let Err(e) = check_duration(field, value) {
            errors.push(e);
            durations_ok = false;
        }
    }

    if durations_ok && scare >= total {
        errors.push(ValidationError::ScareExceedsTotal { scare, total });
    }

    let mut seen_ids = HashSet::new();
    for enemy in &config.enemies {
        if enemy.id.trim().is_empty() {
            errors.push(ValidationError::EnemyError {
                enemy_id: enemy.id.clone(),
                message: "id cannot be empty".into(),
            });
            continue;
        }
        if !seen_ids.insert(&enemy.id) {
            errors.push(ValidationError::DuplicateEnemyId(enemy.id.clone()));
        }
    }

    errors
}

fn check_duration(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidDuration { field, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field });
    }
    if value > MAX_TIMER_SECS {
        return Err(ValidationError::DurationTooLong {
            field,
            value,
            max: MAX_TIMER_SECS,
        });
    }
    Ok(())
}
