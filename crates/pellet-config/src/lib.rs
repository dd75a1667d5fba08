//! Configuration parsing and validation for pellet
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Starting lives, point values and enemy timer durations
//! - The enemy roster
//! - Validation that reports every problem at once

mod rules;
mod schema;
mod validation;

pub use rules::*;
pub use schema::*;
pub use validation::*;

use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation failed: {errors:?}")]
    ValidationFailed { errors: Vec<ValidationError> },

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Rules> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<Rules> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    let errors = validate_config(&raw);
    if !errors.is_empty() {
        return Err(ConfigError::ValidationFailed { errors });
    }

    let rules = Rules::from_raw(raw);
    tracing::debug!(
        enemies = rules.roster.len(),
        starting_lives = rules.match_rules.starting_lives,
        "Configuration parsed"
    );
    Ok(rules)
}

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;
