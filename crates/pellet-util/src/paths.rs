//! Default paths for pellet components
//!
//! - Config: `$PELLET_CONFIG`, else `$XDG_CONFIG_HOME/pellet/config.toml`,
//!   else `~/.config/pellet/config.toml`

use std::path::PathBuf;

/// Environment variable for overriding the config path
pub const PELLET_CONFIG_ENV: &str = "PELLET_CONFIG";

/// Config filename within the config directory
const CONFIG_FILENAME: &str = "config.toml";

/// Application subdirectory name
const APP_DIR: &str = "pellet";

/// Get the default configuration file path.
///
/// Order of precedence:
/// 1. `$PELLET_CONFIG` environment variable (if set)
/// 2. `$XDG_CONFIG_HOME/pellet/config.toml` (if XDG_CONFIG_HOME is set)
/// 3. `~/.config/pellet/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(PELLET_CONFIG_ENV) {
        return PathBuf::from(path);
    }

    config_path_without_env()
}

/// Get the config path without checking the PELLET_CONFIG env var.
pub fn config_path_without_env() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join(CONFIG_FILENAME);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILENAME);
    }

    // Last resort
    PathBuf::from(format!("/tmp/{}", APP_DIR)).join(CONFIG_FILENAME)
}
