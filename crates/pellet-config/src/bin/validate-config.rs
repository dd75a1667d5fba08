//! Config validation CLI tool
//!
//! Validates a pellet rules file and reports any errors.

use pellet_util::default_config_path;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config_path = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            let default_path = default_config_path();
            if !default_path.exists() {
                eprintln!("Usage: validate-config [config-file]");
                eprintln!();
                eprintln!("Validates a pellet rules file.");
                eprintln!();
                eprintln!("If no path is provided, uses: {}", default_path.display());
                return ExitCode::from(2);
            }
            default_path
        }
    };

    if !config_path.exists() {
        eprintln!("Error: Configuration file not found: {}", config_path.display());
        return ExitCode::from(1);
    }

    match pellet_config::load_config(&config_path) {
        Ok(rules) => {
            println!("✓ Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Config version: {}", pellet_config::CURRENT_CONFIG_VERSION);
            println!("  Starting lives: {}", rules.match_rules.starting_lives);
            println!(
                "  Points: collectible={} power={} enemy={}",
                rules.scoring.collectible,
                rules.scoring.power_collectible,
                rules.scoring.enemy_eaten
            );
            println!(
                "  Timers: scare={:?} scare_total={:?} respawn={:?}",
                rules.timers.scare, rules.timers.scare_total, rules.timers.respawn
            );
            println!();
            println!("Enemies ({}):", rules.roster.len());
            for enemy in &rules.roster {
                println!("  - {}: {}", enemy.id, enemy.label);
            }

            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed");
            eprintln!();
            match &e {
                pellet_config::ConfigError::ReadError(io_err) => {
                    eprintln!("Failed to read file: {}", io_err);
                }
                pellet_config::ConfigError::ParseError(parse_err) => {
                    eprintln!("TOML parse error:");
                    eprintln!("  {}", parse_err);
                }
                pellet_config::ConfigError::ValidationFailed { errors } => {
                    eprintln!("Validation errors ({}):", errors.len());
                    for err in errors {
                        eprintln!("  - {}", err);
                    }
                }
                pellet_config::ConfigError::UnsupportedVersion(ver) => {
                    eprintln!(
                        "Unsupported config version: {} (expected {})",
                        ver,
                        pellet_config::CURRENT_CONFIG_VERSION
                    );
                }
            }
            ExitCode::from(1)
        }
    }
}
