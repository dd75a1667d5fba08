//! pellet-sim - headless pellet match simulator
//!
//! Loads match rules and a scenario script, plays the scenario through the
//! rules core, and prints the final match snapshot as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use pellet_api::Event;
use pellet_config::{load_config, Rules};
use pellet_sim::{Scenario, Simulation};
use pellet_util::default_config_path;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// pellet-sim - Run a scripted pellet match without a game engine
#[derive(Parser, Debug)]
#[command(name = "pellet-sim")]
#[command(about = "Run a scripted pellet match without a game engine", long_about = None)]
struct Args {
    /// Rules file (default: ~/.config/pellet/config.toml if present, else built-in rules)
    #[arg(short, long, env = "PELLET_CONFIG")]
    config: Option<PathBuf>,

    /// Scenario script
    #[arg(short, long)]
    scenario: PathBuf,

    /// Simulation tick in milliseconds
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Pace ticks in real time instead of running as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Print every event as a JSON line
    #[arg(long)]
    events: bool,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn load_rules(args: &Args) -> Result<Rules> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => {
            let path = default_config_path();
            if !path.exists() {
                info!(path = %path.display(), "No config file, using built-in rules");
                return Ok(Rules::default());
            }
            path
        }
    };

    let rules = load_config(&path)
        .with_context(|| format!("Failed to load config from {:?}", path))?;

    info!(
        config_path = %path.display(),
        enemies = rules.roster.len(),
        lives = rules.match_rules.starting_lives,
        "Configuration loaded"
    );
    Ok(rules)
}

fn print_event(event: &Event) {
    match serde_json::to_string(event) {
        Ok(line) => println!("{}", line),
        Err(e) => warn!(error = %e, "Failed to serialize event"),
    }
}

async fn run_realtime(sim: &mut Simulation, tick: Duration, events: bool) -> Result<()> {
    let mut tick_timer = tokio::time::interval(tick);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    info!("Simulation running in real time");

    while !sim.is_finished() {
        tokio::select! {
            result = &mut ctrl_c => {
                result.context("Failed to listen for Ctrl-C")?;
                info!("Received Ctrl-C, stopping simulation");
                break;
            }

            _ = tick_timer.tick() => {
                for event in sim.step() {
                    if events {
                        print_event(&event);
                    }
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if args.json_logs {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    info!(version = env!("CARGO_PKG_VERSION"), "pellet-sim starting");

    let rules = load_rules(&args)?;
    let scenario = Scenario::load(&args.scenario)
        .with_context(|| format!("Failed to load scenario from {:?}", args.scenario))?;

    if args.tick_ms == 0 {
        anyhow::bail!("--tick-ms must be at least 1");
    }
    let tick = Duration::from_millis(args.tick_ms);

    let mut sim = Simulation::new(rules, scenario, tick);

    let snapshot = if args.realtime {
        run_realtime(&mut sim, tick, args.events).await?;
        sim.finish()
    } else {
        sim.run(|event| {
            if args.events {
                print_event(event);
            }
        })
    };

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
