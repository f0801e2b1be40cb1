//! lifesim - toy meadow simulation for the behavior-tree engine.
//!
//! Spawns a population of critters, advances simulation time in fixed steps
//! and lets the scheduler decide when each critter's tree is walked.

use std::path::PathBuf;

use anyhow::{bail, ensure, Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use ai_core::EngineConfig;
use lifesim::sim::Simulation;

#[derive(Parser)]
#[command(name = "lifesim")]
#[command(about = "Simulate a meadow of behavior-tree critters", version)]
struct Cli {
    /// YAML engine configuration (tick interval, telemetry window)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of configured critters
    #[arg(short, long, default_value_t = 8)]
    actors: u64,

    /// Simulation hours to run
    #[arg(long, default_value_t = 24.0)]
    hours: f64,

    /// Hours advanced per simulation step
    #[arg(long, default_value_t = 0.1)]
    step: f64,

    /// Print this actor's tree and telemetry as JSON when the run ends
    #[arg(long, value_name = "ACTOR_ID")]
    dump: Option<u64>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    ensure!(
        cli.step.is_finite() && cli.step > 0.0,
        "--step must be a positive number of hours"
    );
    ensure!(
        cli.hours.is_finite() && cli.hours >= 0.0,
        "--hours must not be negative"
    );

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    tracing::info!(
        actors = cli.actors,
        hours = cli.hours,
        step = cli.step,
        tick_interval = config.tick_interval_hours,
        "Starting meadow"
    );

    let mut sim = Simulation::new(&config, cli.actors);
    sim.run(cli.hours, cli.step);

    for inhabitant in &sim.population {
        let critter = &inhabitant.actor;
        tracing::info!(
            id = critter.id,
            activity = ?critter.activity,
            hunger = critter.hunger,
            energy = critter.energy,
            meals = critter.meals,
            configured = inhabitant.brain.is_some(),
            "critter"
        );
    }
    tracing::info!(
        ticks = sim.tick,
        time = sim.time,
        walked = sim.counts.walked,
        throttled = sim.counts.throttled,
        idle_fallbacks = sim.counts.unconfigured,
        grass = sim.meadow.grass,
        "Run finished"
    );

    if let Some(id) = cli.dump {
        let Some(snapshot) = sim.snapshot(id) else {
            bail!("no configured actor with id {id}");
        };
        println!("{}", snapshot.to_json_pretty()?);
    }

    Ok(())
}
