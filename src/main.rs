//! Swarm headless driver
//!
//! Builds a simulation, runs a fixed number of ticks and prints JSON snapshots
//! (one per line) to stdout.

use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use swarm::consts::DRIVER_DT;
use swarm::settings::AttractorMode;
use swarm::sim::{Simulation, Simulator, SpawnRecorder};
use swarm::{Settings, SettingsError};

/// Force-field swarm simulation (headless)
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings JSON file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed, overrides the settings file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Seconds per tick (finite, positive)
    #[arg(long, default_value_t = DRIVER_DT, value_parser = parse_dt)]
    dt: f64,

    /// Print a snapshot every N ticks (0 = final only)
    #[arg(short, long, default_value_t = 0)]
    every: u64,

    /// Attract each actor to its predecessor instead of the fixed anchor
    #[arg(long)]
    peer_chain: bool,

    /// Print the spawn events before running
    #[arg(long)]
    spawns: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_dt(s: &str) -> Result<f64, String> {
    let dt: f64 = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;
    if dt.is_finite() && dt > 0.0 {
        Ok(dt)
    } else {
        Err(format!("must be finite and positive, got {dt}"))
    }
}

fn main() -> Result<(), SettingsError> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level)).try_init();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if args.peer_chain {
        settings.attractor_mode = AttractorMode::PeerChain;
    }

    log::info!(
        "Swarm starting: seed={}, ticks={}, dt={}",
        settings.seed,
        args.ticks,
        args.dt
    );

    let mut sim = Simulation::new(settings)?;
    let mut world = SpawnRecorder::new();
    sim.set_world(&mut world);

    if args.spawns {
        for event in &world.events {
            println!("{}", serde_json::to_string(event)?);
        }
    }

    for t in 1..=args.ticks {
        sim.tick(args.dt);
        if args.every > 0 && t % args.every == 0 && t != args.ticks {
            println!("{}", serde_json::to_string(&sim.snapshot())?);
        }
    }
    println!("{}", serde_json::to_string(&sim.snapshot())?);

    log::info!("Swarm finished after {:.2}s simulated", sim.elapsed);
    Ok(())
}
