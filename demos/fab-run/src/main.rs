//! fab-run — command-line driver for the fab production-line simulator.
//!
//! ```text
//! fab-run run --ticks 100 --belt-length 3 --workers 2 --seed 42 --output-dir out/
//! ```

mod config;
mod report;

use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use fab_core::Tick;
use fab_output::{CsvWriter, SimOutputObserver};
use fab_sim::{SimObserver, SimStats, Simulation, TallyLogger};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{Cli, Command, RunArgs};

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Forwards every hook to the optional CSV observer and the optional logger.
struct RunObserver {
    csv:    Option<SimOutputObserver<CsvWriter>>,
    logger: Option<TallyLogger>,
}

impl SimObserver for RunObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(csv) = &mut self.csv {
            csv.on_tick_start(tick);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &SimStats) {
        if let Some(csv) = &mut self.csv {
            csv.on_tick_end(tick, stats);
        }
        if let Some(logger) = &mut self.logger {
            logger.on_tick_end(tick, stats);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, stats: &SimStats) {
        if let Some(csv) = &mut self.csv {
            csv.on_snapshot(tick, stats);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &SimStats) {
        if let Some(csv) = &mut self.csv {
            csv.on_sim_end(final_tick, stats);
        }
        if let Some(logger) = &mut self.logger {
            logger.on_sim_end(final_tick, stats);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_logging(default: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(args: RunArgs) -> Result<()> {
    let config = args.resolve()?;
    let mut sim = Simulation::from_config(config.clone()).context("building simulation")?;
    info!(?config, "simulation configured");

    let csv = match &args.output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            Some(SimOutputObserver::new(CsvWriter::new(dir)?))
        }
        None => None,
    };
    let mut obs = RunObserver {
        csv,
        logger: args.verbose.then_some(TallyLogger),
    };

    println!("=== fab-run — production line ===");
    println!(
        "Ticks: {}  |  Belt: {} cells  |  Workers/cell: {}  |  Seed: {}",
        config.total_ticks,
        config.belt_length,
        config.workers_per_cell,
        config.seed.map_or_else(|| "entropy".to_string(), |s| s.to_string()),
    );
    println!();

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.csv.as_mut().and_then(SimOutputObserver::take_error) {
        bail!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if let Some(dir) = &args.output_dir {
        println!("CSV output written to {}", dir.display());
    }
    println!();
    report::print_report(&sim.stats());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => {
            init_logging(args.default_log_filter());
            run(args)
        }
    }
}
