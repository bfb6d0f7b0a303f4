//! Command-line flags and their merge onto a `SimConfig`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fab_core::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "fab-run")]
#[command(about = "Discrete-tick production line: a belt, a random source, and workers assembling A + B into C")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the simulation, optionally writing CSV output.
    Run(RunArgs),
}

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Simulation length in ticks [default: 100]
    #[arg(short = 't', long)]
    pub ticks: Option<u64>,

    /// Number of work cells on the belt [default: 3]
    #[arg(short = 'b', long)]
    pub belt_length: Option<usize>,

    /// Number of workers per work cell [default: 2]
    #[arg(short = 'w', long)]
    pub workers: Option<usize>,

    /// Random seed; omit for a non-reproducible run
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Write tick_summaries.csv, belt_snapshots.csv and worker_snapshots.csv here
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Snapshot every N ticks (0 disables snapshots) [default: 1]
    #[arg(long)]
    pub output_interval: Option<u64>,

    /// JSON file with a SimConfig; flags override its fields
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log the sink tally after every tick and raise the log level to debug
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl RunArgs {
    /// Start from the config file (or defaults) and apply any flags given.
    pub fn resolve(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig::default(),
        };
        if let Some(t) = self.ticks {
            config.total_ticks = t;
        }
        if let Some(b) = self.belt_length {
            config.belt_length = b;
        }
        if let Some(w) = self.workers {
            config.workers_per_cell = w;
        }
        if let Some(s) = self.seed {
            config.seed = Some(s);
        }
        if let Some(i) = self.output_interval {
            config.output_interval_ticks = i;
        }
        Ok(config)
    }

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

pub fn load_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}
