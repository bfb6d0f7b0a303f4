//! Run configuration.

use crate::{FabError, FabResult, Tick};

/// Smallest belt that still has a cell between source and sink worth sharing.
pub const MIN_BELT_LENGTH: usize = 2;

/// Top-level simulation configuration.
///
/// Typically built from CLI flags or loaded from a JSON file by the
/// application crate and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Total ticks to simulate.  Must be at least 1.
    pub total_ticks: u64,

    /// Number of work cells between source and sink.  Must be at least 2.
    pub belt_length: usize,

    /// Workers assigned to each work cell.  Must be at least 1.
    pub workers_per_cell: usize,

    /// Master RNG seed.  `None` seeds from OS entropy; the same `Some(seed)`
    /// always produces identical results.
    pub seed: Option<u64>,

    /// Observers receive a snapshot every N ticks.  1 = every tick;
    /// 0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_ticks:           100,
            belt_length:           3,
            workers_per_cell:      2,
            seed:                  None,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Shorthand for a seedless config with the three required dimensions.
    pub fn new(total_ticks: u64, belt_length: usize, workers_per_cell: usize) -> Self {
        Self {
            total_ticks,
            belt_length,
            workers_per_cell,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject geometries the simulator cannot run.
    pub fn validate(&self) -> FabResult<()> {
        if self.total_ticks < 1 {
            return Err(FabError::Config("total_ticks must be at least 1".into()));
        }
        if self.belt_length < MIN_BELT_LENGTH {
            return Err(FabError::Config(format!(
                "belt_length must be at least {MIN_BELT_LENGTH}, got {}",
                self.belt_length
            )));
        }
        if self.workers_per_cell < 1 {
            return Err(FabError::Config("workers_per_cell must be at least 1".into()));
        }
        let fits = self
            .belt_length
            .checked_mul(self.workers_per_cell)
            .is_some_and(|n| u32::try_from(n).is_ok());
        if !fits {
            return Err(FabError::Config(format!(
                "{} cells × {} workers exceeds the worker id range",
                self.belt_length, self.workers_per_cell
            )));
        }
        Ok(())
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Total worker count across all cells.
    #[inline]
    pub fn worker_count(&self) -> usize {
        self.belt_length * self.workers_per_cell
    }
}
