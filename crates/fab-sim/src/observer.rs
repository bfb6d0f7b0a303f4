//! Simulation observer trait for progress reporting and data collection.

use fab_core::Tick;
use tracing::info;

use crate::SimStats;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called at the very start of each tick, before the belt shifts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after every worker acted.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &SimStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks) so output writers can record occupancy without the sim knowing
    /// about any specific format.
    fn on_snapshot(&mut self, _tick: Tick, _stats: &SimStats) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs the sink tally at `info` level after every tick.
pub struct TallyLogger;

impl SimObserver for TallyLogger {
    fn on_tick_end(&mut self, tick: Tick, stats: &SimStats) {
        info!(%tick, sink = %stats.output_tally, "tick complete");
    }

    fn on_sim_end(&mut self, final_tick: Tick, stats: &SimStats) {
        info!(
            %final_tick,
            units_in  = stats.units_in(),
            units_out = stats.units_out(),
            products  = stats.products(),
            "simulation finished"
        );
    }
}
