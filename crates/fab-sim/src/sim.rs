//! The `Simulation` struct and its tick loop.

use fab_cell::{Belt, Cell, ComponentStream, UniformStream};
use fab_core::{SimConfig, Tick};
use fab_worker::Worker;
use tracing::{debug, warn};

use crate::{SimBuilder, SimError, SimObserver, SimResult, SimStats};

/// The main simulation runner.
///
/// `Simulation<S>` owns the belt (and through it every cell) and the workers.
/// Workers refer to their cell by [`CellId`][fab_core::CellId] and borrow it
/// from the belt only while they tick.
///
/// Create via [`SimBuilder`], [`Simulation::new`], or
/// [`Simulation::from_config`].
pub struct Simulation<S: ComponentStream = UniformStream> {
    /// Global configuration (total ticks, geometry, seed, …).
    pub config: SimConfig,

    pub(crate) clock:   Tick,
    pub(crate) belt:    Belt<S>,
    pub(crate) workers: Vec<Worker>,
}

impl Simulation<UniformStream> {
    /// A seedless simulation with `workers_per_cell` workers on each of
    /// `belt_length` cells.  Fails before any tick runs if the geometry is
    /// invalid.
    pub fn new(ticks: u64, belt_length: usize, workers_per_cell: usize) -> SimResult<Self> {
        Self::from_config(SimConfig::new(ticks, belt_length, workers_per_cell))
    }

    /// A simulation whose source draws uniformly using `config.seed`.
    pub fn from_config(config: SimConfig) -> SimResult<Self> {
        let stream = UniformStream::seeded(config.seed);
        SimBuilder::new(config, stream).build()
    }
}

impl<S: ComponentStream> Simulation<S> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Ticks completed so far.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock
    }

    /// Whether `config.total_ticks` ticks have run.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.clock >= self.config.end_tick()
    }

    #[inline]
    pub fn belt(&self) -> &Belt<S> {
        &self.belt
    }

    /// Workers in construction (and tick) order.
    #[inline]
    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    /// Advance global state by exactly one tick.
    ///
    /// Any error is an internal defect: cell contention is resolved inside
    /// the belt and the workers and never surfaces here.
    pub fn tick(&mut self) -> SimResult<()> {
        let now = self.clock;
        debug!(tick = now.0, "tick start");

        if let Err(e) = self.belt.tick() {
            warn!(tick = now.0, error = %e, "belt shift violated the cell protocol");
            return Err(SimError::Belt(e));
        }

        // Split borrow: workers mutate their own state and borrow one cell
        // from the belt at a time.
        let belt = &mut self.belt;
        for worker in &mut self.workers {
            let cell = belt.cell_mut(worker.cell());
            if let Err(e) = worker.tick(cell) {
                warn!(tick = now.0, error = %e, "worker access violated the cell protocol");
                return Err(e.into());
            }
        }

        self.clock = now.next();
        Ok(())
    }

    /// Read-only snapshot of tallies and occupancy.
    pub fn stats(&self) -> SimStats {
        SimStats {
            tick:             self.clock,
            input_tally:      *self.belt.source().tally(),
            output_tally:     *self.belt.sink().tally(),
            belt_occupancy:   self.belt.cells().iter().map(Cell::peek).collect(),
            worker_cells:     self.workers.iter().map(Worker::cell).collect(),
            worker_states:    self.workers.iter().map(Worker::state).collect(),
            worker_occupancy: self.workers.iter().map(|w| w.state().held()).collect(),
        }
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.is_finished() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock, &self.stats());
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock;
        observer.on_tick_start(now);
        self.tick()?;

        let stats = self.stats();
        observer.on_tick_end(now, &stats);
        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &stats);
        }
        Ok(())
    }
}
