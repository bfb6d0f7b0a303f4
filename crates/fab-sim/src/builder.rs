//! Fluent builder for constructing a [`Simulation`].

use fab_cell::{Belt, ComponentStream, RandomSource, WorkerCell};
use fab_core::{CellId, Component, FabError, SimConfig, Tick, WorkerId};
use fab_worker::{Worker, WorkerState};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation<S>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — total ticks, belt length, workers per cell, …
/// - `S: ComponentStream` — the source's draw stream (e.g.
///   [`fab_cell::UniformStream`])
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                 |
/// |------------------------|-------------------------|
/// | `.initial_cells(v)`    | Every work cell empty   |
/// | `.initial_states(v)`   | Every worker `Empty`    |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, ScriptedStream::new(draws))
///     .initial_states(states)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: ComponentStream> {
    config: SimConfig,
    stream: S,
    cells:  Option<Vec<Option<Component>>>,
    states: Option<Vec<WorkerState>>,
}

impl<S: ComponentStream> SimBuilder<S> {
    pub fn new(config: SimConfig, stream: S) -> Self {
        Self { config, stream, cells: None, states: None }
    }

    /// Pre-load the work cells (must be length `belt_length`).
    pub fn initial_cells(mut self, cells: Vec<Option<Component>>) -> Self {
        self.cells = Some(cells);
        self
    }

    /// Start workers in the given states (must be length
    /// `belt_length * workers_per_cell`, in construction order).
    pub fn initial_states(mut self, states: Vec<WorkerState>) -> Self {
        self.states = Some(states);
        self
    }

    /// Validate inputs, lay out the belt and workers, and return a
    /// ready-to-run [`Simulation`].
    ///
    /// Workers are created cell by cell: cell 0 gets `WorkerId(0)` through
    /// `WorkerId(workers_per_cell - 1)`, and so on.  That order is the tick
    /// order for the whole run.
    pub fn build(self) -> SimResult<Simulation<S>> {
        self.config.validate()?;
        let belt_length = self.config.belt_length;
        let worker_count = self.config.worker_count();

        let mut belt = Belt::new(RandomSource::new(self.stream), belt_length);
        if let Some(cells) = self.cells {
            if cells.len() != belt_length {
                return Err(SimError::LengthMismatch {
                    expected: belt_length,
                    got:      cells.len(),
                    what:     "initial cells",
                });
            }
            for (i, content) in cells.into_iter().enumerate() {
                if let Some(component) = content {
                    *belt.cell_mut(index_id(i, "cell")?) = WorkerCell::holding(component);
                }
            }
        }

        let states = match self.states {
            Some(s) => {
                if s.len() != worker_count {
                    return Err(SimError::LengthMismatch {
                        expected: worker_count,
                        got:      s.len(),
                        what:     "initial worker states",
                    });
                }
                s
            }
            None => vec![WorkerState::Empty; worker_count],
        };

        let workers = states
            .into_iter()
            .enumerate()
            .map(|(i, state)| {
                let id: WorkerId = index_id(i, "worker")?;
                let cell: CellId = index_id(i / self.config.workers_per_cell, "cell")?;
                Ok(Worker::with_state(id, cell, state))
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Simulation {
            config: self.config,
            clock:  Tick::ZERO,
            belt,
            workers,
        })
    }
}

/// Convert a layout index to a typed id.
fn index_id<T: TryFrom<usize>>(i: usize, what: &str) -> SimResult<T> {
    T::try_from(i)
        .map_err(|_| FabError::Config(format!("{what} index {i} does not fit in a u32 id")).into())
}
