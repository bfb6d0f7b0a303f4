//! `Belt` — the conveyor that shifts every component one position right.
//!
//! # Layout
//!
//! ```text
//! position:  0        1 ..= belt_length          belt_length + 1
//!            source   WorkerCell(CellId(0..n))   sink
//! ```
//!
//! # One tick
//!
//! 1. refresh every position;
//! 2. `get` every position left to right into a snapshot;
//! 3. refresh again (each position was read exactly once);
//! 4. for `i` in `1..len`, shift `snapshot[i - 1]` into position `i`;
//!    position 0 is never written and the last snapshot value is dropped;
//! 5. refresh a third time so workers can access the cells this same tick.

use fab_core::{CellId, Component};
use tracing::trace;

use crate::{Cell, CellResult, ComponentStream, RandomSource, TallySink, WorkerCell};

pub struct Belt<S: ComponentStream> {
    source: RandomSource<S>,
    cells:  Vec<WorkerCell>,
    sink:   TallySink,
}

impl<S: ComponentStream> Belt<S> {
    /// A belt with `belt_length` empty work cells between `source` and a
    /// fresh sink.
    pub fn new(source: RandomSource<S>, belt_length: usize) -> Self {
        Self {
            source,
            cells: vec![WorkerCell::new(); belt_length],
            sink:  TallySink::new(),
        }
    }

    /// Positions including source and sink (`belt_length + 2`).
    #[inline]
    pub fn positions(&self) -> usize {
        self.cells.len() + 2
    }

    #[inline]
    pub fn source(&self) -> &RandomSource<S> {
        &self.source
    }

    #[inline]
    pub fn sink(&self) -> &TallySink {
        &self.sink
    }

    /// The work cells in belt order.
    #[inline]
    pub fn cells(&self) -> &[WorkerCell] {
        &self.cells
    }

    #[inline]
    pub fn cell_mut(&mut self, id: CellId) -> &mut WorkerCell {
        &mut self.cells[id.index()]
    }

    /// Current content of every work cell, in belt order.
    pub fn occupancy(&self) -> Vec<Option<Component>> {
        self.cells.iter().map(Cell::peek).collect()
    }

    /// The cell at absolute belt position `pos`.
    fn position_mut(&mut self, pos: usize) -> &mut dyn Cell {
        let last = self.cells.len() + 1;
        match pos {
            0 => &mut self.source,
            p if p == last => &mut self.sink,
            p => &mut self.cells[p - 1],
        }
    }

    /// Clear every busy flag.
    pub fn refresh(&mut self) {
        self.source.refresh();
        for cell in &mut self.cells {
            cell.refresh();
        }
        self.sink.refresh();
    }

    /// Shift every component one position to the right.
    ///
    /// An error here means the access protocol was violated and is never an
    /// ordinary contention outcome.
    pub fn tick(&mut self) -> CellResult<()> {
        self.refresh();
        let snapshot = (0..self.positions())
            .map(|pos| self.position_mut(pos).get())
            .collect::<CellResult<Vec<_>>>()?;
        self.refresh();

        for pos in 1..self.positions() {
            self.position_mut(pos).receive(snapshot[pos - 1])?;
        }
        self.refresh();

        trace!(drawn = ?snapshot[0], delivered = ?snapshot[self.positions() - 2], "belt shifted");
        Ok(())
    }
}
