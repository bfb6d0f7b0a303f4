//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use fab_core::{Component, Tick};
use fab_sim::{SimObserver, SimStats};

use crate::row::{BeltSnapshotRow, TickSummaryRow, WorkerSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes a summary row every tick and occupancy rows
/// at snapshot ticks to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// Build the summary row for the tick that just completed.
pub fn summary_row(tick: Tick, stats: &SimStats) -> TickSummaryRow {
    let src = &stats.input_tally;
    let sink = &stats.output_tally;
    TickSummaryRow {
        tick:         tick.0,
        source_a:     src.get(Some(Component::A)),
        source_b:     src.get(Some(Component::B)),
        source_empty: src.empty(),
        sink_a:       sink.get(Some(Component::A)),
        sink_b:       sink.get(Some(Component::B)),
        sink_c:       sink.get(Some(Component::C)),
        sink_empty:   sink.empty(),
        belt_units:   stats.belt_tally().units(),
        worker_units: stats.worker_tally().units(),
        conserved:    stats.is_conserved(),
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &SimStats) {
        let result = self.writer.write_tick_summary(&summary_row(tick, stats));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, stats: &SimStats) {
        let belt: Vec<BeltSnapshotRow> = stats
            .belt_occupancy
            .iter()
            .enumerate()
            .map(|(i, &content)| BeltSnapshotRow {
                tick:     tick.0,
                position: i as u32 + 1,
                content,
            })
            .collect();
        let result = self.writer.write_belt_snapshots(&belt);
        self.store_err(result);

        let workers: Vec<WorkerSnapshotRow> = stats
            .worker_states
            .iter()
            .zip(&stats.worker_cells)
            .enumerate()
            .map(|(i, (&state, cell))| WorkerSnapshotRow {
                tick:      tick.0,
                worker_id: i as u32,
                cell_id:   cell.0,
                state,
            })
            .collect();
        let result = self.writer.write_worker_snapshots(&workers);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &SimStats) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
