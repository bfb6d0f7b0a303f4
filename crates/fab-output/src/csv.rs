//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `tick_summaries.csv`
//! - `belt_snapshots.csv`
//! - `worker_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BeltSnapshotRow, OutputResult, TickSummaryRow, WorkerSnapshotRow};

pub const TICK_SUMMARY_HEADERS: [&str; 11] = [
    "tick",
    "source_a",
    "source_b",
    "source_empty",
    "sink_a",
    "sink_b",
    "sink_c",
    "sink_empty",
    "belt_units",
    "worker_units",
    "conserved",
];

pub const BELT_SNAPSHOT_HEADERS: [&str; 3] = ["tick", "position", "content"];

pub const WORKER_SNAPSHOT_HEADERS: [&str; 4] = ["tick", "worker_id", "cell_id", "state"];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    summaries: Writer<File>,
    belt:      Writer<File>,
    workers:   Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(TICK_SUMMARY_HEADERS)?;

        let mut belt = Writer::from_path(dir.join("belt_snapshots.csv"))?;
        belt.write_record(BELT_SNAPSHOT_HEADERS)?;

        let mut workers = Writer::from_path(dir.join("worker_snapshots.csv"))?;
        workers.write_record(WORKER_SNAPSHOT_HEADERS)?;

        Ok(Self {
            summaries,
            belt,
            workers,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.source_a.to_string(),
            row.source_b.to_string(),
            row.source_empty.to_string(),
            row.sink_a.to_string(),
            row.sink_b.to_string(),
            row.sink_c.to_string(),
            row.sink_empty.to_string(),
            row.belt_units.to_string(),
            row.worker_units.to_string(),
            (row.conserved as u8).to_string(),
        ])?;
        Ok(())
    }

    fn write_belt_snapshots(&mut self, rows: &[BeltSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.belt.write_record(&[
                row.tick.to_string(),
                row.position.to_string(),
                row.content.map(|c| c.to_string()).unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn write_worker_snapshots(&mut self, rows: &[WorkerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.workers.write_record(&[
                row.tick.to_string(),
                row.worker_id.to_string(),
                row.cell_id.to_string(),
                row.state.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        self.belt.flush()?;
        self.workers.flush()?;
        Ok(())
    }
}
