//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BeltSnapshotRow, OutputResult, TickSummaryRow, WorkerSnapshotRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of belt cell snapshots.
    fn write_belt_snapshots(&mut self, rows: &[BeltSnapshotRow]) -> OutputResult<()>;

    /// Write a batch of worker snapshots.
    fn write_worker_snapshots(&mut self, rows: &[WorkerSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
