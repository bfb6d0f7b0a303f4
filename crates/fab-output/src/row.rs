//! Plain data row types written by output backends.

use fab_core::Component;
use fab_worker::WorkerState;

/// Cumulative tallies and unit balance at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub source_a:     u64,
    pub source_b:     u64,
    pub source_empty: u64,
    pub sink_a:       u64,
    pub sink_b:       u64,
    pub sink_c:       u64,
    pub sink_empty:   u64,
    pub belt_units:   u64,
    pub worker_units: u64,
    pub conserved:    bool,
}

/// Content of one work cell at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeltSnapshotRow {
    pub tick:     u64,
    /// Absolute belt position (1-based; 0 is the source).
    pub position: u32,
    pub content:  Option<Component>,
}

/// State of one worker at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSnapshotRow {
    pub tick:      u64,
    pub worker_id: u32,
    pub cell_id:   u32,
    pub state:     WorkerState,
}
