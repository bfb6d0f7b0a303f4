//! `fab-output` — simulation output writers.
//!
//! | Backend | Files created                                                          |
//! |---------|------------------------------------------------------------------------|
//! | CSV     | `tick_summaries.csv`, `belt_snapshots.csv`, `worker_snapshots.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `fab_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use fab_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{BeltSnapshotRow, TickSummaryRow, WorkerSnapshotRow};
pub use writer::OutputWriter;
