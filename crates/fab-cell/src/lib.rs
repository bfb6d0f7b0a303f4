//! `fab-cell` — the cell access protocol and the conveyor belt.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`cell`]        | `Cell` trait — peek / get / put / refresh                  |
//! | [`worker_cell`] | `WorkerCell` — single slot guarded by a per-tick busy flag |
//! | [`source`]      | `RandomSource<S>`, `ComponentStream`, uniform + scripted   |
//! | [`sink`]        | `TallySink` — counts everything that falls off the belt    |
//! | [`belt`]        | `Belt<S>` — source, work cells, sink; one shift per tick   |
//! | [`error`]       | `CellError`, `CellResult<T>`                               |
//!
//! # Access protocol
//!
//! Every cell serves at most one logical access (`get` or `put`) between two
//! `refresh` calls.  The busy flag is the only mutex: it is set by the access
//! and cleared by the orchestrator, never by a consumer.  A second access in
//! the same window fails with [`CellError::Busy`] without mutating the cell.

pub mod belt;
pub mod cell;
pub mod error;
pub mod sink;
pub mod source;
pub mod worker_cell;

#[cfg(test)]
mod tests;

pub use belt::Belt;
pub use cell::Cell;
pub use error::{CellError, CellResult};
pub use sink::TallySink;
pub use source::{ComponentStream, RandomSource, ScriptedStream, UniformStream};
pub use worker_cell::WorkerCell;
