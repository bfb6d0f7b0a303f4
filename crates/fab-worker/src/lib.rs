//! `fab-worker` — the per-cell assembly state machine.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                       |
//! |------------|----------------------------------------------------------------|
//! | [`state`]  | `WorkerState`, `Action`, and the pure `transition` function    |
//! | [`worker`] | `Worker` — binds one state machine to one shared `WorkerCell`  |
//! | [`error`]  | `WorkerError`, `WorkerResult<T>`                               |
//!
//! # Design notes
//!
//! The state a worker holds is tracked independently of what is physically
//! in its cell.  Several workers may share one cell; within a tick only the
//! first to act on it succeeds, and the others see the cell busy (or already
//! changed) and keep their state.
//!
//! `transition` is a pure function of `(state, observed content, busy)`, so
//! the full table is testable without a cell.  [`Worker::tick`] checks the
//! guards before touching the cell, which means contention never shows up as
//! an error.

pub mod error;
pub mod state;
pub mod worker;


pub use error::{WorkerError, WorkerResult};
pub use state::{transition, Action, WorkerState, ASSEMBLY_TICKS};
pub use worker::Worker;
