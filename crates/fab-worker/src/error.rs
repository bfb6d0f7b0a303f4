use fab_cell::CellError;
use fab_core::{CellId, WorkerId};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WorkerError {
    /// A guarded cell access failed anyway.  The worker's state is unchanged.
    #[error("{worker} failed to access {cell}: {source}")]
    Cell {
        worker: WorkerId,
        cell:   CellId,
        source: CellError,
    },
}

pub type WorkerResult<T> = Result<T, WorkerError>;
