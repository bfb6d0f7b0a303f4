use fab_cell::CellError;
use fab_core::FabError;
use fab_worker::WorkerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] FabError),

    #[error("{what} length {got} does not match {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    /// The belt shift broke the cell access protocol.  Always a bug.
    #[error("internal defect during belt shift: {0}")]
    Belt(#[source] CellError),

    /// A worker's guarded access failed.  Always a bug.
    #[error("internal defect during worker tick: {0}")]
    Worker(#[from] WorkerError),
}

pub type SimResult<T> = Result<T, SimError>;
