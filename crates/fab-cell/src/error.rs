use thiserror::Error;

/// Outcomes of a cell access that did not happen.
///
/// `Busy` and `Full` are expected contention signals: callers check
/// [`Cell::is_busy`][crate::Cell::is_busy] and [`Cell::peek`][crate::Cell::peek]
/// first and simply do not act.  `Unsupported` means a boundary cell was
/// asked to do something it never does and always indicates a wiring bug.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CellError {
    #[error("cell is busy")]
    Busy,

    #[error("cell is full")]
    Full,

    #[error("{0} does not support this operation")]
    Unsupported(&'static str),
}

pub type CellResult<T> = Result<T, CellError>;
