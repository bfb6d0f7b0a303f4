//! The `Cell` trait — the capability every belt position exposes.

use fab_core::Component;

use crate::CellResult;

/// A single-slot position on the belt.
///
/// Implemented by [`WorkerCell`][crate::WorkerCell] (the work positions) and
/// by the two boundary cells, [`RandomSource`][crate::RandomSource] and
/// [`TallySink`][crate::TallySink].
pub trait Cell {
    /// Non-destructive read of the current content.  Never fails.
    fn peek(&self) -> Option<Component>;

    /// Drain the slot and mark the cell busy, returning what it held
    /// (possibly nothing).
    ///
    /// Fails with [`CellError::Busy`][crate::CellError::Busy] if the cell
    /// already served an access this tick.
    fn get(&mut self) -> CellResult<Option<Component>>;

    /// Store `component` and mark the cell busy.
    ///
    /// Fails with `Busy` if already accessed this tick, or `Full` if the slot
    /// is occupied.  A failed put leaves the cell untouched.
    fn put(&mut self, component: Component) -> CellResult<()>;

    /// Clear the busy flag.  Called by the orchestrator at tick boundaries.
    fn refresh(&mut self);

    /// Whether the cell already served an access this tick.
    fn is_busy(&self) -> bool {
        false
    }

    /// Accept one belt shift.
    ///
    /// Shifting nothing is not a `put`: it never fails and leaves the cell
    /// as it was.  Sinks override this to count empty arrivals.
    fn receive(&mut self, item: Option<Component>) -> CellResult<()> {
        match item {
            Some(component) => self.put(component),
            None => Ok(()),
        }
    }
}
