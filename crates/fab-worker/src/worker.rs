//! `Worker` — one state machine bound to one shared cell.

use fab_cell::{Cell, WorkerCell};
use fab_core::{CellId, Component, WorkerId};
use tracing::trace;

use crate::{transition, Action, WorkerError, WorkerResult, WorkerState};

/// An agent assigned to one cell for the whole run.
///
/// The worker stores only the *index* of its cell; the cell itself is owned
/// by the belt and lent to the worker for the duration of [`tick`][Self::tick].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Worker {
    id:    WorkerId,
    cell:  CellId,
    state: WorkerState,
}

impl Worker {
    pub fn new(id: WorkerId, cell: CellId) -> Self {
        Self { id, cell, state: WorkerState::Empty }
    }

    /// A worker that starts in `state` (scenario setup and tests).
    pub fn with_state(id: WorkerId, cell: CellId, state: WorkerState) -> Self {
        Self { id, cell, state }
    }

    #[inline]
    pub fn id(&self) -> WorkerId {
        self.id
    }

    #[inline]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[inline]
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Observe `cell` and advance one step.
    ///
    /// `cell` must be the cell this worker was assigned.  The state only
    /// changes once the cell access succeeded, so an error never loses a
    /// held component.
    pub fn tick(&mut self, cell: &mut WorkerCell) -> WorkerResult<()> {
        let observed = cell.peek();
        let (next, action) = transition(self.state, observed, cell.is_busy());

        let result = match action {
            Action::Hold => Ok(()),
            Action::Take => cell.get().map(drop),
            Action::DepositC => cell.put(Component::C),
        };
        result.map_err(|source| WorkerError::Cell {
            worker: self.id,
            cell:   self.cell,
            source,
        })?;

        if next != self.state {
            trace!(worker = %self.id, from = %self.state, to = %next, ?action, "worker transition");
        }
        self.state = next;
        Ok(())
    }
}
