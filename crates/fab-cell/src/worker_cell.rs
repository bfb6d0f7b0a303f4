//! `WorkerCell` — the shared slot workers draw from and deposit into.

use fab_core::Component;

use crate::{Cell, CellError, CellResult};

/// A work position on the belt.
///
/// Created once per belt position at simulation start and never destroyed
/// before the run ends.  Each tick it is written by exactly one belt shift
/// and then accessed by at most one of the workers assigned to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerCell {
    inventory: Option<Component>,
    busy:      bool,
}

impl WorkerCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// A non-busy cell already holding `component`.
    pub fn holding(component: Component) -> Self {
        Self { inventory: Some(component), busy: false }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inventory.is_none()
    }
}

impl Cell for WorkerCell {
    #[inline]
    fn peek(&self) -> Option<Component> {
        self.inventory
    }

    fn get(&mut self) -> CellResult<Option<Component>> {
        if self.busy {
            return Err(CellError::Busy);
        }
        self.busy = true;
        Ok(self.inventory.take())
    }

    fn put(&mut self, component: Component) -> CellResult<()> {
        if self.busy {
            return Err(CellError::Busy);
        }
        if self.inventory.is_some() {
            return Err(CellError::Full);
        }
        self.inventory = Some(component);
        self.busy = true;
        Ok(())
    }

    #[inline]
    fn refresh(&mut self) {
        self.busy = false;
    }

    #[inline]
    fn is_busy(&self) -> bool {
        self.busy
    }
}
