//! `TallySink` — the absorbing boundary at the last belt position.

use fab_core::{Component, Tally};

use crate::{Cell, CellResult};

/// Counts everything the belt shifts into it, empty arrivals included.
///
/// Accepts any number of arrivals and never fills up; `get` always yields
/// nothing so the sink's own snapshot during a shift is harmless.
#[derive(Clone, Debug, Default)]
pub struct TallySink {
    tally: Tally,
}

impl TallySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cumulative receipt tally.
    #[inline]
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
}

impl Cell for TallySink {
    #[inline]
    fn peek(&self) -> Option<Component> {
        None
    }

    fn get(&mut self) -> CellResult<Option<Component>> {
        Ok(None)
    }

    fn put(&mut self, component: Component) -> CellResult<()> {
        self.tally.record(Some(component));
        Ok(())
    }

    fn refresh(&mut self) {}

    fn receive(&mut self, item: Option<Component>) -> CellResult<()> {
        self.tally.record(item);
        Ok(())
    }
}
