//! `SimStats` — the read-only snapshot reporting collaborators consume.

use fab_core::{CellId, Component, Tally, Tick};
use fab_worker::WorkerState;

/// Counters and occupancy at the end of a tick.
///
/// Units are counted in raw inputs: `A` and `B` weigh 1 and `C` weighs 2.
/// At every tick boundary the units the source emitted equal the units in
/// the sink plus those on the belt plus those held by workers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimStats {
    /// Ticks completed so far.
    pub tick: Tick,

    /// Everything the source has drawn, empties included.
    pub input_tally: Tally,

    /// Everything that has fallen into the sink, empties included.
    pub output_tally: Tally,

    /// Content of each work cell, in belt order.
    pub belt_occupancy: Vec<Option<Component>>,

    /// Cell each worker is assigned to, in construction order.
    pub worker_cells: Vec<CellId>,

    /// State of each worker, in construction order.
    pub worker_states: Vec<WorkerState>,

    /// What each worker holds, in construction order.
    pub worker_occupancy: Vec<Tally>,
}

impl SimStats {
    /// Components currently sitting on the belt.
    pub fn belt_tally(&self) -> Tally {
        self.belt_occupancy
            .iter()
            .filter(|slot| slot.is_some())
            .copied()
            .collect()
    }

    /// Components currently held by any worker.
    pub fn worker_tally(&self) -> Tally {
        let mut total = Tally::new();
        for held in &self.worker_occupancy {
            total.merge(held);
        }
        total
    }

    /// Units the source has emitted.
    pub fn units_in(&self) -> u64 {
        self.input_tally.units()
    }

    /// Units accounted for downstream of the source.
    pub fn units_out(&self) -> u64 {
        self.output_tally.units() + self.belt_tally().units() + self.worker_tally().units()
    }

    /// Whether no unit was created or lost.
    pub fn is_conserved(&self) -> bool {
        self.units_in() == self.units_out()
    }

    /// Finished products delivered to the sink.
    pub fn products(&self) -> u64 {
        self.output_tally.get(Some(Component::C))
    }

    /// Workers holding an A/B pair, from `HasAB` through `Assembling3`.
    pub fn assembling_workers(&self) -> usize {
        self.worker_states
            .iter()
            .filter(|s| s.holds_pair())
            .count()
    }
}
