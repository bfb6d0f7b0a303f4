//! Worker states and the transition table.

use std::fmt;

use fab_core::{Component, Tally};

/// Ticks spent in the `Assembling*` states once both inputs are held.
pub const ASSEMBLY_TICKS: u64 = 3;

/// What a worker holds, independent of its cell's content.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkerState {
    #[default]
    Empty,
    HasA,
    HasB,
    HasAB,
    Assembling1,
    Assembling2,
    Assembling3,
    HasC,
}

impl WorkerState {
    pub const ALL: [WorkerState; 8] = [
        WorkerState::Empty,
        WorkerState::HasA,
        WorkerState::HasB,
        WorkerState::HasAB,
        WorkerState::Assembling1,
        WorkerState::Assembling2,
        WorkerState::Assembling3,
        WorkerState::HasC,
    ];

    /// Whether the worker is past `HasAB` and has not yet deposited its `C`.
    #[inline]
    pub fn is_assembling(self) -> bool {
        matches!(
            self,
            WorkerState::Assembling1 | WorkerState::Assembling2 | WorkerState::Assembling3
        )
    }

    /// Whether the worker holds an A and a B that are not yet a `C`.
    #[inline]
    pub fn holds_pair(self) -> bool {
        self == WorkerState::HasAB || self.is_assembling()
    }

    /// The components this worker is holding.
    ///
    /// Both inputs stay on the books until `C` exists; from then on the
    /// worker holds one `C`, worth the same two units.
    pub fn held(self) -> Tally {
        let mut tally = Tally::new();
        match self {
            WorkerState::Empty => {}
            WorkerState::HasA => tally.record(Some(Component::A)),
            WorkerState::HasB => tally.record(Some(Component::B)),
            WorkerState::HasAB
            | WorkerState::Assembling1
            | WorkerState::Assembling2
            | WorkerState::Assembling3 => {
                tally.record(Some(Component::A));
                tally.record(Some(Component::B));
            }
            WorkerState::HasC => tally.record(Some(Component::C)),
        }
        tally
    }

    /// Input units held (`C` weighs 2).
    #[inline]
    pub fn units(self) -> u64 {
        self.held().units()
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WorkerState::Empty       => "Empty",
            WorkerState::HasA        => "HasA",
            WorkerState::HasB        => "HasB",
            WorkerState::HasAB       => "HasAB",
            WorkerState::Assembling1 => "Assembling1",
            WorkerState::Assembling2 => "Assembling2",
            WorkerState::Assembling3 => "Assembling3",
            WorkerState::HasC        => "HasC",
        };
        f.write_str(s)
    }
}

/// Side effect a transition performs on the worker's cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Action {
    /// Leave the cell alone.
    Hold,
    /// Drain the cell (`get`).
    Take,
    /// Deposit a finished `C` (`put`).
    DepositC,
}

/// One step of the worker state machine.
///
/// `observed` is the cell's `peek()` and `cell_busy` its busy flag at the
/// moment the worker acts.  A worker only touches an idle cell; on a busy one
/// it keeps its state, which is how the loser of a shared-cell race behaves.
pub fn transition(
    state:     WorkerState,
    observed:  Option<Component>,
    cell_busy: bool,
) -> (WorkerState, Action) {
    use Component::{A, B};
    use WorkerState::*;

    match (state, observed) {
        (Empty, Some(A)) if !cell_busy => (HasA, Action::Take),
        (Empty, Some(B)) if !cell_busy => (HasB, Action::Take),
        (HasA, Some(B)) if !cell_busy => (HasAB, Action::Take),
        (HasB, Some(A)) if !cell_busy => (HasAB, Action::Take),

        // Assembly runs on a fixed clock regardless of cell traffic.
        (HasAB, _) => (Assembling1, Action::Hold),
        (Assembling1, _) => (Assembling2, Action::Hold),
        (Assembling2, _) => (Assembling3, Action::Hold),
        (Assembling3, _) => (HasC, Action::Hold),

        // Backpressure: a full or busy cell keeps the C in hand.
        (HasC, None) if !cell_busy => (Empty, Action::DepositC),

        (Empty | HasA | HasB | HasC, _) => (state, Action::Hold),
    }
}
