//! `Tally` — counts of components (and empty draws) keyed by slot content.

use std::fmt;

use crate::Component;

/// Fixed-size count table keyed by `Option<Component>`.
///
/// Slot layout: `[A, B, C, empty]`.  Counts only ever increase for the
/// source and sink; snapshot tallies (belt, workers) are rebuilt per read.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tally {
    counts: [u64; 4],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn slot(item: Option<Component>) -> usize {
        match item {
            Some(Component::A) => 0,
            Some(Component::B) => 1,
            Some(Component::C) => 2,
            None => 3,
        }
    }

    /// Count one observation of `item`.
    #[inline]
    pub fn record(&mut self, item: Option<Component>) {
        self.counts[Self::slot(item)] += 1;
    }

    #[inline]
    pub fn get(&self, item: Option<Component>) -> u64 {
        self.counts[Self::slot(item)]
    }

    /// Number of empty observations.
    #[inline]
    pub fn empty(&self) -> u64 {
        self.counts[3]
    }

    /// Total observations including empties.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Input units represented by the counted components (`C` weighs 2).
    pub fn units(&self) -> u64 {
        Component::ALL
            .iter()
            .map(|&c| self.get(Some(c)) * c.units())
            .sum()
    }

    /// Add every count from `other` into `self`.
    pub fn merge(&mut self, other: &Tally) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }
}

impl FromIterator<Option<Component>> for Tally {
    fn from_iter<I: IntoIterator<Item = Option<Component>>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for item in iter {
            tally.record(item);
        }
        tally
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{A: {}, B: {}, C: {}, empty: {}}}",
            self.counts[0], self.counts[1], self.counts[2], self.counts[3]
        )
    }
}
