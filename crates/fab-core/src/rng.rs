//! Deterministic simulation-level RNG wrapper.
//!
//! The simulator consumes exactly one draw per tick (the source's pick from
//! {A, B, empty}), so a single `SmallRng` stream is enough.  The same seed
//! always yields the same draw sequence and therefore the same run.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand::seq::SliceRandom;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Runs are not reproducible.
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    /// `Some(seed)` → [`SimRng::new`], `None` → [`SimRng::from_entropy`].
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Choose a uniformly random element from a non-empty slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }
}
