//! Strongly typed, zero-cost identifier wrappers.
//!
//! The inner integer is `pub` to allow direct indexing via `id.0 as usize`,
//! but callers should prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        /// Fails when `n` does not fit the inner integer.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a work cell on the belt, counted from the first cell after
    /// the source (`CellId(0)` sits at belt position 1).
    pub struct CellId(u32);
}

typed_id! {
    /// Index of a worker in construction order.  Workers tick in ascending
    /// `WorkerId` order, which decides who wins a shared cell.
    pub struct WorkerId(u32);
}
