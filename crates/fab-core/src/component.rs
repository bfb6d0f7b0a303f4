//! The three part types that travel along the belt.

use std::fmt;

/// A part on the production line.
///
/// `A` and `B` are raw inputs emitted by the source.  `C` is only ever
/// produced by a worker assembling one `A` with one `B`; the source never
/// emits it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    A,
    B,
    C,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::A, Component::B, Component::C];

    /// Input units this component represents for conservation accounting.
    ///
    /// A `C` is built from one `A` and one `B`, so it weighs two units.
    #[inline]
    pub fn units(self) -> u64 {
        match self {
            Component::A | Component::B => 1,
            Component::C => 2,
        }
    }

    /// Units held by an optional slot; an empty slot weighs nothing.
    #[inline]
    pub fn units_of(slot: Option<Component>) -> u64 {
        slot.map_or(0, Component::units)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Component::A => "A",
            Component::B => "B",
            Component::C => "C",
        };
        f.write_str(s)
    }
}
