//! `RandomSource` — the emitting boundary at belt position 0.

use std::collections::VecDeque;

use fab_core::{Component, SimRng, Tally};

use crate::{Cell, CellError, CellResult};

/// Where the source's per-tick draw comes from.
pub trait ComponentStream {
    /// Produce the next draw.  Called exactly once per tick.
    fn next_draw(&mut self) -> Option<Component>;
}

/// The draws a source picks between, each with equal weight.
const CHOICES: [Option<Component>; 3] = [Some(Component::A), Some(Component::B), None];

/// Uniform draws from {A, B, empty} over a seedable [`SimRng`].
pub struct UniformStream {
    rng: SimRng,
}

impl UniformStream {
    pub fn new(rng: SimRng) -> Self {
        Self { rng }
    }

    /// Shorthand for `UniformStream::new(SimRng::from_seed(seed))`.
    pub fn seeded(seed: Option<u64>) -> Self {
        Self::new(SimRng::from_seed(seed))
    }
}

impl ComponentStream for UniformStream {
    fn next_draw(&mut self) -> Option<Component> {
        self.rng.choose(&CHOICES).copied().flatten()
    }
}

/// Replays a fixed draw sequence, then yields empties forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedStream {
    draws: VecDeque<Option<Component>>,
}

impl ScriptedStream {
    pub fn new(draws: impl IntoIterator<Item = Option<Component>>) -> Self {
        Self { draws: draws.into_iter().collect() }
    }

    /// Draws not yet replayed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl ComponentStream for ScriptedStream {
    fn next_draw(&mut self) -> Option<Component> {
        self.draws.pop_front().flatten()
    }
}

/// Emits one draw per tick into the belt and tallies every draw, empties
/// included.
///
/// The source never holds anything (`peek` is always empty), never receives
/// a `put`, and never becomes busy.
pub struct RandomSource<S: ComponentStream> {
    stream: S,
    tally:  Tally,
}

impl<S: ComponentStream> RandomSource<S> {
    pub fn new(stream: S) -> Self {
        Self { stream, tally: Tally::new() }
    }

    /// Cumulative emission tally.
    #[inline]
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn stream(&self) -> &S {
        &self.stream
    }
}

impl<S: ComponentStream> Cell for RandomSource<S> {
    #[inline]
    fn peek(&self) -> Option<Component> {
        None
    }

    fn get(&mut self) -> CellResult<Option<Component>> {
        let draw = self.stream.next_draw();
        self.tally.record(draw);
        Ok(draw)
    }

    fn put(&mut self, _component: Component) -> CellResult<()> {
        Err(CellError::Unsupported("source"))
    }

    fn refresh(&mut self) {}
}
