//! Unit tests for fab-cell.

#[cfg(test)]
mod worker_cell_tests {
    use fab_core::Component;

    use crate::{Cell, CellError, WorkerCell};

    #[test]
    fn new_cell_is_empty_and_idle() {
        let cell = WorkerCell::new();
        assert_eq!(cell.peek(), None);
        assert!(!cell.is_busy());
        assert!(cell.is_empty());
    }

    #[test]
    fn get_drains_and_marks_busy() {
        let mut cell = WorkerCell::holding(Component::A);
        assert_eq!(cell.get(), Ok(Some(Component::A)));
        assert_eq!(cell.peek(), None);
        assert!(cell.is_busy());
    }

    #[test]
    fn get_on_empty_cell_returns_nothing_but_still_marks_busy() {
        let mut cell = WorkerCell::new();
        assert_eq!(cell.get(), Ok(None));
        assert!(cell.is_busy());
    }

    #[test]
    fn second_get_same_tick_is_busy() {
        let mut cell = WorkerCell::holding(Component::B);
        cell.get().unwrap();
        assert_eq!(cell.get(), Err(CellError::Busy));
    }

    #[test]
    fn second_put_same_tick_is_busy() {
        let mut cell = WorkerCell::new();
        cell.put(Component::A).unwrap();
        assert_eq!(cell.put(Component::B), Err(CellError::Busy));
        assert_eq!(cell.peek(), Some(Component::A));
    }

    #[test]
    fn put_after_get_same_tick_is_busy_and_does_not_mutate() {
        let mut cell = WorkerCell::holding(Component::A);
        cell.get().unwrap();
        assert_eq!(cell.put(Component::C), Err(CellError::Busy));
        assert_eq!(cell.peek(), None);
    }

    #[test]
    fn put_into_full_cell_fails_without_mutation() {
        let mut cell = WorkerCell::holding(Component::A);
        assert_eq!(cell.put(Component::B), Err(CellError::Full));
        assert_eq!(cell.peek(), Some(Component::A));
        assert!(!cell.is_busy());
    }

    #[test]
    fn refresh_allows_another_access() {
        let mut cell = WorkerCell::holding(Component::A);
        cell.get().unwrap();
        cell.refresh();
        assert!(!cell.is_busy());
        cell.put(Component::C).unwrap();
        assert_eq!(cell.peek(), Some(Component::C));
    }

    #[test]
    fn receiving_nothing_is_not_a_put() {
        let mut cell = WorkerCell::holding(Component::B);
        assert_eq!(cell.receive(None), Ok(()));
        assert_eq!(cell.peek(), Some(Component::B));
        assert!(!cell.is_busy());
    }
}

#[cfg(test)]
mod boundary_tests {
    use fab_core::{Component, SimRng};

    use crate::{Cell, CellError, ComponentStream, RandomSource, ScriptedStream, TallySink, UniformStream};

    #[test]
    fn source_tallies_every_draw() {
        let mut src = RandomSource::new(ScriptedStream::new([
            Some(Component::A),
            None,
            Some(Component::A),
        ]));
        for _ in 0..3 {
            src.get().unwrap();
        }
        assert_eq!(src.tally().get(Some(Component::A)), 2);
        assert_eq!(src.tally().empty(), 1);
        assert_eq!(src.peek(), None);
    }

    #[test]
    fn source_rejects_put() {
        let mut src = RandomSource::new(ScriptedStream::default());
        assert_eq!(src.put(Component::A), Err(CellError::Unsupported("source")));
    }

    #[test]
    fn scripted_stream_runs_dry_into_empties() {
        let mut s = ScriptedStream::new([Some(Component::B)]);
        assert_eq!(s.next_draw(), Some(Component::B));
        assert_eq!(s.remaining(), 0);
        assert_eq!(s.next_draw(), None);
        assert_eq!(s.next_draw(), None);
    }

    #[test]
    fn uniform_stream_never_emits_c() {
        let mut s = UniformStream::new(SimRng::new(11));
        for _ in 0..1_000 {
            assert_ne!(s.next_draw(), Some(Component::C));
        }
    }

    #[test]
    fn uniform_stream_emits_all_three_outcomes() {
        let mut s = UniformStream::new(SimRng::new(3));
        let draws: Vec<_> = (0..300).map(|_| s.next_draw()).collect();
        assert!(draws.contains(&Some(Component::A)));
        assert!(draws.contains(&Some(Component::B)));
        assert!(draws.contains(&None));
    }

    #[test]
    fn uniform_stream_is_reproducible() {
        let mut a = UniformStream::seeded(Some(99));
        let mut b = UniformStream::seeded(Some(99));
        let xs: Vec<_> = (0..64).map(|_| a.next_draw()).collect();
        let ys: Vec<_> = (0..64).map(|_| b.next_draw()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn sink_counts_arrivals_including_empties() {
        let mut sink = TallySink::new();
        sink.receive(Some(Component::C)).unwrap();
        sink.receive(None).unwrap();
        sink.put(Component::A).unwrap();
        sink.put(Component::A).unwrap();
        assert_eq!(sink.tally().get(Some(Component::C)), 1);
        assert_eq!(sink.tally().get(Some(Component::A)), 2);
        assert_eq!(sink.tally().empty(), 1);
        assert_eq!(sink.get(), Ok(None));
    }
}

#[cfg(test)]
mod belt_tests {
    use fab_core::{CellId, Component};

    use crate::{Belt, Cell, RandomSource, ScriptedStream};

    use Component::{A, B, C};

    fn belt(draws: Vec<Option<Component>>, len: usize) -> Belt<ScriptedStream> {
        Belt::new(RandomSource::new(ScriptedStream::new(draws)), len)
    }

    #[test]
    fn positions_include_boundaries() {
        let b = belt(vec![], 3);
        assert_eq!(b.positions(), 5);
        assert_eq!(b.cells().len(), 3);
    }

    #[test]
    fn components_move_one_position_per_tick() {
        let mut b = belt(vec![Some(A), Some(B)], 3);
        b.tick().unwrap();
        assert_eq!(b.occupancy(), vec![Some(A), None, None]);
        b.tick().unwrap();
        assert_eq!(b.occupancy(), vec![Some(B), Some(A), None]);
        b.tick().unwrap();
        assert_eq!(b.occupancy(), vec![None, Some(B), Some(A)]);
    }

    #[test]
    fn last_cell_falls_into_sink() {
        let mut b = belt(vec![Some(A), Some(B)], 2);
        for _ in 0..4 {
            b.tick().unwrap();
        }
        assert_eq!(b.occupancy(), vec![None, None]);
        assert_eq!(b.sink().tally().get(Some(A)), 1);
        assert_eq!(b.sink().tally().get(Some(B)), 1);
        // Ticks 1 and 2 delivered the empty initial contents of the last cell.
        assert_eq!(b.sink().tally().empty(), 2);
    }

    #[test]
    fn cells_are_idle_after_a_tick() {
        let mut b = belt(vec![Some(A)], 2);
        b.tick().unwrap();
        assert!(b.cells().iter().all(|c| !c.is_busy()));
    }

    #[test]
    fn shift_overwrites_nothing_even_when_every_cell_is_full() {
        let mut b = belt(vec![Some(A)], 2);
        *b.cell_mut(CellId(0)) = crate::WorkerCell::holding(C);
        *b.cell_mut(CellId(1)) = crate::WorkerCell::holding(B);
        b.tick().unwrap();
        assert_eq!(b.occupancy(), vec![Some(A), Some(C)]);
        assert_eq!(b.sink().tally().get(Some(B)), 1);
    }

    #[test]
    fn source_is_drawn_once_per_tick() {
        let mut b = belt(vec![Some(A), Some(B), None], 2);
        for _ in 0..5 {
            b.tick().unwrap();
        }
        assert_eq!(b.source().tally().total(), 5);
        assert_eq!(b.source().stream().remaining(), 0);
    }
}
