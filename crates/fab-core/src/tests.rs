//! Unit tests for fab-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CellId, WorkerId};

    #[test]
    fn index_roundtrip() {
        let id = WorkerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(WorkerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        #[cfg(target_pointer_width = "64")]
        assert!(CellId::try_from(u32::MAX as usize + 1).is_err());
        assert_eq!(CellId::try_from(u32::MAX as usize).unwrap(), CellId(u32::MAX));
    }

    #[test]
    fn ordering_follows_construction() {
        assert!(WorkerId(0) < WorkerId(1));
        assert!(CellId(3) > CellId(2));
    }

    #[test]
    fn display() {
        assert_eq!(CellId(7).to_string(), "CellId(7)");
    }
}

#[cfg(test)]
mod component {
    use crate::Component;

    #[test]
    fn product_weighs_two_units() {
        assert_eq!(Component::A.units(), 1);
        assert_eq!(Component::B.units(), 1);
        assert_eq!(Component::C.units(), 2);
        assert_eq!(Component::units_of(None), 0);
    }

    #[test]
    fn display_is_tag() {
        assert_eq!(Component::C.to_string(), "C");
    }
}

#[cfg(test)]
mod tally {
    use crate::{Component, Tally};

    #[test]
    fn counts_empties_separately() {
        let mut t = Tally::new();
        t.record(Some(Component::A));
        t.record(None);
        t.record(None);
        assert_eq!(t.get(Some(Component::A)), 1);
        assert_eq!(t.empty(), 2);
        assert_eq!(t.total(), 3);
        assert_eq!(t.units(), 1);
    }

    #[test]
    fn units_weight_c_double() {
        let t: Tally = [Some(Component::C), Some(Component::B), None]
            .into_iter()
            .collect();
        assert_eq!(t.units(), 3);
    }

    #[test]
    fn merge_adds_counts() {
        let mut a: Tally = [Some(Component::A)].into_iter().collect();
        let mut b = Tally::new();
        for _ in 0..4 {
            b.record(Some(Component::A));
        }
        b.record(Some(Component::C));
        a.merge(&b);
        assert_eq!(a.get(Some(Component::A)), 5);
        assert_eq!(a.get(Some(Component::C)), 1);
    }

    #[test]
    fn display() {
        let t: Tally = [Some(Component::B), None].into_iter().collect();
        assert_eq!(t.to_string(), "{A: 0, B: 1, C: 0, empty: 1}");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_advances_by_one() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(10).next(), Tick(11));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let choices: Vec<u32> = (0..1000).collect();
        let xs: Vec<u32> = (0..32).map(|_| *a.choose(&choices).unwrap()).collect();
        let ys: Vec<u32> = (0..32).map(|_| *b.choose(&choices).unwrap()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn choose_stays_in_slice() {
        let mut rng = SimRng::new(1);
        let choices = [1, 2, 3];
        for _ in 0..100 {
            assert!(choices.contains(rng.choose(&choices).unwrap()));
        }
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn defaults_are_valid() {
        let c = SimConfig::default();
        assert_eq!(c.total_ticks, 100);
        assert_eq!(c.belt_length, 3);
        assert_eq!(c.workers_per_cell, 2);
        assert!(c.validate().is_ok());
        assert_eq!(c.worker_count(), 6);
    }

    #[test]
    fn rejects_zero_ticks() {
        assert!(SimConfig::new(0, 3, 1).validate().is_err());
    }

    #[test]
    fn rejects_short_belt() {
        assert!(SimConfig::new(10, 1, 1).validate().is_err());
        assert!(SimConfig::new(10, 2, 1).validate().is_ok());
    }

    #[test]
    fn rejects_zero_workers() {
        assert!(SimConfig::new(10, 3, 0).validate().is_err());
    }

    #[test]
    fn rejects_overflowing_worker_count() {
        assert!(SimConfig::new(10, usize::MAX, 2).validate().is_err());
    }

    #[test]
    fn with_seed_sets_seed() {
        assert_eq!(SimConfig::new(1, 2, 1).with_seed(5).seed, Some(5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let c: SimConfig = serde_json::from_str(r#"{"belt_length": 5, "seed": 3}"#).unwrap();
        assert_eq!(c.belt_length, 5);
        assert_eq!(c.seed, Some(3));
        assert_eq!(c.total_ticks, 100);
    }
}
