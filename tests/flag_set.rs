use proptest::prelude::*;
use tinyflagset::{FlagSet, FlagSetError};

#[test]
fn index_equal_to_capacity_is_rejected() {
    // The valid range is 0..capacity; capacity itself is out of range.
    let mut set: FlagSet = FlagSet::new(3).unwrap();
    let expected = FlagSetError::IndexOutOfRange {
        index: 3,
        capacity: 3,
    };

    assert_eq!(set.get(3), Err(expected));
    assert_eq!(set.set(3, true), Err(expected));
    assert!(set.all_false());
}

#[test]
fn index_above_capacity_is_rejected() {
    let mut set: FlagSet = FlagSet::with_options(3, false, true).unwrap();
    assert!(matches!(
        set.get(10),
        Err(FlagSetError::IndexOutOfRange { index: 10, .. })
    ));
    assert!(set.set(10, false).is_err());
}

#[test]
fn last_index_is_valid() {
    let mut set: FlagSet = FlagSet::new(3).unwrap();
    set.set(2, true).unwrap();
    assert!(set.get(2).unwrap());
}

#[test]
fn zero_capacity_is_rejected() {
    let result: Result<FlagSet, _> = FlagSet::new(0);
    assert_eq!(
        result,
        Err(FlagSetError::InvalidCapacity {
            capacity: 0,
            max: 64
        })
    );
}

#[test]
fn capacity_is_bounded_by_word() {
    assert!(FlagSet::<u8>::new(8).is_ok());
    assert!(FlagSet::<u8>::new(9).is_err());
    assert!(FlagSet::<u128>::new(128).is_ok());
    assert!(FlagSet::<u128>::new(129).is_err());
}

#[test]
fn worker_round() {
    let mut finished: FlagSet = FlagSet::new(3).unwrap();

    finished.set(0, true).unwrap();
    assert!(finished.get(0).unwrap());
    assert!(!finished.get(1).unwrap());
    assert!(!finished.all_true());
    assert!(!finished.all_false());

    finished.set(1, true).unwrap();
    finished.set(2, true).unwrap();
    assert!(finished.all_true());
}

#[test]
fn latched_worker_round() {
    let mut finished: FlagSet = FlagSet::with_options(2, false, true).unwrap();

    finished.set(0, true).unwrap();
    assert!(finished.get(0).unwrap());
    finished.set(0, false).unwrap();
    assert!(finished.get(0).unwrap());

    finished.set(1, false).unwrap();
    assert!(!finished.get(1).unwrap());
    finished.set(1, true).unwrap();
    assert!(!finished.get(1).unwrap());
}

#[test]
fn error_messages() {
    let mut set: FlagSet<u8> = FlagSet::new(2).unwrap();
    let err = set.set(5, true).unwrap_err();
    assert_eq!(
        err.to_string(),
        "flag index 5 is out of range for a set of 2 flags"
    );

    let err = FlagSet::<u8>::new(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "a flag set must hold between 1 and 8 flags, got 0"
    );
}

proptest! {
    #[test]
    fn fresh_set_is_all_false(capacity in 1usize..=64) {
        let set: FlagSet = FlagSet::new(capacity).unwrap();
        prop_assert!(set.all_false());
        prop_assert!(!set.all_true());
    }

    #[test]
    fn initially_true_set_is_all_true(capacity in 1usize..=64, latching in any::<bool>()) {
        let set: FlagSet = FlagSet::with_options(capacity, true, latching).unwrap();
        prop_assert!(set.all_true());
        prop_assert_eq!(set.all_false(), false);
    }

    #[test]
    fn writing_every_flag_drives_aggregates(capacity in 1usize..=64, initial in any::<bool>()) {
        let mut set: FlagSet = FlagSet::with_initial(capacity, initial).unwrap();

        for index in 0..capacity {
            set.set(index, true).unwrap();
        }
        prop_assert!(set.all_true());

        for index in 0..capacity {
            set.set(index, false).unwrap();
        }
        prop_assert!(set.all_false());
    }

    #[test]
    fn single_flag_breaks_both_aggregates(capacity in 2usize..=64, pick in any::<prop::sample::Index>()) {
        let mut set: FlagSet = FlagSet::new(capacity).unwrap();
        set.set(pick.index(capacity), true).unwrap();
        prop_assert!(!set.all_true());
        prop_assert!(!set.all_false());
    }

    #[test]
    fn first_write_wins_when_latching(
        capacity in 1usize..=32,
        pick in any::<prop::sample::Index>(),
        first in any::<bool>(),
        later in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let index = pick.index(capacity);
        let mut set: FlagSet<u32> = FlagSet::with_options(capacity, !first, true).unwrap();

        set.set(index, first).unwrap();
        for value in later {
            set.set(index, value).unwrap();
        }

        prop_assert_eq!(set.get(index).unwrap(), first);
        prop_assert!(set.is_latched(index).unwrap());
    }

    #[test]
    fn last_write_wins_without_latching(
        capacity in 1usize..=32,
        pick in any::<prop::sample::Index>(),
        writes in prop::collection::vec(any::<bool>(), 1..8),
    ) {
        let index = pick.index(capacity);
        let mut set: FlagSet<u32> = FlagSet::new(capacity).unwrap();

        for value in &writes {
            set.set(index, *value).unwrap();
        }

        prop_assert_eq!(set.get(index).unwrap(), writes[writes.len() - 1]);
    }

    #[test]
    fn out_of_range_index_never_changes_state(capacity in 1usize..=64, excess in 0usize..16) {
        let mut set: FlagSet = FlagSet::with_options(capacity, false, true).unwrap();
        let index = capacity + excess;

        prop_assert_eq!(
            set.set(index, true),
            Err(FlagSetError::IndexOutOfRange { index, capacity })
        );
        prop_assert!(set.get(index).is_err());
        prop_assert!(set.all_false());
    }
}
