//! Property-based tests for `Store` mutations.

use super::Store;
use crate::ordering::conflicts;
use crate::Reservation;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

const ROOMS: [&str; 4] = ["Room A", "room a", "Room B", "Lounge"];

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

// Reservations on a small grid of quarter hours so that overlaps are common
fn reservation_strategy() -> impl Strategy<Value = Reservation> {
    (0..ROOMS.len(), 0i64..96, 1i64..12).prop_map(|(room, slot, len)| {
        let start = base() + Duration::minutes(15 * slot);
        let end = start + Duration::minutes(15 * len);
        Reservation::new(ROOMS[room], start, end, "").unwrap()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Add(Reservation),
    Update(usize, Reservation),
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => reservation_strategy().prop_map(Op::Add),
        1 => (0usize..20, reservation_strategy()).prop_map(|(i, r)| Op::Update(i, r)),
        1 => (0usize..20).prop_map(Op::Delete),
    ]
}

fn assert_no_overlaps(store: &Store) -> Result<(), TestCaseError> {
    let all = store.as_slice();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            prop_assert!(!conflicts(a, b), "{:?} overlaps {:?}", a, b);
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // No sequence of operations can leave two overlapping reservations
    #[test]
    fn store_never_holds_overlaps(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut store = Store::new();
        for op in ops {
            match op {
                Op::Add(r) => {
                    let before = store.count();
                    match store.add(r.clone()).unwrap() {
                        Some(conflict) => {
                            prop_assert!(conflicts(&r, &conflict));
                            prop_assert_eq!(store.count(), before);
                        }
                        None => prop_assert_eq!(store.count(), before + 1),
                    }
                }
                Op::Update(i, r) => {
                    let before = store.count();
                    match store.update(i, r.clone()) {
                        Ok(Some(conflict)) => prop_assert!(conflicts(&r, &conflict)),
                        Ok(None) => prop_assert!(store.iter().any(|stored| stored == &r)),
                        Err(_) => prop_assert!(i >= before),
                    }
                    prop_assert_eq!(store.count(), before);
                }
                Op::Delete(i) => {
                    let before = store.count();
                    let result = store.delete(i);
                    prop_assert_eq!(result.is_ok(), i < before);
                }
            }
            assert_no_overlaps(&store)?;
        }
    }

    // Add reports a conflict exactly when some stored reservation overlaps
    #[test]
    fn add_conflict_matches_brute_force(
        existing in prop::collection::vec(reservation_strategy(), 0..30),
        candidate in reservation_strategy()
    ) {
        let mut store = Store::new();
        for r in existing {
            store.add(r).unwrap();
        }
        let expected = store.iter().any(|stored| conflicts(&candidate, stored));
        let outcome = store.add(candidate).unwrap();
        prop_assert_eq!(outcome.is_some(), expected);
    }

    // Delete shifts every later position down by one
    #[test]
    fn delete_preserves_relative_order(
        existing in prop::collection::vec(reservation_strategy(), 1..30),
        pick in any::<prop::sample::Index>()
    ) {
        let mut store = Store::new();
        for r in existing {
            store.add(r).unwrap();
        }
        let before: Vec<Reservation> = store.iter().cloned().collect();
        let index = pick.index(before.len());

        store.delete(index).unwrap();
        let mut expected = before;
        expected.remove(index);
        prop_assert_eq!(store.as_slice(), expected.as_slice());
    }
}
