//! Integration tests for reservation bookkeeping through the public API.

mod common;

use common::{at, week_store, ReservationFixture, ROOMS};
use crr::ordering::conflicts;
use crr::{Error, SortOrder, Store};

#[test]
fn test_overlapping_booking_is_refused() {
    let mut store = Store::new();
    let first = ReservationFixture::new()
        .room("Atrium")
        .between(at(0, 18, 0), at(0, 19, 0))
        .description("first")
        .build();
    let second = ReservationFixture::new()
        .room("Atrium")
        .between(at(0, 18, 30), at(0, 19, 30))
        .description("second")
        .build();

    assert_eq!(store.add(first.clone()).unwrap(), None);
    assert_eq!(store.add(second).unwrap(), Some(first));
    assert_eq!(store.count(), 1);
}

#[test]
fn test_conflict_detection_is_symmetric() {
    let long = ReservationFixture::new()
        .between(at(0, 8, 0), at(0, 12, 0))
        .build();
    let short = ReservationFixture::new()
        .between(at(0, 9, 0), at(0, 10, 0))
        .build();

    let mut a = Store::new();
    a.add(long.clone()).unwrap();
    assert_eq!(a.add(short.clone()).unwrap(), Some(long.clone()));

    let mut b = Store::new();
    b.add(short.clone()).unwrap();
    assert_eq!(b.add(long).unwrap(), Some(short));
}

#[test]
fn test_week_store_has_no_overlaps() {
    let store = week_store();
    assert_eq!(store.count(), 7 * ROOMS.len() * 2);

    let all = store.as_slice();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(!conflicts(a, b));
        }
    }
}

#[test]
fn test_add_into_full_week_finds_right_conflict() {
    let mut store = week_store();
    let clash = ReservationFixture::new()
        .room("library")
        .between(at(3, 9, 30), at(3, 11, 0))
        .build();

    let conflict = store.add(clash).unwrap().unwrap();
    assert_eq!(conflict.room(), "Library");
    assert_eq!(conflict.start(), at(3, 8, 0));
    assert_eq!(conflict.description(), "Library standup 3");
}

#[test]
fn test_fill_gap_exactly() {
    let mut store = week_store();
    // Between the 10:00 end of the standup and the first evening slot
    let lunch = ReservationFixture::new()
        .room("Atrium")
        .between(at(2, 10, 0), at(2, 17, 0))
        .build();
    assert_eq!(store.add(lunch).unwrap(), None);
}

#[test]
fn test_positions_follow_current_order() {
    let mut store = week_store();
    store.sort(SortOrder::StartRoom);
    let first = store.get(0).unwrap().clone();
    assert_eq!(first.start(), at(0, 8, 0));
    assert_eq!(first.room(), "Atrium");

    store.sort(SortOrder::RoomStart);
    let last = store.get(store.count() - 1).unwrap();
    assert_eq!(last.room(), "Lounge");
    assert_eq!(last.start().date_naive(), at(6, 0, 0).date_naive());
}

#[test]
fn test_update_then_delete() {
    let mut store = week_store();
    let count = store.count();

    store.sort(SortOrder::RoomStart);
    let original = store.get(0).unwrap().clone();
    let moved = ReservationFixture::new()
        .room(original.room())
        .between(at(0, 6, 0), at(0, 7, 0))
        .description("moved earlier")
        .build();
    assert_eq!(store.update(0, moved.clone()).unwrap(), None);
    assert_eq!(store.count(), count);

    let position = store.iter().position(|r| r == &moved).unwrap();
    assert_eq!(store.delete(position).unwrap(), moved);
    assert_eq!(store.count(), count - 1);
    assert!(!store.iter().any(|r| r == &original));
}

#[test]
fn test_out_of_range_positions_are_fatal() {
    let mut store = week_store();
    let count = store.count();

    let err = store.delete(count).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, Error::IndexOutOfRange { index, count: c } if index == count && c == count));

    let candidate = ReservationFixture::new().build();
    assert!(store.update(count + 5, candidate).is_err());
    assert!(store.get(usize::MAX).is_err());
}
