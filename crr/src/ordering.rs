//! Orders and search predicates over reservations.
//!
//! Every comparison on room names is ASCII case-insensitive, so that
//! `"Room A"` and `"room a"` sort together and name the same room. Each
//! search predicate is paired with the order it is monotonic in:
//!
//! | predicate             | order           | strategy                     |
//! |-----------------------|-----------------|------------------------------|
//! | [`conflict_order`]    | [`SortOrder::RoomStart`] | binary search        |
//! | [`room_order`]        | [`SortOrder::RoomStart`] | binary search bounds |
//! | [`started_by`]        | [`SortOrder::StartRoom`] | binary search bound, then scan |
//! | [`same_weekday`]      | any             | linear scan                  |
//! | [`description_matches`] | any           | linear scan                  |

use std::cmp::Ordering;

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::Reservation;

/// The total orders the store can be arranged in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Room name first, then start instant.
    RoomStart,
    /// Start instant first, then room name.
    StartRoom,
}

impl SortOrder {
    /// Returns the comparator implementing this order.
    #[must_use]
    pub fn comparator(self) -> fn(&Reservation, &Reservation) -> Ordering {
        match self {
            Self::RoomStart => by_room_then_start,
            Self::StartRoom => by_start_then_room,
        }
    }
}

/// Compares two room names ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use crr::ordering::cmp_room_names;
///
/// assert_eq!(cmp_room_names("Room A", "room a"), Ordering::Equal);
/// assert_eq!(cmp_room_names("room a", "Room B"), Ordering::Less);
/// ```
#[must_use]
pub fn cmp_room_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Orders by room name, then by start instant.
#[must_use]
pub fn by_room_then_start(a: &Reservation, b: &Reservation) -> Ordering {
    cmp_room_names(a.room(), b.room()).then_with(|| a.start().cmp(&b.start()))
}

/// Orders by start instant, then by room name.
#[must_use]
pub fn by_start_then_room(a: &Reservation, b: &Reservation) -> Ordering {
    a.start()
        .cmp(&b.start())
        .then_with(|| cmp_room_names(a.room(), b.room()))
}

/// Checks whether `candidate` and `stored` book the same room over
/// overlapping intervals.
///
/// Intervals that only touch (`a.end == b.start`) do not conflict.
#[must_use]
pub fn conflicts(candidate: &Reservation, stored: &Reservation) -> bool {
    conflict_order(stored, candidate) == Ordering::Equal
}

/// Locates `stored` relative to the conflict window of `candidate`.
///
/// Returns `Less` when `stored` sorts entirely before the window, `Greater`
/// when entirely after, and `Equal` when the two conflict. On a slice sorted
/// by [`SortOrder::RoomStart`] whose same-room intervals do not overlap, the
/// results form a `Less* Equal* Greater*` sequence, so this is suitable for
/// `binary_search_by` and `partition_point`.
#[must_use]
pub fn conflict_order(stored: &Reservation, candidate: &Reservation) -> Ordering {
    match cmp_room_names(stored.room(), candidate.room()) {
        Ordering::Equal if stored.end() <= candidate.start() => Ordering::Less,
        Ordering::Equal if stored.start() >= candidate.end() => Ordering::Greater,
        other => other,
    }
}

/// Locates `stored` relative to `room` in [`SortOrder::RoomStart`] order.
#[must_use]
pub fn room_order(stored: &Reservation, room: &str) -> Ordering {
    cmp_room_names(stored.room(), room)
}

/// Checks whether `stored` started at or before `instant`.
///
/// In [`SortOrder::StartRoom`] order this holds for a prefix of the slice.
#[must_use]
pub fn started_by(stored: &Reservation, instant: DateTime<Utc>) -> bool {
    stored.start() <= instant
}

/// Checks whether `stored` starts on the same weekday as `instant`, with
/// both converted to `tz`.
#[must_use]
pub fn same_weekday<Tz: TimeZone>(stored: &Reservation, instant: DateTime<Utc>, tz: &Tz) -> bool {
    stored.start().with_timezone(tz).weekday() == instant.with_timezone(tz).weekday()
}

/// Checks whether the description of `stored` contains `needle`, ignoring
/// case. `needle` must already be lowercased.
#[must_use]
pub fn description_matches(stored: &Reservation, needle: &str) -> bool {
    stored.description().to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, min, 0).unwrap()
    }

    fn res(room: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Reservation {
        Reservation::new(room, start, end, "").unwrap()
    }

    #[test]
    fn test_cmp_room_names_ignores_case() {
        assert_eq!(cmp_room_names("ROOM A", "room a"), Ordering::Equal);
        assert_eq!(cmp_room_names("Room A", "Room B"), Ordering::Less);
        assert_eq!(cmp_room_names("room b", "Room A"), Ordering::Greater);
        assert_eq!(cmp_room_names("Room", "Room A"), Ordering::Less);
    }

    #[test]
    fn test_by_room_then_start() {
        let a = res("Room A", at(2, 10, 0), at(2, 11, 0));
        let b = res("room a", at(1, 10, 0), at(1, 11, 0));
        let c = res("Room B", at(1, 9, 0), at(1, 10, 0));

        let mut all = vec![c.clone(), a.clone(), b.clone()];
        all.sort_by(by_room_then_start);
        assert_eq!(all, vec![b, a, c]);
    }

    #[test]
    fn test_by_start_then_room() {
        let a = res("Room B", at(1, 10, 0), at(1, 11, 0));
        let b = res("room a", at(1, 10, 0), at(1, 12, 0));
        let c = res("Room A", at(1, 9, 0), at(1, 10, 0));

        let mut all = vec![a.clone(), b.clone(), c.clone()];
        all.sort_by(by_start_then_room);
        assert_eq!(all, vec![c, b, a]);
    }

    #[test]
    fn test_sort_order_comparator() {
        let a = res("Room B", at(1, 9, 0), at(1, 10, 0));
        let b = res("Room A", at(1, 10, 0), at(1, 11, 0));
        assert_eq!(SortOrder::RoomStart.comparator()(&a, &b), Ordering::Greater);
        assert_eq!(SortOrder::StartRoom.comparator()(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_conflict_overlap() {
        let stored = res("Room A", at(1, 18, 0), at(1, 19, 0));
        let candidate = res("room a", at(1, 18, 30), at(1, 19, 30));
        assert!(conflicts(&candidate, &stored));
        assert!(conflicts(&stored, &candidate));
    }

    #[test]
    fn test_conflict_containment() {
        let stored = res("Room A", at(1, 18, 0), at(1, 19, 0));
        let inner = res("Room A", at(1, 18, 15), at(1, 18, 45));
        let outer = res("Room A", at(1, 17, 0), at(1, 20, 0));
        assert!(conflicts(&inner, &stored));
        assert!(conflicts(&outer, &stored));
    }

    #[test]
    fn test_edge_touching_is_not_a_conflict() {
        let stored = res("Room A", at(1, 18, 0), at(1, 19, 0));
        let after = res("Room A", at(1, 19, 0), at(1, 20, 0));
        let before = res("Room A", at(1, 17, 0), at(1, 18, 0));
        assert!(!conflicts(&after, &stored));
        assert!(!conflicts(&before, &stored));
        assert_eq!(conflict_order(&stored, &after), Ordering::Less);
        assert_eq!(conflict_order(&stored, &before), Ordering::Greater);
    }

    #[test]
    fn test_different_rooms_never_conflict() {
        let stored = res("Room A", at(1, 18, 0), at(1, 19, 0));
        let candidate = res("Room B", at(1, 18, 0), at(1, 19, 0));
        assert!(!conflicts(&candidate, &stored));
        assert_eq!(conflict_order(&stored, &candidate), Ordering::Less);
    }

    #[test]
    fn test_room_order() {
        let stored = res("Room B", at(1, 18, 0), at(1, 19, 0));
        assert_eq!(room_order(&stored, "room b"), Ordering::Equal);
        assert_eq!(room_order(&stored, "Room A"), Ordering::Greater);
        assert_eq!(room_order(&stored, "Room C"), Ordering::Less);
    }

    #[test]
    fn test_started_by() {
        let stored = res("Room A", at(1, 18, 0), at(1, 19, 0));
        assert!(started_by(&stored, at(1, 18, 0)));
        assert!(started_by(&stored, at(1, 20, 0)));
        assert!(!started_by(&stored, at(1, 17, 59)));
    }

    #[test]
    fn test_same_weekday_in_utc() {
        // 2024-01-01 is a Monday
        let monday = res("Room A", at(1, 18, 0), at(1, 19, 0));
        assert!(same_weekday(&monday, at(8, 3, 0), &Utc));
        assert!(!same_weekday(&monday, at(2, 18, 0), &Utc));
    }

    #[test]
    fn test_same_weekday_respects_time_zone() {
        // 23:30 UTC on Monday is already Tuesday at UTC+2
        let late = res("Room A", at(1, 23, 30), at(2, 0, 30));
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        assert!(same_weekday(&late, at(2, 12, 0), &plus_two));
        assert!(!same_weekday(&late, at(2, 12, 0), &Utc));
    }

    #[test]
    fn test_description_matches() {
        let stored = Reservation::new("Room A", at(1, 18, 0), at(1, 19, 0), "Birthday party")
            .unwrap();
        assert!(description_matches(&stored, "birthday"));
        assert!(description_matches(&stored, "y p"));
        assert!(description_matches(&stored, ""));
        assert!(!description_matches(&stored, "study"));
    }
}
