//! Property-based tests for `Reservation` and its builder.

use super::{Reservation, MAX_DESCRIPTION_LEN, MAX_ROOM_NAME_LEN};
use crate::store::codec;
use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// Strategy for instants within a few years of 2024
fn instant_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..100_000_000).prop_map(|secs| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
    })
}

fn room_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ]{0,46}[A-Za-z0-9]"
}

fn description_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.'!]{0,128}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Any in-bounds field combination with end after start builds
    #[test]
    fn builder_accepts_valid_fields(
        room in room_strategy(),
        start in instant_strategy(),
        len in 1i64..1_000_000,
        desc in description_strategy()
    ) {
        let end = start + Duration::seconds(len);
        let reservation = Reservation::builder(room.clone(), start, end)
            .description(desc.clone())
            .build()
            .unwrap();

        prop_assert_eq!(reservation.room(), room.as_str());
        prop_assert_eq!(reservation.description(), desc.as_str());
        prop_assert_eq!(reservation.start(), start);
        prop_assert_eq!(reservation.end(), end);
    }

    // End at or before start is always rejected
    #[test]
    fn builder_rejects_empty_or_reversed_interval(
        room in room_strategy(),
        start in instant_strategy(),
        back in 0i64..1_000_000
    ) {
        let end = start - Duration::seconds(back);
        prop_assert!(Reservation::builder(room, start, end).build().is_err());
    }

    // Text longer than its persisted field is rejected
    #[test]
    fn builder_rejects_oversized_text(
        extra in 1usize..64,
        start in instant_strategy()
    ) {
        let end = start + Duration::hours(1);
        let room = "r".repeat(MAX_ROOM_NAME_LEN + extra);
        prop_assert!(Reservation::builder(room, start, end).build().is_err());

        let desc = "d".repeat(MAX_DESCRIPTION_LEN + extra);
        let result = Reservation::builder("Room A", start, end).description(desc).build();
        prop_assert!(result.is_err());
    }

    // Containment is half-open: start is inside, end is outside
    #[test]
    fn contains_is_half_open(
        start in instant_strategy(),
        len in 1i64..1_000_000,
        probe in 0i64..2_000_000
    ) {
        let end = start + Duration::seconds(len);
        let reservation = Reservation::new("Room A", start, end, "").unwrap();
        let instant = start + Duration::seconds(probe);

        prop_assert!(reservation.contains(start));
        prop_assert!(!reservation.contains(end));
        prop_assert_eq!(reservation.contains(instant), probe < len);
        prop_assert_eq!(reservation.has_ended(instant), probe >= len);
    }

    // Room matching ignores ASCII case in both directions
    #[test]
    fn is_for_room_ignores_case(room in room_strategy(), start in instant_strategy()) {
        let reservation = Reservation::new(room.clone(), start, start + Duration::hours(1), "")
            .unwrap();
        prop_assert!(reservation.is_for_room(&room.to_ascii_uppercase()));
        prop_assert!(reservation.is_for_room(&room.to_ascii_lowercase()));
    }

    // Equal reservations hash equally
    #[test]
    fn hash_is_consistent_with_eq(
        room in room_strategy(),
        start in instant_strategy(),
        desc in description_strategy()
    ) {
        let end = start + Duration::minutes(30);
        let a = Reservation::new(room.clone(), start, end, desc.clone()).unwrap();
        let b = Reservation::new(room, start, end, desc).unwrap();

        let mut ha = DefaultHasher::new();
        a.hash(&mut ha);
        let mut hb = DefaultHasher::new();
        b.hash(&mut hb);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(ha.finish(), hb.finish());
    }

    // Every valid reservation survives the persisted record layout
    #[test]
    fn record_layout_preserves_fields(
        room in room_strategy(),
        start in instant_strategy(),
        len in 1i64..1_000_000,
        desc in description_strategy()
    ) {
        let end = start + Duration::seconds(len);
        let reservation = Reservation::new(room, start, end, desc).unwrap();
        let decoded = codec::decode(&codec::encode(&reservation)).unwrap();
        prop_assert_eq!(decoded, reservation);
    }
}
