//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the crr library.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, TimeZone, Utc};
use crr::{Reservation, RoomRegistry, Store};

/// Rooms used by most tests, deliberately out of order.
#[allow(dead_code)]
pub const ROOMS: [&str; 4] = ["Lounge", "Atrium", "Library", "Boardroom"];

/// Returns 2024-01-01 (a Monday) at `hour:min` UTC, shifted by `day` days.
#[allow(dead_code)]
pub fn at(day: i64, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, min, 0).unwrap() + Duration::days(day)
}

/// Builds the registry of [`ROOMS`].
#[allow(dead_code)]
pub fn registry() -> RoomRegistry {
    RoomRegistry::from_names(ROOMS).unwrap()
}

/// Writes a rooms file in `dir` and returns its path.
#[allow(dead_code)]
pub fn write_rooms_file(dir: &Path, names: &[&str]) -> PathBuf {
    let path = dir.join("rooms.dat");
    fs::write(&path, names.join("\n")).unwrap();
    path
}

/// Builder for creating test reservations with sensible defaults.
///
/// Defaults to a one hour booking of the Lounge on day 0 at 09:00 with an
/// empty description.
#[allow(dead_code)]
pub struct ReservationFixture {
    room: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    description: String,
}

#[allow(dead_code)]
impl ReservationFixture {
    pub fn new() -> Self {
        Self {
            room: "Lounge".to_string(),
            start: at(0, 9, 0),
            end: at(0, 10, 0),
            description: String::new(),
        }
    }

    pub fn room(mut self, room: &str) -> Self {
        self.room = room.to_string();
        self
    }

    /// Sets both ends of the interval.
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn build(self) -> Reservation {
        Reservation::builder(self.room, self.start, self.end)
            .description(self.description)
            .build()
            .unwrap()
    }
}

impl Default for ReservationFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a store holding a week of non-overlapping bookings.
///
/// Every room gets a two hour morning slot and a one hour evening slot on
/// each of seven days, which gives 56 reservations.
#[allow(dead_code)]
pub fn week_store() -> Store {
    let mut store = Store::new();
    for day in 0..7 {
        for (i, room) in ROOMS.iter().enumerate() {
            let morning = ReservationFixture::new()
                .room(room)
                .between(at(day, 8, 0), at(day, 10, 0))
                .description(&format!("{room} standup {day}"))
                .build();
            let evening = ReservationFixture::new()
                .room(room)
                .between(at(day, 17 + i as u32, 0), at(day, 18 + i as u32, 0))
                .description(&format!("{room} evening {day}"))
                .build();
            assert!(store.add(morning).unwrap().is_none());
            assert!(store.add(evening).unwrap().is_none());
        }
    }
    store
}
