//! Read-only queries over the store.
//!
//! Each query first arranges the store in the order its search relies on and
//! then returns positions in that order. The positions are valid until the
//! next call that may re-sort or mutate the store, so look them up with
//! [`Store::get`] straight away.

use std::cmp::Ordering;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::ordering::{description_matches, room_order, same_weekday, started_by, SortOrder};
use crate::registry::RoomRegistry;
use crate::store::Store;

/// The rooms free at some instant, as registry positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableRooms {
    positions: Vec<usize>,
    unrestricted: bool,
}

impl AvailableRooms {
    /// Returns the registry positions of the free rooms, ascending.
    #[must_use]
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Returns the number of free rooms.
    #[must_use]
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Returns true when no reservation covered the instant at all, so every
    /// registered room is free.
    #[must_use]
    pub const fn is_unrestricted(&self) -> bool {
        self.unrestricted
    }

    /// Resolves the positions to room names.
    #[must_use]
    pub fn names<'a>(&self, registry: &'a RoomRegistry) -> Vec<&'a str> {
        self.positions
            .iter()
            .filter_map(|&position| registry.get(position))
            .collect()
    }

    /// Consumes the result, returning the registry positions.
    #[must_use]
    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}

impl Store {
    /// Finds the registered rooms that no reservation occupies at `instant`.
    ///
    /// Leaves the store ordered by start, then room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoom`] if a reservation covering `instant`
    /// names a room that is not in `registry`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use crr::{Reservation, RoomRegistry, Store};
    ///
    /// let registry = RoomRegistry::from_names(["Room A", "Room B"]).unwrap();
    /// let mut store = Store::new();
    /// store.add(Reservation::new(
    ///     "Room A",
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap(),
    ///     "",
    /// ).unwrap()).unwrap();
    ///
    /// let instant = Utc.with_ymd_and_hms(2024, 1, 1, 18, 30, 0).unwrap();
    /// let free = store.available_rooms_at(instant, &registry).unwrap();
    /// assert_eq!(free.names(&registry), vec!["Room B"]);
    /// ```
    pub fn available_rooms_at(
        &mut self,
        instant: DateTime<Utc>,
        registry: &RoomRegistry,
    ) -> Result<AvailableRooms> {
        self.sort(SortOrder::StartRoom);

        // Reservations that started by `instant` form a prefix; the ones
        // still running are scattered through it.
        let started = self
            .as_slice()
            .partition_point(|stored| started_by(stored, instant));

        let mut occupied = vec![false; registry.len()];
        let mut any = false;
        for stored in self.as_slice()[..started]
            .iter()
            .filter(|stored| stored.end() > instant)
        {
            let position = registry
                .position(stored.room())
                .ok_or_else(|| Error::UnknownRoom {
                    name: stored.room().to_string(),
                })?;
            occupied[position] = true;
            any = true;
        }

        let positions: Vec<usize> = occupied
            .iter()
            .enumerate()
            .filter(|&(_, &taken)| !taken)
            .map(|(position, _)| position)
            .collect();

        log::debug!(
            "{} of {} room(s) free at {instant}",
            positions.len(),
            registry.len()
        );
        Ok(AvailableRooms {
            positions,
            unrestricted: !any,
        })
    }

    /// Finds reservations starting on the same local weekday as `instant`.
    ///
    /// Leaves the store ordered by start, then room.
    pub fn reservations_on_weekday(&mut self, instant: DateTime<Utc>) -> Vec<usize> {
        self.reservations_on_weekday_in(instant, &Local)
    }

    /// Like [`Store::reservations_on_weekday`], with weekdays taken in `tz`.
    pub fn reservations_on_weekday_in<Tz: TimeZone>(
        &mut self,
        instant: DateTime<Utc>,
        tz: &Tz,
    ) -> Vec<usize> {
        self.sort(SortOrder::StartRoom);
        self.iter()
            .enumerate()
            .filter(|(_, stored)| same_weekday(stored, instant, tz))
            .map(|(position, _)| position)
            .collect()
    }

    /// Finds the reservations for `room` that have not ended yet.
    ///
    /// Leaves the store ordered by room, then start.
    pub fn reservations_for_room(&mut self, room: &str) -> Vec<usize> {
        self.reservations_for_room_at(room, Utc::now())
    }

    /// Like [`Store::reservations_for_room`], with an explicit `now`.
    pub fn reservations_for_room_at(&mut self, room: &str, now: DateTime<Utc>) -> Vec<usize> {
        self.sort(SortOrder::RoomStart);
        let all = self.as_slice();
        let lo = all.partition_point(|stored| room_order(stored, room) == Ordering::Less);
        let hi = all.partition_point(|stored| room_order(stored, room) != Ordering::Greater);

        // Same-room intervals never overlap, so the ones already over come
        // first within the room's run.
        let block = &all[lo..hi];
        let first_current = block.partition_point(|stored| stored.has_ended(now));
        (lo + first_current..hi).collect()
    }

    /// Finds reservations whose description contains `text`, ignoring case.
    ///
    /// Does not re-sort the store.
    #[must_use]
    pub fn reservations_by_description(&self, text: &str) -> Vec<usize> {
        let needle = text.to_lowercase();
        self.iter()
            .enumerate()
            .filter(|(_, stored)| description_matches(stored, &needle))
            .map(|(position, _)| position)
            .collect()
    }
}
