//! The reservation store.
//!
//! A [`Store`] is a growable sequence of reservations with no fixed order at
//! rest. Every operation that depends on an order re-establishes it first,
//! which means positions handed out by one operation are only meaningful
//! until the next operation that may re-sort or mutate.
//!
//! # Invariant
//!
//! No two stored reservations for the same room (ignoring case) have
//! overlapping `[start, end)` intervals. `add` and `update` refuse any change
//! that would break it and hand back the reservation standing in the way.

use std::cmp::Ordering;
use std::ops::Range;

use crate::error::{Error, Result};
use crate::ordering::{by_room_then_start, conflict_order, SortOrder};
use crate::Reservation;

pub mod codec;
mod file;

#[cfg(test)]
mod proptests;

/// Capacity allocated on the first insertion.
pub const INITIAL_CAPACITY: usize = 5;

/// In-memory collection of reservations.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use crr::{Reservation, Store};
///
/// let mut store = Store::new();
/// let first = Reservation::new(
///     "Room A",
///     Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap(),
///     "x",
/// ).unwrap();
/// let overlapping = Reservation::new(
///     "Room A",
///     Utc.with_ymd_and_hms(2024, 1, 1, 18, 30, 0).unwrap(),
///     Utc.with_ymd_and_hms(2024, 1, 1, 19, 30, 0).unwrap(),
///     "y",
/// ).unwrap();
///
/// assert_eq!(store.add(first.clone()).unwrap(), None);
/// assert_eq!(store.add(overlapping).unwrap(), Some(first));
/// assert_eq!(store.count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Store {
    records: Vec<Reservation>,
    order: Option<SortOrder>,
    dirty: bool,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored reservations.
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the capacity of the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.records.capacity()
    }

    /// Returns true if the store was modified since it was created, loaded,
    /// or last written.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Iterates over the reservations in the current order.
    pub fn iter(&self) -> std::slice::Iter<'_, Reservation> {
        self.records.iter()
    }

    /// Returns the reservations in the current order.
    #[must_use]
    pub fn as_slice(&self) -> &[Reservation] {
        &self.records
    }

    /// Arranges the store in `order`.
    ///
    /// The sort is stable and is skipped when the store is known to be in
    /// `order` already.
    pub fn sort(&mut self, order: SortOrder) {
        if self.order != Some(order) {
            self.records.sort_by(order.comparator());
            self.order = Some(order);
        }
    }

    /// Adds a reservation unless it conflicts with a stored one.
    ///
    /// Returns `Ok(Some(conflicting))` without modifying the store when a
    /// stored reservation for the same room overlaps `reservation`, and
    /// `Ok(None)` once it has been added. Afterwards the store is ordered by
    /// room, then start.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailure`] if the backing storage cannot grow.
    pub fn add(&mut self, reservation: Reservation) -> Result<Option<Reservation>> {
        self.sort(SortOrder::RoomStart);

        if let Some(conflict) = self.first_conflict(&reservation, None) {
            log::debug!(
                "Rejected reservation for {} at {}: conflicts with {} starting {}",
                reservation.room(),
                reservation.start(),
                conflict.room(),
                conflict.start()
            );
            return Ok(Some(conflict.clone()));
        }

        self.reserve_slot()?;
        let at = self
            .records
            .partition_point(|stored| by_room_then_start(stored, &reservation) != Ordering::Greater);
        log::debug!(
            "Added reservation for {} at {} (position {at})",
            reservation.room(),
            reservation.start()
        );
        self.records.insert(at, reservation);
        self.dirty = true;
        Ok(None)
    }

    /// Returns the reservation at `index` in the current order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < count()`.
    pub fn get(&self, index: usize) -> Result<&Reservation> {
        self.records.get(index).ok_or(Error::IndexOutOfRange {
            index,
            count: self.records.len(),
        })
    }

    /// Replaces the reservation at `index` without any conflict check.
    ///
    /// Only the update flow calls this, after it has cleared the conflict.
    pub(crate) fn set(&mut self, index: usize, reservation: Reservation) -> Result<()> {
        let count = self.records.len();
        let slot = self
            .records
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, count })?;
        *slot = reservation;
        self.order = None;
        self.dirty = true;
        Ok(())
    }

    /// Removes and returns the reservation at `index`.
    ///
    /// Every reservation after `index` moves down one position; the relative
    /// order of the others is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < count()`.
    pub fn delete(&mut self, index: usize) -> Result<Reservation> {
        if index >= self.records.len() {
            return Err(Error::IndexOutOfRange {
                index,
                count: self.records.len(),
            });
        }
        let removed = self.records.remove(index);
        log::debug!(
            "Deleted reservation for {} at {} (position {index})",
            removed.room(),
            removed.start()
        );
        self.dirty = true;
        Ok(removed)
    }

    /// Replaces the reservation at `index` with `candidate` unless the
    /// candidate conflicts with any *other* stored reservation.
    ///
    /// The reservation being replaced never counts as a conflict, but every
    /// other reservation for the candidate's room is checked. Returns
    /// `Ok(Some(conflicting))` without modifying the store on conflict and
    /// `Ok(None)` once the candidate has been committed. The store is
    /// re-sorted by room, then start before the check, so `index` refers to
    /// the order in effect when this is called.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < count()`.
    pub fn update(&mut self, index: usize, candidate: Reservation) -> Result<Option<Reservation>> {
        let current = self.get(index)?.clone();
        self.sort(SortOrder::RoomStart);
        let slot = self.locate(&current).ok_or(Error::IndexOutOfRange {
            index,
            count: self.records.len(),
        })?;

        if let Some(conflict) = self.first_conflict(&candidate, Some(slot)) {
            log::debug!(
                "Rejected update of {} at {}: conflicts with {} starting {}",
                current.room(),
                current.start(),
                conflict.room(),
                conflict.start()
            );
            return Ok(Some(conflict.clone()));
        }

        log::debug!(
            "Updated reservation for {} at {} to {} at {}",
            current.room(),
            current.start(),
            candidate.room(),
            candidate.start()
        );
        self.set(slot, candidate)?;
        Ok(None)
    }

    /// Range of positions conflicting with `candidate`.
    ///
    /// Requires [`SortOrder::RoomStart`]; under the store invariant the
    /// conflicting reservations form one contiguous run in that order.
    fn conflicting_range(&self, candidate: &Reservation) -> Range<usize> {
        debug_assert_eq!(self.order, Some(SortOrder::RoomStart));
        let lo = self
            .records
            .partition_point(|stored| conflict_order(stored, candidate) == Ordering::Less);
        let hi = self
            .records
            .partition_point(|stored| conflict_order(stored, candidate) != Ordering::Greater);
        lo..hi.max(lo)
    }

    fn first_conflict(&self, candidate: &Reservation, skip: Option<usize>) -> Option<&Reservation> {
        self.conflicting_range(candidate)
            .find(|&position| Some(position) != skip)
            .map(|position| &self.records[position])
    }

    /// Position of a reservation equal to `target`, in [`SortOrder::RoomStart`].
    fn locate(&self, target: &Reservation) -> Option<usize> {
        let lo = self
            .records
            .partition_point(|stored| by_room_then_start(stored, target) == Ordering::Less);
        self.records[lo..]
            .iter()
            .take_while(|stored| by_room_then_start(stored, target) == Ordering::Equal)
            .position(|stored| stored == target)
            .map(|offset| lo + offset)
    }

    /// Makes room for one more reservation, growing geometrically.
    fn reserve_slot(&mut self) -> Result<()> {
        let len = self.records.len();
        if len < self.records.capacity() {
            return Ok(());
        }
        let target = grown_capacity(len);
        self.records
            .try_reserve_exact(target - len)
            .map_err(|_| Error::AllocationFailure { requested: target })?;
        log::debug!("Grew reservation storage to {target}");
        Ok(())
    }
}

/// Smallest capacity in the `5, 10, 20, ...` sequence that exceeds `len`.
pub(crate) fn grown_capacity(len: usize) -> usize {
    let mut capacity = INITIAL_CAPACITY;
    while capacity <= len {
        capacity = capacity.saturating_mul(2);
    }
    capacity
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a Reservation;
    type IntoIter = std::slice::Iter<'a, Reservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
