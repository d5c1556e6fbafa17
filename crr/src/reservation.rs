//! Reservation records.
//!
//! This module provides the [`Reservation`] value type, its builder, and the
//! field bounds inherited from the persisted record layout.

use std::fmt;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod proptests;

/// Maximum length of a room name, in bytes of UTF-8.
pub const MAX_ROOM_NAME_LEN: usize = 48;

/// Maximum length of a description, in bytes of UTF-8.
pub const MAX_DESCRIPTION_LEN: usize = 128;

/// `ctime`-style rendering used when presenting instants in local time.
const DISPLAY_TIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// A booking of one room over the half-open interval `[start, end)`.
///
/// Room names are compared case-insensitively everywhere in the store; the
/// original spelling is kept for display and persistence.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use crr::Reservation;
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap();
///
/// let reservation = Reservation::builder("Room A", start, end)
///     .description("Birthday party")
///     .build()
///     .unwrap();
///
/// assert_eq!(reservation.room(), "Room A");
/// assert_eq!(reservation.description(), "Birthday party");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reservation {
    room: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    description: String,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(
        room: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ReservationBuilder {
        ReservationBuilder {
            room: room.into(),
            start,
            end,
            description: String::new(),
        }
    }

    /// Creates a reservation from all four fields at once.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`ReservationBuilder::build`].
    pub fn new(
        room: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::builder(room, start, end)
            .description(description)
            .build()
    }

    /// Returns the room name as it was entered.
    #[must_use]
    pub fn room(&self) -> &str {
        &self.room
    }

    /// Returns the start instant (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the start instant in the local time zone.
    #[must_use]
    pub fn local_start(&self) -> DateTime<Local> {
        self.start.with_timezone(&Local)
    }

    /// Returns the end instant in the local time zone.
    #[must_use]
    pub fn local_end(&self) -> DateTime<Local> {
        self.end.with_timezone(&Local)
    }

    /// Checks whether this reservation is for `room`, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use crr::Reservation;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap();
    /// let reservation = Reservation::new("Room A", start, end, "").unwrap();
    ///
    /// assert!(reservation.is_for_room("ROOM a"));
    /// assert!(!reservation.is_for_room("Room B"));
    /// ```
    #[must_use]
    pub fn is_for_room(&self, room: &str) -> bool {
        self.room.eq_ignore_ascii_case(room)
    }

    /// Checks whether `instant` falls inside `[start, end)`.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Checks whether the reservation has ended as of `now`.
    #[must_use]
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end <= now
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The {} is reserved from: {} to: {}.",
            self.room,
            self.local_start().format(DISPLAY_TIME_FORMAT),
            self.local_end().format(DISPLAY_TIME_FORMAT),
        )?;
        write!(f, "\tDescription of the event: {}", self.description)
    }
}

/// Builder for creating `Reservation` instances.
///
/// The builder validates every field bound before producing a reservation,
/// so a `Reservation` value always satisfies them.
#[derive(Debug)]
pub struct ReservationBuilder {
    room: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    description: String,
}

impl ReservationBuilder {
    /// Sets the description. It is stored exactly as given.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The room name is empty after trimming or longer than
    ///   [`MAX_ROOM_NAME_LEN`] bytes
    /// - The description is longer than [`MAX_DESCRIPTION_LEN`] bytes
    /// - Either text field contains a NUL character
    /// - The end instant is not strictly after the start instant
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use crr::Reservation;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
    /// let end = Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap();
    ///
    /// // Valid reservation
    /// assert!(Reservation::builder("Room A", start, end).build().is_ok());
    ///
    /// // Invalid: end before start
    /// assert!(Reservation::builder("Room A", end, start).build().is_err());
    ///
    /// // Invalid: empty room
    /// assert!(Reservation::builder("  ", start, end).build().is_err());
    /// ```
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let room = self.room.trim().to_string();
        if room.is_empty() {
            return Err(ValidationError::new(
                "room",
                "room name must be non-empty after trimming whitespace",
            ));
        }
        validate_text("room", &room, MAX_ROOM_NAME_LEN)?;
        validate_text("description", &self.description, MAX_DESCRIPTION_LEN)?;

        if self.end <= self.start {
            return Err(ValidationError::new(
                "end",
                format!(
                    "end {} must be after start {}",
                    self.end.to_rfc3339(),
                    self.start.to_rfc3339()
                ),
            ));
        }

        Ok(Reservation {
            room,
            start: self.start,
            end: self.end,
            description: self.description,
        })
    }
}

fn validate_text(field: &str, value: &str, max_len: usize) -> Result<(), ValidationError> {
    if value.len() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max_len} bytes, got {}", value.len()),
        ));
    }
    if value.contains('\0') {
        return Err(ValidationError::new(field, "must not contain NUL characters"));
    }
    Ok(())
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
