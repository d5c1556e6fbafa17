//! Fixed-width binary record layout.
//!
//! Each reservation occupies [`RECORD_WIDTH`] bytes. Field offsets keep the
//! padding of a naturally aligned 64-bit layout:
//!
//! ```text
//! offset  size  field
//!      0    49  room name, UTF-8, NUL padded
//!     49     7  padding
//!     56     8  start, i64 LE seconds since the Unix epoch (UTC)
//!     64     8  end,   i64 LE seconds since the Unix epoch (UTC)
//!     72   129  description, UTF-8, NUL padded
//!    201     7  padding
//! ```
//!
//! There is no header and no version tag; a file is a bare sequence of
//! records.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::reservation::{ValidationError, MAX_DESCRIPTION_LEN, MAX_ROOM_NAME_LEN};
use crate::Reservation;

/// Size of the room name buffer, including the NUL terminator.
pub const ROOM_FIELD_LEN: usize = MAX_ROOM_NAME_LEN + 1;

/// Size of the description buffer, including the NUL terminator.
pub const DESCRIPTION_FIELD_LEN: usize = MAX_DESCRIPTION_LEN + 1;

/// Width of one persisted record in bytes.
pub const RECORD_WIDTH: usize = 208;

const ROOM_OFFSET: usize = 0;
const START_OFFSET: usize = 56;
const END_OFFSET: usize = 64;
const DESCRIPTION_OFFSET: usize = 72;

/// Reasons a record cannot be decoded.
#[derive(Debug, Error)]
pub enum RecordError {
    /// A text field is not valid UTF-8.
    #[error("{field} is not valid UTF-8")]
    InvalidText {
        /// The field name.
        field: &'static str,
    },

    /// A timestamp does not fit the supported calendar range.
    #[error("{field} timestamp {seconds} is out of range")]
    TimestampOutOfRange {
        /// The field name.
        field: &'static str,
        /// The raw seconds value.
        seconds: i64,
    },

    /// The decoded fields do not form a valid reservation.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Encodes a reservation into its fixed-width form.
///
/// Reservation fields are validated on construction to fit their buffers,
/// so encoding cannot fail.
#[must_use]
pub fn encode(reservation: &Reservation) -> [u8; RECORD_WIDTH] {
    let mut buf = [0u8; RECORD_WIDTH];

    put_text(&mut buf, ROOM_OFFSET, ROOM_FIELD_LEN, reservation.room());
    buf[START_OFFSET..START_OFFSET + 8]
        .copy_from_slice(&reservation.start().timestamp().to_le_bytes());
    buf[END_OFFSET..END_OFFSET + 8].copy_from_slice(&reservation.end().timestamp().to_le_bytes());
    put_text(
        &mut buf,
        DESCRIPTION_OFFSET,
        DESCRIPTION_FIELD_LEN,
        reservation.description(),
    );

    buf
}

/// Decodes one fixed-width record.
///
/// # Errors
///
/// Returns an error if a text field is not UTF-8, a timestamp is out of
/// range, or the fields fail reservation validation.
pub fn decode(buf: &[u8; RECORD_WIDTH]) -> Result<Reservation, RecordError> {
    let room = take_text(buf, ROOM_OFFSET, ROOM_FIELD_LEN, "room")?;
    let start = take_instant(buf, START_OFFSET, "start")?;
    let end = take_instant(buf, END_OFFSET, "end")?;
    let description = take_text(buf, DESCRIPTION_OFFSET, DESCRIPTION_FIELD_LEN, "description")?;

    Ok(Reservation::new(room, start, end, description)?)
}

fn put_text(buf: &mut [u8], offset: usize, field_len: usize, text: &str) {
    let bytes = text.as_bytes();
    let len = bytes.len().min(field_len - 1);
    buf[offset..offset + len].copy_from_slice(&bytes[..len]);
}

fn take_text<'a>(
    buf: &'a [u8],
    offset: usize,
    field_len: usize,
    field: &'static str,
) -> Result<&'a str, RecordError> {
    let raw = &buf[offset..offset + field_len];
    let len = raw.iter().position(|&b| b == 0).unwrap_or(field_len);
    std::str::from_utf8(&raw[..len]).map_err(|_| RecordError::InvalidText { field })
}

fn take_instant(
    buf: &[u8],
    offset: usize,
    field: &'static str,
) -> Result<DateTime<Utc>, RecordError> {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&buf[offset..offset + 8]);
    let seconds = i64::from_le_bytes(raw);
    DateTime::from_timestamp(seconds, 0)
        .ok_or(RecordError::TimestampOutOfRange { field, seconds })
}
