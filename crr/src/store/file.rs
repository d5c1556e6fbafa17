//! Loading and saving the store, and checking it against the registry.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::ordering::{conflicts, SortOrder};
use crate::registry::RoomRegistry;
use crate::Reservation;

use super::codec::{self, RECORD_WIDTH};
use super::{grown_capacity, Store};

impl Store {
    /// Writes every reservation to `path` in the current order, replacing
    /// the file. Clears the dirty flag on success.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn write_file(&mut self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for reservation in &self.records {
            writer.write_all(&codec::encode(reservation))?;
        }
        writer.flush()?;

        log::debug!(
            "Wrote {} reservation(s) to {}",
            self.records.len(),
            path.display()
        );
        self.dirty = false;
        Ok(())
    }

    /// Replaces the contents of the store with the reservations in `path`,
    /// then orders them by room, then start.
    ///
    /// A missing file is not an error: the store is left empty, as on a
    /// first run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CorruptFile`] if the file size is not a multiple of
    /// the record width, the file is shorter than its size promised, a
    /// record does not decode, or two records for the same room overlap.
    /// The store is left untouched on error. Returns [`Error::AllocationFailure`] if
    /// storage for the records cannot be reserved.
    pub fn read_file(&mut self, path: &Path) -> Result<()> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "No reservation file at {}; starting empty",
                    path.display()
                );
                self.records.clear();
                self.order = None;
                self.dirty = false;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let size = file.metadata()?.len();
        let width = RECORD_WIDTH as u64;
        if size % width != 0 {
            return Err(corrupt(
                path,
                format!("size {size} is not a multiple of the {RECORD_WIDTH}-byte record width"),
            ));
        }
        let count = usize::try_from(size / width)
            .map_err(|_| corrupt(path, format!("{size} bytes is too large to load")))?;

        let mut records = Vec::new();
        let capacity = grown_capacity(count);
        records
            .try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailure {
                requested: capacity,
            })?;

        let mut reader = BufReader::new(file);
        let mut buf = [0u8; RECORD_WIDTH];
        for index in 0..count {
            reader.read_exact(&mut buf).map_err(|e| {
                if e.kind() == io::ErrorKind::UnexpectedEof {
                    corrupt(
                        path,
                        format!("short read: expected {count} record(s), got {index}"),
                    )
                } else {
                    Error::Io(e)
                }
            })?;
            let reservation = codec::decode(&buf)
                .map_err(|e| corrupt(path, format!("record {index}: {e}")))?;
            records.push(reservation);
        }

        records.sort_by(SortOrder::RoomStart.comparator());
        if let Some((earlier, later)) = first_overlap(&records) {
            return Err(corrupt(
                path,
                format!(
                    "{} is booked twice: {} to {} overlaps {} to {}",
                    later.room(),
                    earlier.start(),
                    earlier.end(),
                    later.start(),
                    later.end()
                ),
            ));
        }

        self.records = records;
        self.order = Some(SortOrder::RoomStart);
        self.dirty = false;

        log::debug!("Read {count} reservation(s) from {}", path.display());
        Ok(())
    }

    /// Checks that every stored reservation names a registered room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownRoom`] for the first reservation whose room
    /// is missing from `registry`.
    pub fn check_consistency(&self, registry: &RoomRegistry) -> Result<()> {
        match self
            .records
            .iter()
            .find(|reservation| !registry.contains(reservation.room()))
        {
            Some(stray) => Err(Error::UnknownRoom {
                name: stray.room().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Finds the first pair of same-room reservations that overlap.
///
/// `records` must be sorted by room, then start. Neighbours suffice: once
/// each start is at or after the previous end, ends increase within a room.
fn first_overlap(records: &[Reservation]) -> Option<(&Reservation, &Reservation)> {
    records
        .windows(2)
        .find(|pair| conflicts(&pair[1], &pair[0]))
        .map(|pair| (&pair[0], &pair[1]))
}

fn corrupt(path: &Path, details: String) -> Error {
    Error::CorruptFile {
        path: path.to_path_buf(),
        details,
    }
}
