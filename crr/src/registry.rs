//! The room registry.
//!
//! The registry is the set of rooms that may be booked. It is built once at
//! startup and never changes during a run. Names are kept sorted with the
//! same case-insensitive order the store uses, so lookups are binary
//! searches.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::ordering::cmp_room_names;
use crate::reservation::MAX_ROOM_NAME_LEN;

/// A sorted, immutable set of room names.
///
/// # Examples
///
/// ```
/// use crr::RoomRegistry;
///
/// let registry = RoomRegistry::from_names(["Room B", "Room A"]).unwrap();
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.get(0), Some("Room A"));
/// assert_eq!(registry.position("room b"), Some(1));
/// assert!(!registry.contains("Room C"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRegistry {
    rooms: Vec<String>,
}

impl RoomRegistry {
    /// Builds a registry from a list of room names.
    ///
    /// Names are trimmed and blank entries are skipped. Names that differ
    /// only in case are treated as one room; the first spelling wins.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a name exceeds [`MAX_ROOM_NAME_LEN`]
    /// bytes or if no names remain.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rooms: Vec<String> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            if name.len() > MAX_ROOM_NAME_LEN {
                return Err(Error::Validation {
                    field: "room".into(),
                    message: format!(
                        "room name '{name}' is longer than {MAX_ROOM_NAME_LEN} bytes"
                    ),
                });
            }
            rooms.push(name.to_string());
        }

        if rooms.is_empty() {
            return Err(Error::Validation {
                field: "rooms".into(),
                message: "at least one room is required".into(),
            });
        }

        rooms.sort_by(|a, b| cmp_room_names(a, b));
        let before = rooms.len();
        rooms.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
        if rooms.len() != before {
            log::warn!(
                "Ignored {} duplicate room name(s) in registry",
                before - rooms.len()
            );
        }

        Ok(Self { rooms })
    }

    /// Loads a registry from a text file holding one room name per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, holds no room names
    /// ([`Error::EmptyRegistry`]), or holds an invalid name.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        if contents.lines().all(|line| line.trim().is_empty()) {
            return Err(Error::EmptyRegistry {
                path: path.to_path_buf(),
            });
        }

        let registry = Self::from_names(contents.lines())?;
        log::debug!(
            "Loaded {} room(s) from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Returns true if the registry holds no rooms.
    ///
    /// Registries built through [`RoomRegistry::from_names`] are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Returns the position of `room` in the registry, ignoring case.
    #[must_use]
    pub fn position(&self, room: &str) -> Option<usize> {
        self.rooms
            .binary_search_by(|probe| cmp_room_names(probe, room))
            .ok()
    }

    /// Checks whether `room` is registered, ignoring case.
    #[must_use]
    pub fn contains(&self, room: &str) -> bool {
        self.position(room).is_some()
    }

    /// Returns the room name at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.rooms.get(index).map(String::as_str)
    }

    /// Returns the registered spelling of `room`, ignoring case.
    #[must_use]
    pub fn canonical_name(&self, room: &str) -> Option<&str> {
        self.position(room).and_then(|index| self.get(index))
    }

    /// Iterates over room names in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(String::as_str)
    }
}
