//! Error types for the crr library.
//!
//! Every fatal data-integrity condition the store can detect is represented
//! here. A scheduling conflict is deliberately *not* an error: `add` and
//! `update` report it through their `Ok` value so callers can retry.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a crr error.
///
/// # Examples
///
/// ```
/// use crr::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crr library.
#[derive(Debug, Error)]
pub enum Error {
    /// A position outside `[0, count)` was used to address the store.
    #[error("index {index} out of range for store of {count} reservation(s)")]
    IndexOutOfRange {
        /// The offending position.
        index: usize,
        /// Number of reservations in the store at the time.
        count: usize,
    },

    /// Growing the backing storage failed.
    #[error("failed to allocate storage for {requested} reservation(s)")]
    AllocationFailure {
        /// Capacity that was requested.
        requested: usize,
    },

    /// The reservation file does not hold a whole number of valid records.
    #[error("corrupt reservation file {}: {details}", path.display())]
    CorruptFile {
        /// Path of the reservation file.
        path: PathBuf,
        /// What was wrong with it.
        details: String,
    },

    /// A stored reservation references a room missing from the registry.
    #[error("inconsistent reservation data: room '{name}' is not in the room registry")]
    UnknownRoom {
        /// The unknown room name as stored.
        name: String,
    },

    /// The room registry source contained no room names.
    #[error("no rooms found in {}", path.display())]
    EmptyRegistry {
        /// Path of the registry source.
        path: PathBuf,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if the error is a data-integrity failure that cannot be
    /// recovered from within a single run.
    ///
    /// # Examples
    ///
    /// ```
    /// use crr::Error;
    ///
    /// let err = Error::UnknownRoom { name: "Attic".to_string() };
    /// assert!(err.is_fatal());
    ///
    /// let err = Error::Validation {
    ///     field: "room".to_string(),
    ///     message: "must be non-empty".to_string(),
    /// };
    /// assert!(!err.is_fatal());
    /// ```
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. }
                | Self::AllocationFailure { .. }
                | Self::CorruptFile { .. }
                | Self::UnknownRoom { .. }
        )
    }
}
