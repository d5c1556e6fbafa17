//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered; the
//! accessors fill in the built-in defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default location of the room registry.
pub const DEFAULT_ROOMS_FILE: &str = "rooms.dat";

/// Default location of the reservation file.
pub const DEFAULT_SCHEDULE_FILE: &str = "schedule.dat";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use crr::config::Config;
/// use std::path::{Path, PathBuf};
///
/// let config = Config {
///     rooms_file: Some(PathBuf::from("/srv/crr/rooms.dat")),
///     ..Default::default()
/// };
/// assert_eq!(config.rooms_file(), Path::new("/srv/crr/rooms.dat"));
/// assert_eq!(config.schedule_file(), Path::new("schedule.dat"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Text file listing the bookable rooms, one per line.
    pub rooms_file: Option<PathBuf>,

    /// Binary file holding the reservations.
    pub schedule_file: Option<PathBuf>,

    /// Default output format for listings.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the room registry path, or the default.
    #[must_use]
    pub fn rooms_file(&self) -> &Path {
        self.rooms_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_ROOMS_FILE))
    }

    /// Returns the reservation file path, or the default.
    #[must_use]
    pub fn schedule_file(&self) -> &Path {
        self.schedule_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SCHEDULE_FILE))
    }

    /// Returns the listing format, or [`OutputFormat::Table`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Output format for listings.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable columns.
    #[default]
    Table,
    /// A JSON array.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("invalid output format: {s}")),
        }
    }
}
