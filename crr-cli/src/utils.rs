//! Utility functions for CLI operations.
//!
//! This module provides the plumbing shared by every command: configuration
//! loading, opening the registry and schedule, argument parsing, and
//! printing reservations.

use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{DateTime, Local, Utc};
use crr::{Config, ConfigBuilder, Error as LibError, Reservation, RoomRegistry, Store};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the room registry location.
    pub rooms_file: Option<PathBuf>,

    /// Override the reservation file location.
    pub schedule_file: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        rooms_file: global.rooms_file.clone(),
        schedule_file: global.schedule_file.clone(),
        ..Config::default()
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The registry and schedule a command operates on.
pub struct Session {
    /// Effective configuration.
    pub config: Config,
    /// Bookable rooms.
    pub registry: RoomRegistry,
    /// Reservations read from the schedule file.
    pub store: Store,
}

impl Session {
    /// Writes the schedule back if anything changed.
    pub fn save_if_dirty(&mut self) -> Result<(), CliError> {
        if self.store.is_dirty() {
            let path = self.config.schedule_file().to_path_buf();
            self.store.write_file(&path)?;
            log::info!("Saved {} reservation(s) to {}", self.store.count(), path.display());
        }
        Ok(())
    }
}

/// Loads configuration, the room registry, and the schedule, then checks
/// that every stored reservation names a registered room.
pub fn open_session(global: &GlobalOptions) -> Result<Session, CliError> {
    let config = load_configuration(global)?;
    let registry = load_registry(&config)?;

    let mut store = Store::new();
    store.read_file(config.schedule_file())?;
    store.check_consistency(&registry)?;

    Ok(Session {
        config,
        registry,
        store,
    })
}

/// Loads the room registry named by `config`.
pub fn load_registry(config: &Config) -> Result<RoomRegistry, CliError> {
    let path = config.rooms_file();
    RoomRegistry::load(path).map_err(|e| match e {
        LibError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
            CliError::NoRoomsFile(path.to_path_buf())
        }
        other => CliError::from(other),
    })
}

/// Maps an out-of-range position to an argument error; positions come from
/// the command line.
pub fn position_error(e: LibError) -> CliError {
    match e {
        LibError::IndexOutOfRange { index, count } => CliError::InvalidArguments(format!(
            "no reservation at position {index} ({count} stored)"
        )),
        other => CliError::from(other),
    }
}

/// Parses an RFC 3339 instant such as `2024-03-01T18:00:00+01:00`.
pub fn parse_instant(field: &str, value: &str) -> Result<DateTime<Utc>, CliError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| {
            CliError::InvalidArguments(format!(
                "--{field} '{value}' is not an RFC 3339 timestamp: {e}"
            ))
        })
}

/// Resolves `room` to its registered spelling.
pub fn resolve_room<'a>(registry: &'a RoomRegistry, room: &str) -> Result<&'a str, CliError> {
    registry
        .canonical_name(room.trim())
        .ok_or_else(|| CliError::InvalidArguments(format!("unknown room '{room}'")))
}

/// Builds a reservation from command arguments, using the registered
/// spelling of the room and a trimmed description.
pub fn build_reservation(
    registry: &RoomRegistry,
    room: &str,
    start: &str,
    end: &str,
    description: Option<&str>,
) -> Result<Reservation, CliError> {
    let room = resolve_room(registry, room)?;
    let start = parse_instant("start", start)?;
    let end = parse_instant("end", end)?;

    Reservation::builder(room, start, end)
        .description(description.unwrap_or_default().trim())
        .build()
        .map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Formats an instant in local time for tables.
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Prints the reservations at `positions`, one block each.
pub fn print_reservations(store: &Store, positions: &[usize]) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    for &position in positions {
        writeln!(handle, "{}", store.get(position)?)?;
    }
    Ok(())
}

/// Prints `message` to stdout unless running quietly.
pub fn confirm(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        println!("{message}");
    }
}
