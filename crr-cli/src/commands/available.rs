//! Available command implementation.
//!
//! Prints the rooms with no reservation covering an instant.

use crate::error::CliError;
use crate::utils::{open_session, parse_instant, GlobalOptions};
use chrono::Utc;
use clap::Args;
use std::io::Write;

/// Show the rooms free at an instant.
#[derive(Args)]
pub struct AvailableCommand {
    /// Instant to check, RFC 3339 (defaults to now)
    #[arg(long, value_name = "INSTANT")]
    pub at: Option<String>,
}

impl AvailableCommand {
    /// Execute the available command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = open_session(global)?;
        let instant = match self.at {
            Some(ref value) => parse_instant("at", value)?,
            None => Utc::now(),
        };

        let available = session
            .store
            .available_rooms_at(instant, &session.registry)?;
        if available.is_unrestricted() {
            log::info!("No reservation covers {instant}; every room is free");
        }

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for room in available.names(&session.registry) {
            writeln!(handle, "{room}")?;
        }
        Ok(())
    }
}
