//! Day command implementation.
//!
//! Prints the reservations starting on the same local weekday as an instant.

use crate::error::CliError;
use crate::utils::{open_session, parse_instant, print_reservations, GlobalOptions};
use chrono::Utc;
use clap::Args;

/// Show reservations starting on the same weekday as an instant.
#[derive(Args)]
pub struct DayCommand {
    /// Instant whose weekday to match, RFC 3339 (defaults to now)
    #[arg(long, value_name = "INSTANT")]
    pub at: Option<String>,
}

impl DayCommand {
    /// Execute the day command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = open_session(global)?;
        let instant = match self.at {
            Some(ref value) => parse_instant("at", value)?,
            None => Utc::now(),
        };

        let positions = session.store.reservations_on_weekday(instant);
        print_reservations(&session.store, &positions)
    }
}
