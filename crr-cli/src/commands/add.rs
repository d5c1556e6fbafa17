//! Add command implementation.
//!
//! Reserves a room for a half-open interval. A reservation overlapping an
//! existing one for the same room is refused and the existing one printed.

use crate::error::CliError;
use crate::utils::{build_reservation, confirm, open_session, GlobalOptions};
use clap::Args;

/// Reserve a room.
#[derive(Args)]
pub struct AddCommand {
    /// Room to reserve (case-insensitive)
    #[arg(long, value_name = "ROOM")]
    pub room: String,

    /// Start instant, RFC 3339 (inclusive)
    #[arg(long, value_name = "INSTANT")]
    pub start: String,

    /// End instant, RFC 3339 (exclusive)
    #[arg(long, value_name = "INSTANT")]
    pub end: String,

    /// Description of the event
    #[arg(long, short = 'd', value_name = "TEXT")]
    pub description: Option<String>,
}

impl AddCommand {
    /// Execute the add command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = open_session(global)?;
        let reservation = build_reservation(
            &session.registry,
            &self.room,
            &self.start,
            &self.end,
            self.description.as_deref(),
        )?;

        if let Some(conflict) = session.store.add(reservation.clone())? {
            eprintln!("{conflict}");
            return Err(CliError::SemanticFailure(format!(
                "{} is already reserved during that time",
                conflict.room()
            )));
        }

        session.save_if_dirty()?;
        confirm(global, &format!("Reserved: {reservation}"));
        Ok(())
    }
}
