//! Update command implementation.
//!
//! Replaces the reservation at a position from `crr list`. Fields not given
//! on the command line keep their current value.

use crate::error::CliError;
use crate::utils::{
    build_reservation, confirm, open_session, position_error, GlobalOptions,
};
use clap::Args;
use crr::SortOrder;

/// Replace the reservation at a position.
#[derive(Args)]
pub struct UpdateCommand {
    /// Position shown by `crr list`
    pub position: usize,

    /// New room (case-insensitive)
    #[arg(long, value_name = "ROOM")]
    pub room: Option<String>,

    /// New start instant, RFC 3339
    #[arg(long, value_name = "INSTANT")]
    pub start: Option<String>,

    /// New end instant, RFC 3339
    #[arg(long, value_name = "INSTANT")]
    pub end: Option<String>,

    /// New description
    #[arg(long, short = 'd', value_name = "TEXT")]
    pub description: Option<String>,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = open_session(global)?;
        session.store.sort(SortOrder::RoomStart);
        let current = session
            .store
            .get(self.position)
            .map_err(position_error)?
            .clone();

        let start = current.start().to_rfc3339();
        let end = current.end().to_rfc3339();
        let candidate = build_reservation(
            &session.registry,
            self.room.as_deref().unwrap_or(current.room()),
            self.start.as_deref().unwrap_or(&start),
            self.end.as_deref().unwrap_or(&end),
            Some(self.description.as_deref().unwrap_or(current.description())),
        )?;

        let conflict = session
            .store
            .update(self.position, candidate.clone())
            .map_err(position_error)?;
        if let Some(conflict) = conflict {
            eprintln!("{conflict}");
            return Err(CliError::SemanticFailure(format!(
                "{} is already reserved during that time",
                conflict.room()
            )));
        }

        session.save_if_dirty()?;
        confirm(global, &format!("Updated: {candidate}"));
        Ok(())
    }
}
