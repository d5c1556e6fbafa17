//! Delete command implementation.

use crate::error::CliError;
use crate::utils::{confirm, open_session, position_error, GlobalOptions};
use clap::Args;
use crr::SortOrder;

/// Delete the reservation at a position.
#[derive(Args)]
pub struct DeleteCommand {
    /// Position shown by `crr list`
    pub position: usize,
}

impl DeleteCommand {
    /// Execute the delete command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = open_session(global)?;
        session.store.sort(SortOrder::RoomStart);
        let removed = session.store.delete(self.position).map_err(position_error)?;

        session.save_if_dirty()?;
        confirm(global, &format!("Deleted: {removed}"));
        Ok(())
    }
}
