//! Room command implementation.
//!
//! Prints the reservations for a room that have not yet ended.

use crate::error::CliError;
use crate::utils::{open_session, print_reservations, resolve_room, GlobalOptions};
use clap::Args;

/// Show current and upcoming reservations for a room.
#[derive(Args)]
pub struct RoomCommand {
    /// Room name (case-insensitive)
    pub room: String,
}

impl RoomCommand {
    /// Execute the room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = open_session(global)?;
        let room = resolve_room(&session.registry, &self.room)?.to_string();

        let positions = session.store.reservations_for_room(&room);
        print_reservations(&session.store, &positions)
    }
}
