//! Rooms command implementation.
//!
//! Prints the registered rooms, one per line, sorted ignoring case.

use crate::error::CliError;
use crate::utils::{load_configuration, load_registry, GlobalOptions};
use clap::Args;
use std::io::Write;

/// List the bookable rooms.
#[derive(Args)]
pub struct RoomsCommand {}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let registry = load_registry(&config)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        for room in registry.iter() {
            writeln!(handle, "{room}")?;
        }
        Ok(())
    }
}
