//! Search command implementation.
//!
//! Prints the reservations whose description contains a piece of text,
//! ignoring case.

use crate::error::CliError;
use crate::utils::{open_session, print_reservations, GlobalOptions};
use clap::Args;

/// Find reservations by description.
#[derive(Args)]
pub struct SearchCommand {
    /// Text to look for in descriptions
    pub text: String,
}

impl SearchCommand {
    /// Execute the search command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let session = open_session(global)?;
        let positions = session.store.reservations_by_description(&self.text);
        print_reservations(&session.store, &positions)
    }
}
