//! Main entry point for the crr CLI.
//!
//! This is the command-line interface for the conference room reservation
//! store. Every command loads the room list and the schedule, does its work,
//! and writes the schedule back only when it changed:
//! - `rooms`: List the bookable rooms
//! - `list`: List every reservation with its position
//! - `add`: Reserve a room
//! - `available`, `day`, `room`, `search`: Query the schedule
//! - `update`, `delete`: Change a reservation by position

use clap::Parser;
use crr_cli::cli::{Cli, Command};
use crr_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr based on verbosity
    if let Err(e) = crr::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        rooms_file: cli.rooms,
        schedule_file: cli.schedule,
    };

    let result = match cli.command {
        Command::Rooms(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Add(cmd) => cmd.execute(&global),
        Command::Available(cmd) => cmd.execute(&global),
        Command::Day(cmd) => cmd.execute(&global),
        Command::Room(cmd) => cmd.execute(&global),
        Command::Search(cmd) => cmd.execute(&global),
        Command::Update(cmd) => cmd.execute(&global),
        Command::Delete(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
