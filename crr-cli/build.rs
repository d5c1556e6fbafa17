//! Build script for crr-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here a second time.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("crr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book conference rooms without double-booking")
        .long_about(
            "Command-line tool for keeping a conference room schedule in which no room is booked twice at once",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("rooms")
                .long("rooms")
                .help("Room list file, one room name per line")
                .value_name("PATH")
                .global(true)
                .env("CRR_ROOMS_FILE"),
        )
        .arg(
            Arg::new("schedule")
                .long("schedule")
                .help("Reservation file")
                .value_name("PATH")
                .global(true)
                .env("CRR_SCHEDULE_FILE"),
        )
        .subcommands(vec![
            Command::new("rooms")
                .about("List the bookable rooms")
                .long_about("Print the registered rooms, one per line"),
            Command::new("list")
                .about("List every reservation with its position")
                .long_about("Display all reservations in room, then start order as a table, JSON, or CSV"),
            Command::new("add")
                .about("Reserve a room")
                .long_about("Reserve a room for a half-open interval; exits 1 if the room is already taken"),
            Command::new("available")
                .about("Show the rooms free at an instant")
                .long_about("List the rooms with no reservation covering the given instant"),
            Command::new("day")
                .about("Show reservations starting on the same weekday as an instant")
                .long_about("List reservations whose local start weekday matches the given instant"),
            Command::new("room")
                .about("Show current and upcoming reservations for a room")
                .long_about("List the reservations for a room that have not yet ended"),
            Command::new("search")
                .about("Find reservations by description")
                .long_about("List reservations whose description contains the text, ignoring case"),
            Command::new("update")
                .about("Replace the reservation at a position")
                .long_about("Change the room, interval, or description of the reservation at a list position"),
            Command::new("delete")
                .about("Delete the reservation at a position")
                .long_about("Remove the reservation at a list position"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("crr.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
