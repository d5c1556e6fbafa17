//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AddCommand, AvailableCommand, CompletionsCommand, DayCommand, DeleteCommand, ListCommand,
    RoomCommand, RoomsCommand, SearchCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking conference rooms.
#[derive(Parser)]
#[command(name = "crr")]
#[command(version, about = "Book conference rooms without double-booking", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Room list file, one room name per line
    #[arg(long, value_name = "PATH", global = true, env = "CRR_ROOMS_FILE")]
    pub rooms: Option<PathBuf>,

    /// Reservation file
    #[arg(long, value_name = "PATH", global = true, env = "CRR_SCHEDULE_FILE")]
    pub schedule: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the bookable rooms
    Rooms(RoomsCommand),

    /// List every reservation with its position
    List(ListCommand),

    /// Reserve a room
    Add(AddCommand),

    /// Show the rooms free at an instant
    Available(AvailableCommand),

    /// Show reservations starting on the same weekday as an instant
    Day(DayCommand),

    /// Show current and upcoming reservations for a room
    Room(RoomCommand),

    /// Find reservations by description
    Search(SearchCommand),

    /// Replace the reservation at a position
    Update(UpdateCommand),

    /// Delete the reservation at a position
    Delete(DeleteCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
