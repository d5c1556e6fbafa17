//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `rooms`: List the bookable rooms
//! - `list`: List every reservation with its position
//! - `add`: Reserve a room
//! - `available`: Show the rooms free at an instant
//! - `day`: Show reservations on the same weekday as an instant
//! - `room`: Show current and upcoming reservations for a room
//! - `search`: Find reservations by description
//! - `update`: Replace the reservation at a position
//! - `delete`: Delete the reservation at a position
//! - `completions`: Generate shell completion scripts

pub mod add;
pub mod available;
pub mod completions;
pub mod day;
pub mod delete;
pub mod list;
pub mod room;
pub mod rooms;
pub mod search;
pub mod update;

pub use add::AddCommand;
pub use available::AvailableCommand;
pub use completions::CompletionsCommand;
pub use day::DayCommand;
pub use delete::DeleteCommand;
pub use list::ListCommand;
pub use room::RoomCommand;
pub use rooms::RoomsCommand;
pub use search::SearchCommand;
pub use update::UpdateCommand;
