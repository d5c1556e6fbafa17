//! List command implementation.
//!
//! This module implements the `list` command, which displays every stored
//! reservation with its position in various formats (table, JSON, CSV).
//! Positions are the ones `update` and `delete` accept.

use crate::error::CliError;
use crate::utils::{format_instant, open_session, GlobalOptions};
use clap::{Args, ValueEnum};
use crr::config::OutputFormat;
use crr::{Reservation, SortOrder};
use serde::Serialize;
use std::io::Write;

/// Column headers for CSV output.
const COLUMN_HEADERS: [&str; 5] = ["position", "room", "start", "end", "description"];

/// List every reservation with its position.
#[derive(Args)]
pub struct ListCommand {
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Only list reservations for this room
    #[arg(long, value_name = "ROOM")]
    pub room: Option<String>,
}

/// Output format accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

/// One output row: a reservation and its position.
#[derive(Serialize)]
struct Row<'a> {
    position: usize,
    room: &'a str,
    start: String,
    end: String,
    description: &'a str,
}

impl<'a> Row<'a> {
    fn new(position: usize, reservation: &'a Reservation) -> Self {
        Self {
            position,
            room: reservation.room(),
            start: reservation.start().to_rfc3339(),
            end: reservation.end().to_rfc3339(),
            description: reservation.description(),
        }
    }
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut session = open_session(global)?;
        session.store.sort(SortOrder::RoomStart);

        let format = self
            .format
            .map_or_else(|| session.config.output_format(), OutputFormat::from);

        let rows: Vec<(usize, &Reservation)> = session
            .store
            .iter()
            .enumerate()
            .filter(|(_, r)| self.room.as_deref().map_or(true, |room| r.is_for_room(room)))
            .collect();

        match format {
            OutputFormat::Table => format_as_table(&rows),
            OutputFormat::Json => format_as_json(&rows),
            OutputFormat::Csv => format_as_csv(&rows),
        }
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(rows: &[(usize, &Reservation)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for &(position, res) in rows {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}",
            position,
            res.room(),
            format_instant(res.start()),
            format_instant(res.end()),
            if res.description().is_empty() {
                "-"
            } else {
                res.description()
            },
        )?;
    }

    Ok(())
}

/// Format reservations as JSON.
fn format_as_json(rows: &[(usize, &Reservation)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_rows: Vec<Row<'_>> = rows.iter().map(|&(p, r)| Row::new(p, r)).collect();
    serde_json::to_writer_pretty(&mut handle, &json_rows).map_err(std::io::Error::other)?;
    writeln!(handle)?;

    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Format reservations as CSV.
fn format_as_csv(rows: &[(usize, &Reservation)]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let handle = stdout.lock();
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(handle);

    writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    for &(position, res) in rows {
        writer.serialize(Row::new(position, res)).map_err(csv_error)?;
    }
    writer.flush()?;

    Ok(())
}
