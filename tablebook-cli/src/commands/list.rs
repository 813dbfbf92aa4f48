//! List command implementation.
//!
//! This module implements the `list` command, which displays all
//! reservations in stored (chronological) order as a table, JSON or CSV.

use crate::error::CliError;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::{Args, ValueEnum};
use std::io::Write;
use tablebook::reservation::{DATE_FORMAT, TIME_FORMAT};
use tablebook::store::ReservationStore;
use tablebook::Reservation;

/// Column headers for table output.
const COLUMN_HEADERS: [&str; 4] = ["name", "date", "time", "people"];

/// List all reservations.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "TABLEBOOK_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(&config)?;
        let reservations = store.list_all().map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let handle = stdout.lock();
        match self.format {
            OutputFormat::Table => format_as_table(&reservations, handle),
            OutputFormat::Json => format_as_json(&reservations, handle),
            OutputFormat::Csv => format_as_csv(&reservations, handle),
        }
    }
}

/// Format reservations as a human-readable table.
fn format_as_table(reservations: &[Reservation], mut out: impl Write) -> Result<(), CliError> {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for res in reservations {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            res.name(),
            res.date().format(DATE_FORMAT),
            res.time().format(TIME_FORMAT),
            res.people(),
        )?;
    }

    Ok(())
}

/// Format reservations as a JSON array of store records.
fn format_as_json(reservations: &[Reservation], mut out: impl Write) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut out, reservations)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(out)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Format reservations as CSV with a header row.
fn format_as_csv(reservations: &[Reservation], out: impl Write) -> Result<(), CliError> {
    let mut writer = csv::Writer::from_writer(out);
    for res in reservations {
        writer.serialize(res).map_err(csv_error)?;
    }
    if reservations.is_empty() {
        writer.write_record(COLUMN_HEADERS).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}
