//! Create command implementation.
//!
//! This module implements the `create` command, which books a table from
//! command-line arguments.

use crate::error::CliError;
use crate::prompt::ArgsPrompter;
use crate::utils::{load_configuration, open_store, report, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use tablebook::workflow::TextConfirmation;
use tablebook::{Field, ReservationWorkflow};

/// Create a reservation.
#[derive(Args)]
pub struct CreateCommand {
    /// Reservation holder (first and last name)
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Reservation date (dd-mm-yyyy)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// Reservation slot (hh:mm, 24h format)
    #[arg(long, value_name = "TIME")]
    pub time: String,

    /// Number of people attending
    #[arg(long, value_name = "N")]
    pub people: String,

    /// Write a confirmation document to this file
    #[arg(long, value_name = "PATH")]
    pub confirmation: Option<PathBuf>,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load configuration
        let config = load_configuration(global)?;

        // 2. Open store
        let store = open_store(&config)?;

        // 3. Run the workflow on the given values
        let mut workflow = ReservationWorkflow::new(store, &config);
        if let Some(path) = self.confirmation {
            workflow = workflow.with_renderer(TextConfirmation::new(path));
        }

        let mut prompter = ArgsPrompter::new()
            .with(Field::Name, self.name)
            .with(Field::Date, self.date)
            .with(Field::Time, self.time)
            .with(Field::People, self.people);
        let outcome = workflow.create(&mut prompter)?;

        // 4. Report
        report(&outcome)
    }
}
