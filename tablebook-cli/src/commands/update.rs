//! Update command implementation.
//!
//! An update cancels the existing reservation and creates a new one from
//! the given values. Malformed values are rejected before anything is
//! cancelled; if the new reservation is a duplicate or finds no
//! availability, the old one stays cancelled.

use crate::error::CliError;
use crate::prompt::ArgsPrompter;
use crate::utils::{load_configuration, open_store, report, GlobalOptions};
use clap::Args;
use tablebook::{Error, Field, ReservationWorkflow};

/// Replace the reservation for a name.
#[derive(Args)]
pub struct UpdateCommand {
    /// Reservation holder (first and last name)
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// New reservation date (dd-mm-yyyy)
    #[arg(long, value_name = "DATE")]
    pub date: String,

    /// New reservation slot (hh:mm, 24h format)
    #[arg(long, value_name = "TIME")]
    pub time: String,

    /// New number of people attending
    #[arg(long, value_name = "N")]
    pub people: String,
}

impl UpdateCommand {
    /// Execute the update command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let mut workflow = ReservationWorkflow::new(store, &config);
        let validator = workflow.validator();
        validator.validate_name(&self.name).map_err(Error::from)?;
        let date = validator.validate_date(&self.date).map_err(Error::from)?;
        validator
            .validate_time(date, &self.time)
            .map_err(Error::from)?;
        validator
            .validate_people(&self.people)
            .map_err(Error::from)?;

        let mut prompter = ArgsPrompter::new()
            .with(Field::Name, self.name)
            .with(Field::Date, self.date)
            .with(Field::Time, self.time)
            .with(Field::People, self.people);
        report(&workflow.update(&mut prompter)?)
    }
}
