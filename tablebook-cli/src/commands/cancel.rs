//! Cancel command implementation.

use crate::error::CliError;
use crate::prompt::ArgsPrompter;
use crate::utils::{load_configuration, open_store, report, GlobalOptions};
use clap::Args;
use tablebook::{Field, ReservationWorkflow};

/// Cancel the reservation for a name.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation holder (first and last name)
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(&config)?;

        let mut workflow = ReservationWorkflow::new(store, &config);
        let mut prompter = ArgsPrompter::new().with(Field::Name, self.name);
        report(&workflow.cancel(&mut prompter)?)
    }
}
