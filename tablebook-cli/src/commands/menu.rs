//! Interactive menu.
//!
//! Shows the five menu choices, runs the chosen operation against the
//! terminal, prints the result and says goodbye.

use crate::error::CliError;
use crate::prompt::TerminalPrompter;
use crate::utils::{load_configuration, open_store, GlobalOptions};
use clap::Args;
use std::io::{self, BufRead, Write};
use tablebook::store::ReservationStore;
use tablebook::workflow::Outcome;
use tablebook::{Clock, ReservationWorkflow};

/// The menu shown on start.
pub const MENU: &str = "\nWelcome to our restaurant! How can we help you?\n\
    (Please select one of the options by typing 'a', 'b', 'c', 'd' or 'e' and press enter):\n\
    a. Create a new reservation.\n\
    b. Show my reservation details.\n\
    c. Update my reservation details.\n\
    d. Cancel my reservation.\n\
    e. Exit.\n\
    : ";

/// Closing line of every menu session.
pub const FAREWELL: &str = "Thanks and see you soon!";

/// Choose an action from the interactive menu.
#[derive(Args, Default)]
pub struct MenuCommand {}

/// A menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// a. Create a new reservation.
    Create,
    /// b. Show my reservation details.
    Show,
    /// c. Update my reservation details.
    Update,
    /// d. Cancel my reservation.
    Cancel,
    /// e. Exit.
    Exit,
}

impl Choice {
    /// Parses a menu letter, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "a" => Some(Self::Create),
            "b" => Some(Self::Show),
            "c" => Some(Self::Update),
            "d" => Some(Self::Cancel),
            "e" => Some(Self::Exit),
            _ => None,
        }
    }
}

impl MenuCommand {
    /// Execute the menu command on stdin and stdout.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let store = open_store(&config)?;
        let mut workflow = ReservationWorkflow::new(store, &config);

        let stdin = io::stdin();
        let stdout = io::stdout();
        run(&mut workflow, stdin.lock(), stdout.lock())
    }
}

/// Runs one menu session.
pub fn run<S, C, R, W>(
    workflow: &mut ReservationWorkflow<S, C>,
    input: R,
    output: W,
) -> Result<(), CliError>
where
    S: ReservationStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut prompter = TerminalPrompter::new(input, output);

    let choice = prompter.read_line(MENU)?;
    let outcome = match choice.as_deref().map(Choice::parse) {
        Some(Some(Choice::Create)) => Some(workflow.create(&mut prompter)?),
        Some(Some(Choice::Show)) => Some(workflow.show(&mut prompter)?),
        Some(Some(Choice::Update)) => Some(workflow.update(&mut prompter)?),
        Some(Some(Choice::Cancel)) => Some(workflow.cancel(&mut prompter)?),
        Some(Some(Choice::Exit)) | None => None,
        Some(None) => {
            prompter.say("The option entered is not correct")?;
            None
        }
    };

    if let Some(outcome) = outcome {
        prompter.say(&outcome.message())?;
        if let Outcome::Confirmed(reservation) = &outcome {
            prompter.say(&reservation.summary())?;
        }
    }
    prompter.say(FAREWELL)?;
    Ok(())
}
