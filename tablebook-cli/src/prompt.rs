//! Prompters connecting the reservation workflow to the terminal and to
//! command-line arguments.

use std::collections::HashMap;
use std::io::{BufRead, Write};

use tablebook::workflow::Prompter;
use tablebook::{Error, Field, Result, ValidationError};

/// Interactive prompter reading answers line by line.
///
/// Invalid values are asked for again; the re-entry message comes with the
/// next `ask`.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    /// Creates a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Shows `message` and reads one line, without its line ending.
    ///
    /// Returns `None` at end of input.
    pub fn read_line(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Writes a line of text.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask(&mut self, field: Field, message: &str) -> Result<String> {
        self.read_line(message)?.ok_or(Error::InputClosed { field })
    }

    fn reject(&mut self, field: Field, error: ValidationError) -> Result<()> {
        log::debug!("asking again for {field}: {error}");
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.say(message) {
            log::warn!("could not write to the terminal: {e}");
        }
    }
}

/// Non-interactive prompter answering from command-line arguments.
///
/// The first invalid value ends the operation.
#[derive(Debug, Default)]
pub struct ArgsPrompter {
    values: HashMap<Field, String>,
}

impl ArgsPrompter {
    /// Creates a prompter with no values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supplies the value for `field`.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }
}

impl Prompter for ArgsPrompter {
    fn ask(&mut self, field: Field, _message: &str) -> Result<String> {
        self.values
            .get(&field)
            .cloned()
            .ok_or(Error::InputClosed { field })
    }

    fn reject(&mut self, _field: Field, error: ValidationError) -> Result<()> {
        Err(error.into())
    }

    fn notify(&mut self, message: &str) {
        log::info!("{message}");
    }
}
