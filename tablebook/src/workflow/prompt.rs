//! Field prompting and the validate-and-retry loop.

use crate::error::{Error, Result};
use crate::validation::{Field, ValidationError};

/// Source of raw field values and sink for user-facing messages.
///
/// The workflow never reads input itself; a terminal front end, a
/// command-line argument list or a test script all plug in here.
pub trait Prompter {
    /// Requests a raw value for `field`, showing `message`.
    ///
    /// # Errors
    ///
    /// Returns `InputClosed` if no more input is available, or any error
    /// the underlying source produces.
    fn ask(&mut self, field: Field, message: &str) -> Result<String>;

    /// Reports a rejected value.
    ///
    /// Returning `Ok` lets the request continue with another attempt;
    /// returning an error ends the operation with that error.
    ///
    /// # Errors
    ///
    /// Non-interactive prompters return the validation error itself.
    fn reject(&mut self, field: Field, error: ValidationError) -> Result<()>;

    /// Shows an informational message.
    fn notify(&mut self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn ask(&mut self, field: Field, message: &str) -> Result<String> {
        (**self).ask(field, message)
    }

    fn reject(&mut self, field: Field, error: ValidationError) -> Result<()> {
        (**self).reject(field, error)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// Where a field request stands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RequestState {
    /// Nothing asked yet.
    Initial,
    /// The last `rejected` values were invalid.
    Retrying { rejected: u32 },
}

/// Request for a single field: ask, validate, and ask again until valid.
///
/// # Examples
///
/// ```
/// use tablebook::validation::{Field, ValidationError};
/// use tablebook::workflow::{FieldRequest, Prompter};
///
/// struct Script(Vec<&'static str>);
///
/// impl Prompter for Script {
///     fn ask(&mut self, _: Field, _: &str) -> tablebook::Result<String> {
///         Ok(self.0.remove(0).to_string())
///     }
///     fn reject(&mut self, _: Field, _: ValidationError) -> tablebook::Result<()> {
///         Ok(())
///     }
///     fn notify(&mut self, _: &str) {}
/// }
///
/// let mut script = Script(vec!["dani", "dani berrocal"]);
/// let name = FieldRequest::new(Field::Name, 16)
///     .run(&mut script, tablebook::validation::parse_name)
///     .unwrap();
/// assert_eq!(name.as_str(), "Dani Berrocal");
/// ```
#[derive(Debug, Clone)]
pub struct FieldRequest {
    field: Field,
    prompt: String,
    retry_prompt: String,
    max_attempts: Option<u32>,
}

impl FieldRequest {
    /// Creates an unlimited request for `field`.
    ///
    /// `max_people` is quoted in the party size re-entry message.
    #[must_use]
    pub fn new(field: Field, max_people: u16) -> Self {
        Self {
            field,
            prompt: request_message(field).to_string(),
            retry_prompt: retry_message(field, max_people),
            max_attempts: None,
        }
    }

    /// Gives up after `max_attempts` rejected values (`None` for never).
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the field being requested.
    #[must_use]
    pub const fn field(&self) -> Field {
        self.field
    }

    /// Asks until `validate` accepts a value.
    ///
    /// # Errors
    ///
    /// Returns whatever the prompter returns from `ask` or `reject`, and
    /// `RetriesExhausted` once the attempt limit is reached.
    pub fn run<T, P, F>(&self, prompter: &mut P, mut validate: F) -> Result<T>
    where
        P: Prompter + ?Sized,
        F: FnMut(&str) -> std::result::Result<T, ValidationError>,
    {
        let mut state = RequestState::Initial;
        loop {
            let message = match state {
                RequestState::Initial => &self.prompt,
                RequestState::Retrying { .. } => &self.retry_prompt,
            };
            let raw = prompter.ask(self.field, message)?;

            let error = match validate(raw.trim_end_matches(['\r', '\n'])) {
                Ok(value) => return Ok(value),
                Err(error) => error,
            };

            let rejected = match state {
                RequestState::Initial => 1,
                RequestState::Retrying { rejected } => rejected + 1,
            };
            log::debug!("rejected {} (attempt {rejected}): {error}", self.field);
            prompter.reject(self.field, error)?;

            if matches!(self.max_attempts, Some(max) if rejected >= max) {
                return Err(Error::RetriesExhausted {
                    field: self.field,
                    attempts: rejected,
                });
            }
            state = RequestState::Retrying { rejected };
        }
    }
}

/// The first prompt for a field.
#[must_use]
pub const fn request_message(field: Field) -> &'static str {
    match field {
        Field::Name => "Enter the name of the reservation (first and last): ",
        Field::Date => "Enter the date of the reservation (dd-mm-yyyy): ",
        Field::Time => "Enter the time of the reservation (hh:mm, 24h format): ",
        Field::People => "Enter the number of people attending: ",
    }
}

/// The prompt shown after a rejected value.
#[must_use]
pub fn retry_message(field: Field, max_people: u16) -> String {
    match field {
        Field::Name => "Invalid name. Please, re-enter your name (first and last): ".to_string(),
        Field::Date => "Invalid date. Please, re-enter the date (dd-mm-yyyy): ".to_string(),
        Field::Time => {
            "Invalid time. Please, re-enter the time (hh:mm, 24h format): ".to_string()
        }
        Field::People => format!(
            "Invalid number. Please, re-enter the number of people \
             (type a numeric number between 1 and {max_people}): "
        ),
    }
}
