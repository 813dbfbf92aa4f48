//! Reservation workflow.
//!
//! Drives the create / show / update / cancel operations: requests each
//! field through a [`Prompter`], validates it (asking again while it is
//! invalid), checks availability and commits to the store. Every operation
//! ends in an [`Outcome`]; only store, I/O and input failures are errors.

mod confirmation;
mod prompt;

pub use confirmation::{ConfirmationRenderer, TextConfirmation, CONFIRMATION_TITLE};
pub use prompt::{request_message, retry_message, FieldRequest, Prompter};

use crate::availability::{Availability, AvailabilityEngine, UnavailableReason};
use crate::config::RestaurantConfig;
use crate::error::{Error, Result};
use crate::reservation::{Name, Reservation};
use crate::store::ReservationStore;
use crate::validation::{Clock, Field, SystemClock, Validator};

/// Message shown between the cancellation and the creation of an update.
pub const UPDATE_MESSAGE: &str = "Please, enter the new reservation details: ";

/// How an operation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The reservation was stored.
    Confirmed(Reservation),
    /// The stored reservation for the requested name.
    Found(Reservation),
    /// The reservation for this name was removed.
    Cancelled(Name),
    /// No reservation exists for this name.
    NotFound(Name),
    /// A reservation for this name already exists.
    DuplicateName(Name),
    /// The requested slot cannot take the party.
    NoAvailability {
        /// The rejected candidate.
        reservation: Reservation,
        /// Why it was rejected.
        reason: UnavailableReason,
    },
}

impl Outcome {
    /// Returns the message shown to the user.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::workflow::Outcome;
    /// use tablebook::Name;
    ///
    /// let outcome = Outcome::NotFound(Name::try_from("Ana Lopez").unwrap());
    /// assert_eq!(outcome.message(), "There is no reservation with that name.");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Confirmed(_) => "Reservation confirmed! You will shortly receive a \
                                   reminder document with the appointment details."
                .to_string(),
            Self::Found(reservation) => reservation.summary(),
            Self::Cancelled(_) => "Your reservation has been cancelled.".to_string(),
            Self::NotFound(_) => "There is no reservation with that name.".to_string(),
            Self::DuplicateName(_) => "There is already a reservation with that name.".to_string(),
            Self::NoAvailability { .. } => {
                "Sorry, we do not have availability for the data you have provided.".to_string()
            }
        }
    }

    /// Returns `true` if the operation did what was asked.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Confirmed(_) | Self::Found(_) | Self::Cancelled(_))
    }
}

/// Runs reservation operations against a store.
pub struct ReservationWorkflow<S, C: Clock = SystemClock> {
    store: S,
    config: RestaurantConfig,
    validator: Validator<C>,
    engine: AvailabilityEngine,
    renderer: Option<Box<dyn ConfirmationRenderer>>,
}

impl<S: ReservationStore> ReservationWorkflow<S, SystemClock> {
    /// Creates a workflow validating dates against the system clock.
    #[must_use]
    pub fn new(store: S, config: &RestaurantConfig) -> Self {
        Self::with_clock(store, config, SystemClock)
    }
}

impl<S: ReservationStore, C: Clock> ReservationWorkflow<S, C> {
    /// Creates a workflow with an explicit clock.
    #[must_use]
    pub fn with_clock(store: S, config: &RestaurantConfig, clock: C) -> Self {
        Self {
            store,
            config: config.clone(),
            validator: Validator::with_clock(config, clock),
            engine: AvailabilityEngine::from_config(config),
            renderer: None,
        }
    }

    /// Renders a confirmation after every successful creation.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl ConfirmationRenderer + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the workflow, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Returns the validator in use.
    pub fn validator(&self) -> &Validator<C> {
        &self.validator
    }

    fn request(&self, field: Field) -> FieldRequest {
        FieldRequest::new(field, self.validator.max_people())
            .with_max_attempts(self.config.max_attempts)
    }

    fn request_name<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Name> {
        self.request(Field::Name)
            .run(prompter, |raw| self.validator.validate_name(raw))
    }

    /// Creates a reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if input fails, the retry limit is reached, or the
    /// store or confirmation cannot be written.
    pub fn create<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Outcome> {
        prompter.notify(RestaurantConfig::name_constraints());
        let name = self.request_name(prompter)?;
        if self.store.contains(&name)? {
            return Ok(Outcome::DuplicateName(name));
        }

        let date = self
            .request(Field::Date)
            .run(prompter, |raw| self.validator.validate_date(raw))?;
        prompter.notify(&self.config.slot_constraints());
        let time = self
            .request(Field::Time)
            .run(prompter, |raw| self.validator.validate_time(date, raw))?;
        prompter.notify(&self.config.capacity_constraints());
        let people = self
            .request(Field::People)
            .run(prompter, |raw| self.validator.validate_people(raw))?;

        let candidate = Reservation::new(name, date, time, people);
        let existing = self.store.load()?;
        if let Availability::Unavailable { reason } = self.engine.check(&candidate, &existing) {
            log::debug!("rejecting {}: {reason}", candidate.name());
            return Ok(Outcome::NoAvailability {
                reservation: candidate,
                reason,
            });
        }

        match self.store.insert(candidate.clone()) {
            Ok(_) => {}
            Err(Error::DuplicateName { .. }) => {
                return Ok(Outcome::DuplicateName(candidate.name().clone()))
            }
            Err(e) => return Err(e),
        }
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&candidate)?;
        }
        Ok(Outcome::Confirmed(candidate))
    }

    /// Looks a reservation up by name.
    ///
    /// # Errors
    ///
    /// Returns an error if input fails or the store cannot be read.
    pub fn show<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Outcome> {
        let name = self.request_name(prompter)?;
        match self.store.find_by_name(&name) {
            Ok(reservation) => Ok(Outcome::Found(reservation)),
            Err(Error::NotFound { .. }) => Ok(Outcome::NotFound(name)),
            Err(e) => Err(e),
        }
    }

    /// Replaces a reservation: cancels it, then creates a new one.
    ///
    /// The cancellation result is passed to the prompter as a note and the
    /// creation always follows, so an update for an unknown name books a
    /// fresh reservation.
    ///
    /// # Errors
    ///
    /// Same as [`cancel`](Self::cancel) and [`create`](Self::create).
    pub fn update<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Outcome> {
        let cancelled = self.cancel(prompter)?;
        prompter.notify(&cancelled.message());
        prompter.notify(UPDATE_MESSAGE);
        self.create(prompter)
    }

    /// Cancels the reservation for a name.
    ///
    /// # Errors
    ///
    /// Returns an error if input fails or the store cannot be read or written.
    pub fn cancel<P: Prompter + ?Sized>(&mut self, prompter: &mut P) -> Result<Outcome> {
        let name = self.request_name(prompter)?;
        match self.store.remove(&name) {
            Ok(_) => Ok(Outcome::Cancelled(name)),
            Err(Error::NotFound { .. }) => Ok(Outcome::NotFound(name)),
            Err(e) => Err(e),
        }
    }
}
