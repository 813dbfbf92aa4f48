#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablebook
//!
//! A library for managing restaurant table reservations.
//!
//! This library validates human-entered reservation fields, decides whether
//! a time slot still has tables for a party, and keeps accepted
//! reservations in a chronologically ordered JSON store.
//!
//! ## Core Types
//!
//! - [`Reservation`], [`Name`] and [`PartySize`]: the reservation record
//! - [`Validator`] and [`Clock`]: field validation against the current time
//! - [`AvailabilityEngine`](availability::AvailabilityEngine): table allocation
//! - [`ReservationStore`](store::ReservationStore): persistence
//! - [`ReservationWorkflow`](workflow::ReservationWorkflow): create / show /
//!   update / cancel
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tablebook::{FixedClock, RestaurantConfig, Validator};
//!
//! let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(13, 0, 0).unwrap();
//! let validator = Validator::with_clock(&RestaurantConfig::default(), FixedClock::new(now));
//!
//! let name = validator.validate_name("ana lopez").unwrap();
//! let date = validator.validate_date("17-12-2026").unwrap();
//! let time = validator.validate_time(date, "20:00").unwrap();
//! let people = validator.validate_people("4").unwrap();
//!
//! assert_eq!(name.as_str(), "Ana Lopez");
//! assert_eq!(people.value(), 4);
//! assert_eq!(time.to_string(), "20:00:00");
//! ```

pub mod availability;
pub mod config;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod store;
pub mod validation;
pub mod workflow;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, RestaurantConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{Name, PartySize, Reservation};
pub use store::{JsonStore, ReservationStore, StoreConfig};
pub use validation::{Clock, Field, FixedClock, SystemClock, ValidationError, Validator};
pub use workflow::{Outcome, Prompter, ReservationWorkflow};
