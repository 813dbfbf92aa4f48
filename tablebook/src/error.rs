//! Error types for the tablebook library.
//!
//! This module provides the error hierarchy for every operation in the
//! library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::availability::UnavailableReason;
use crate::validation::{Field, ValidationError};

/// Result type alias for operations that may fail with a tablebook error.
///
/// # Examples
///
/// ```
/// use tablebook::{Error, Result};
///
/// fn example_operation() -> Result<u8> {
///     Ok(4)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablebook library.
///
/// Validation failures are recoverable (the workflow asks again), duplicate
/// names, missing reservations and exhausted slots end the current operation,
/// and everything touching the store file is fatal for the session.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw field value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A reservation with this name already exists.
    #[error("there is already a reservation for {name}")]
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// No reservation exists for this name.
    #[error("no reservation found for {name}")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The requested slot cannot hold the party.
    #[error("no availability: {reason}")]
    NoAvailability {
        /// Why the slot was rejected.
        reason: UnavailableReason,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store file does not exist and auto-creation is disabled.
    #[error("reservation store not found: {}", path.display())]
    StoreNotFound {
        /// The expected location of the store file.
        path: PathBuf,
    },

    /// The store file exists but its content is not a valid reservation document.
    #[error("reservation store {} is corrupt: {details}", path.display())]
    StoreCorrupt {
        /// The store file.
        path: PathBuf,
        /// What was wrong with it.
        details: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value is out of range or malformed.
    #[error("invalid configuration for '{field}': {message}")]
    InvalidConfig {
        /// The offending setting.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// A field was rejected more times than the configured retry limit allows.
    #[error("gave up on {field} after {attempts} invalid attempt(s)")]
    RetriesExhausted {
        /// The field being requested.
        field: Field,
        /// How many values were rejected.
        attempts: u32,
    },

    /// Input ended while a field was being requested.
    #[error("input closed while waiting for {field}")]
    InputClosed {
        /// The field being requested.
        field: Field,
    },
}

impl Error {
    /// Check if the error comes from field validation and can be retried.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablebook::{Error, ValidationError, Field};
    ///
    /// let err = Error::from(ValidationError::InvalidFormat {
    ///     field: Field::Name,
    ///     input: "a".to_string(),
    /// });
    /// assert!(err.is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the error means the store file cannot be used at all.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Io(_)
                | Self::Serialization(_)
                | Self::StoreNotFound { .. }
                | Self::StoreCorrupt { .. }
        )
    }
}
