//! Reservation types.
//!
//! This module provides the reservation record and the value types its
//! fields are made of. Values of these types are only ever produced by the
//! [`Validator`](crate::Validator) or by loading a store file, so a
//! `Reservation` in memory always satisfies the field constraints.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::validation::{parse_name, Field, ValidationError};

/// Date format used in store files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time format used in store files and slot lists.
pub const TIME_FORMAT: &str = "%H:%M";

/// A reservation holder's name: two title-cased words.
///
/// # Examples
///
/// ```
/// use tablebook::Name;
///
/// let name = Name::try_from("martiño rodríguez").unwrap();
/// assert_eq!(name.as_str(), "Martiño Rodríguez");
///
/// assert!(Name::try_from("Homer J. Simpson").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wraps an already normalized name.
    pub(crate) fn from_normalized(name: String) -> Self {
        Self(name)
    }
}

impl TryFrom<&str> for Name {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_name(value)
    }
}

impl TryFrom<String> for Name {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_name(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of people attending a reservation (at least one).
///
/// The upper bound depends on the restaurant's capacity and is enforced by
/// the validator, not by this type.
///
/// # Examples
///
/// ```
/// use tablebook::PartySize;
///
/// let size = PartySize::try_from(4).unwrap();
/// assert_eq!(size.value(), 4);
/// assert!(PartySize::try_from(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct PartySize(u16);

impl PartySize {
    /// The smallest valid party.
    pub const MIN: u16 = 1;

    /// Returns the number of people.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for PartySize {
    type Error = ValidationError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        if value < Self::MIN {
            Err(ValidationError::InvalidFormat {
                field: Field::People,
                input: value.to_string(),
            })
        } else {
            Ok(Self(value))
        }
    }
}

impl From<PartySize> for u16 {
    fn from(size: PartySize) -> Self {
        size.0
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A restaurant table reservation.
///
/// Serializes to the store record shape
/// `{"name": "...", "date": "YYYY-MM-DD", "time": "HH:MM", "people": n}`.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tablebook::{Name, PartySize, Reservation};
///
/// let reservation = Reservation::new(
///     Name::try_from("ana lopez").unwrap(),
///     NaiveDate::from_ymd_opt(2026, 12, 17).unwrap(),
///     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
///     PartySize::try_from(2).unwrap(),
/// );
///
/// assert_eq!(
///     reservation.to_string(),
///     "Reservation for 2 people in the name of Ana Lopez \
///      for Thursday, 17 December, 2026 at 12 PM."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    name: Name,
    #[serde(with = "date_format")]
    date: NaiveDate,
    #[serde(with = "time_format")]
    time: NaiveTime,
    people: PartySize,
}

impl Reservation {
    /// Creates a reservation from validated parts.
    #[must_use]
    pub const fn new(name: Name, date: NaiveDate, time: NaiveTime, people: PartySize) -> Self {
        Self {
            name,
            date,
            time,
            people,
        }
    }

    /// Returns the reservation holder's name.
    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the reservation date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the reserved slot.
    #[must_use]
    pub const fn time(&self) -> NaiveTime {
        self.time
    }

    /// Returns the party size.
    #[must_use]
    pub const fn people(&self) -> PartySize {
        self.people
    }

    /// Returns the `(date, time)` pair identifying the reserved slot.
    ///
    /// Two reservations compete for the same tables exactly when their slot
    /// keys are equal. The key also defines the store's chronological order.
    #[must_use]
    pub const fn slot_key(&self) -> (NaiveDate, NaiveTime) {
        (self.date, self.time)
    }

    /// Returns the human-readable one-line summary used in confirmations.
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation for {} people in the name of {} for {} at {}.",
            self.people,
            self.name,
            self.date.format("%A, %d %B, %Y"),
            self.time.format("%I %p"),
        )
    }
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod time_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod proptests;
