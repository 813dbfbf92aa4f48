//! Parsing and checking of raw reservation fields.
//!
//! Every function here is pure: it takes the string a person typed (and, for
//! times, the date already chosen) and returns either a well-typed value or a
//! [`ValidationError`] saying why the input was refused. Asking again is the
//! caller's business.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

use crate::config::RestaurantConfig;
use crate::reservation::{Name, PartySize, TIME_FORMAT};

/// Longest accepted word in a name, in characters.
pub const MAX_NAME_WORD_LEN: usize = 20;

/// Non-ASCII letters accepted in names, besides their upper-case forms.
const ACCENTED_LETTERS: &[char] = &['ñ', 'á', 'é', 'í', 'ó', 'ú'];

/// The reservation field a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Holder name.
    Name,
    /// Reservation date.
    Date,
    /// Reservation time slot.
    Time,
    /// Number of people.
    People,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Date => write!(f, "date"),
            Self::Time => write!(f, "time"),
            Self::People => write!(f, "number of people"),
        }
    }
}

/// Why a raw field value was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input does not have the expected shape.
    #[error("invalid {field}: '{input}'")]
    InvalidFormat {
        /// The field being validated.
        field: Field,
        /// The raw input.
        input: String,
    },

    /// The date is earlier than today.
    #[error("the date {date} has already passed")]
    PastDate {
        /// The parsed date.
        date: NaiveDate,
    },

    /// The slot on that date is earlier than now.
    #[error("the time {} on {date} has already passed", time.format(TIME_FORMAT))]
    PastTime {
        /// The reservation date.
        date: NaiveDate,
        /// The parsed slot.
        time: NaiveTime,
    },
}

impl ValidationError {
    /// Returns the field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::InvalidFormat { field, .. } => *field,
            Self::PastDate { .. } => Field::Date,
            Self::PastTime { .. } => Field::Time,
        }
    }

    fn invalid(field: Field, input: &str) -> Self {
        Self::InvalidFormat {
            field,
            input: input.to_string(),
        }
    }
}

/// Source of the current local date and time.
pub trait Clock {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Returns today's date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Clock reading the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::{Clock, FixedClock};
///
/// let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(13, 0, 0).unwrap();
/// let clock = FixedClock::new(now);
/// assert_eq!(clock.today(), now.date());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    /// Creates a clock that always reports `now`.
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Parses a two-word name, returning it title-cased.
///
/// Words are 1 to 20 letters (ASCII or `ñ á é í ó ú`, any case) separated by
/// exactly one space.
///
/// # Errors
///
/// Returns `InvalidFormat` for any other shape.
pub fn parse_name(raw: &str) -> Result<Name, ValidationError> {
    let mut words = raw.split(' ');
    let (Some(first), Some(last), None) = (words.next(), words.next(), words.next()) else {
        return Err(ValidationError::invalid(Field::Name, raw));
    };

    if !is_name_word(first) || !is_name_word(last) {
        return Err(ValidationError::invalid(Field::Name, raw));
    }

    Ok(Name::from_normalized(format!(
        "{} {}",
        title_case(first),
        title_case(last)
    )))
}

fn is_name_word(word: &str) -> bool {
    let len = word.chars().count();
    (1..=MAX_NAME_WORD_LEN).contains(&len) && word.chars().all(is_name_letter)
}

fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ACCENTED_LETTERS.contains(&c)
        || c.to_lowercase().any(|lower| ACCENTED_LETTERS.contains(&lower))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(head) => head
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parses `dd-mm-yyyy` (1-2 digit day and month, 4-digit year).
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let mut parts = raw.split('-');
    let (Some(day), Some(month), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let digits = |s: &str, lens: std::ops::RangeInclusive<usize>| {
        lens.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(day, 1..=2) || !digits(month, 1..=2) || !digits(year, 4..=4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Field validator bound to a restaurant's slots and capacity.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tablebook::{FixedClock, RestaurantConfig, ValidationError, Validator};
///
/// let now = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(13, 0, 0).unwrap();
/// let validator = Validator::with_clock(&RestaurantConfig::default(), FixedClock::new(now));
///
/// assert_eq!(validator.validate_name("dani berrocal").unwrap().as_str(), "Dani Berrocal");
/// assert!(matches!(
///     validator.validate_date("17-12-2023"),
///     Err(ValidationError::PastDate { .. })
/// ));
/// assert_eq!(validator.validate_people("16").unwrap().value(), 16);
/// ```
#[derive(Debug, Clone)]
pub struct Validator<C: Clock = SystemClock> {
    slots: Vec<NaiveTime>,
    max_people: u16,
    clock: C,
}

impl Validator<SystemClock> {
    /// Creates a validator using the system clock.
    #[must_use]
    pub fn new(config: &RestaurantConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Validator<C> {
    /// Creates a validator with an explicit clock.
    #[must_use]
    pub fn with_clock(config: &RestaurantConfig, clock: C) -> Self {
        Self {
            slots: config.slot_times(),
            max_people: config.restaurant_capacity(),
            clock,
        }
    }

    /// Returns the accepted slots in configuration order.
    #[must_use]
    pub fn slots(&self) -> &[NaiveTime] {
        &self.slots
    }

    /// Returns the largest accepted party size.
    #[must_use]
    pub const fn max_people(&self) -> u16 {
        self.max_people
    }

    /// Returns the clock used for temporal checks.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Validates a holder name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` unless the input is two words of 1-20 letters.
    pub fn validate_name(&self, raw: &str) -> Result<Name, ValidationError> {
        parse_name(raw)
    }

    /// Validates a `dd-mm-yyyy` date that is not in the past.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for a malformed or impossible date and
    /// `PastDate` for a date before today.
    pub fn validate_date(&self, raw: &str) -> Result<NaiveDate, ValidationError> {
        let date = parse_date(raw).ok_or_else(|| ValidationError::invalid(Field::Date, raw))?;
        if date < self.clock.today() {
            return Err(ValidationError::PastDate { date });
        }
        Ok(date)
    }

    /// Validates an `HH:MM` slot for the given date.
    ///
    /// The input must spell one of the configured slots exactly. On today's
    /// date (or any earlier one) the slot must not be before the current time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for anything that is not a slot and `PastTime`
    /// for a slot that has already gone by.
    pub fn validate_time(&self, date: NaiveDate, raw: &str) -> Result<NaiveTime, ValidationError> {
        let time = self
            .slots
            .iter()
            .copied()
            .find(|slot| slot.format(TIME_FORMAT).to_string() == raw)
            .ok_or_else(|| ValidationError::invalid(Field::Time, raw))?;

        let now = self.clock.now();
        if date <= now.date() && time < now.time() {
            return Err(ValidationError::PastTime { date, time });
        }
        Ok(time)
    }

    /// Validates a party size between 1 and the restaurant capacity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for anything but plain decimal digits in range.
    pub fn validate_people(&self, raw: &str) -> Result<PartySize, ValidationError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::invalid(Field::People, raw));
        }
        match raw.parse::<u16>() {
            Ok(n) if n <= self.max_people => {
                PartySize::try_from(n).map_err(|_| ValidationError::invalid(Field::People, raw))
            }
            _ => Err(ValidationError::invalid(Field::People, raw)),
        }
    }
}

#[cfg(test)]
mod proptests;

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> FixedClock {
        FixedClock::new(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(h, min, 0)
                .unwrap(),
        )
    }

    fn validator() -> Validator<FixedClock> {
        Validator::with_clock(&RestaurantConfig::default(), at(2025, 6, 1, 13, 0))
    }

    #[test]
    fn test_validate_name_accepts() {
        let v = validator();
        assert_eq!(v.validate_name("Dani Berrocal").unwrap().as_str(), "Dani Berrocal");
        assert_eq!(v.validate_name("Joe Gómez").unwrap().as_str(), "Joe Gómez");
        assert_eq!(
            v.validate_name("martiño rodríguez").unwrap().as_str(),
            "Martiño Rodríguez"
        );
        assert_eq!(v.validate_name("ÁLVARO ÑÚÑEZ").unwrap().as_str(), "Álvaro Ñúñez");
    }

    #[test]
    fn test_validate_name_rejects() {
        let v = validator();
        for raw in [
            "a",
            "Electroencefalografista Esternocleidomastoideo",
            "Homer J. Simpson",
            "- -",
            "",
            "Ana  Lopez",
            " Ana Lopez",
            "Ana Lopez ",
            "Ana Lop3z",
            "Ana\tLopez",
            "Anaïs Lopez",
        ] {
            let err = v.validate_name(raw).unwrap_err();
            assert_eq!(err.field(), Field::Name, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_name_word_length_boundary() {
        let v = validator();
        let twenty = "a".repeat(20);
        let twenty_one = "a".repeat(21);
        assert!(v.validate_name(&format!("{twenty} Lopez")).is_ok());
        assert!(v.validate_name(&format!("{twenty_one} Lopez")).is_err());
    }

    #[test]
    fn test_validate_date_accepts() {
        let v = validator();
        assert_eq!(
            v.validate_date("17-12-2025").unwrap(),
            NaiveDate::from_ymd_opt(2025, 12, 17).unwrap()
        );
        assert_eq!(
            v.validate_date("4-8-2027").unwrap(),
            NaiveDate::from_ymd_opt(2027, 8, 4).unwrap()
        );
        // today is allowed
        assert!(v.validate_date("01-06-2025").is_ok());
    }

    #[test]
    fn test_validate_date_past() {
        let v = validator();
        assert_eq!(
            v.validate_date("17-12-2023").unwrap_err(),
            ValidationError::PastDate {
                date: NaiveDate::from_ymd_opt(2023, 12, 17).unwrap()
            }
        );
        assert!(matches!(
            v.validate_date("31-05-2025"),
            Err(ValidationError::PastDate { .. })
        ));
    }

    #[test]
    fn test_validate_date_invalid_format() {
        let v = validator();
        for raw in [
            "35-12-2026",
            "30-02-2026",
            "17.12.2023",
            "hello, world",
            "17-12-26",
            "017-12-2026",
            "17-12-2026-1",
            "+1-12-2026",
            "",
        ] {
            assert!(
                matches!(
                    v.validate_date(raw),
                    Err(ValidationError::InvalidFormat { field: Field::Date, .. })
                ),
                "{raw:?} should be an invalid format"
            );
        }
    }

    #[test]
    fn test_validate_time_slots() {
        let v = validator();
        let future = NaiveDate::from_ymd_opt(2025, 12, 23).unwrap();
        for (raw, hour) in [("12:00", 12), ("14:00", 14), ("20:00", 20), ("22:00", 22)] {
            assert_eq!(
                v.validate_time(future, raw).unwrap(),
                NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
            );
        }
    }

    #[test]
    fn test_validate_time_invalid_format() {
        let v = validator();
        let future = NaiveDate::from_ymd_opt(2025, 12, 23).unwrap();
        for raw in ["14:30", "22h", "11 PM", "20-00", "12:0", "9:00", "", " 12:00"] {
            assert!(
                matches!(
                    v.validate_time(future, raw),
                    Err(ValidationError::InvalidFormat { field: Field::Time, .. })
                ),
                "{raw:?} should be an invalid format"
            );
        }
    }

    #[test]
    fn test_validate_time_today() {
        // clock is 2025-06-01 13:00
        let v = validator();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(matches!(
            v.validate_time(today, "12:00"),
            Err(ValidationError::PastTime { .. })
        ));
        assert!(v.validate_time(today, "14:00").is_ok());
    }

    #[test]
    fn test_validate_time_on_past_date() {
        let v = validator();
        let past = NaiveDate::from_ymd_opt(2023, 12, 23).unwrap();
        assert!(matches!(
            v.validate_time(past, "12:00"),
            Err(ValidationError::PastTime { .. })
        ));
    }

    #[test]
    fn test_validate_time_exact_now_is_accepted() {
        let v = Validator::with_clock(&RestaurantConfig::default(), at(2025, 6, 1, 14, 0));
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(v.validate_time(today, "14:00").is_ok());
    }

    #[test]
    fn test_validate_people() {
        let v = validator();
        for n in 1..=16u16 {
            assert_eq!(v.validate_people(&n.to_string()).unwrap().value(), n);
        }
        for raw in ["0", "17", "20", "-2", "+3", "seventeen", "", " 4", "4.0", "00"] {
            assert!(v.validate_people(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn test_validate_people_follows_capacity() {
        let config = RestaurantConfig {
            tables: 5,
            ..RestaurantConfig::default()
        };
        let v = Validator::with_clock(&config, at(2025, 6, 1, 13, 0));
        assert!(v.validate_people("20").is_ok());
        assert!(v.validate_people("21").is_err());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::PastTime {
            date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        };
        let display = format!("{err}");
        assert!(display.contains("12:00"));
        assert!(display.contains("2025-06-01"));
    }
}
