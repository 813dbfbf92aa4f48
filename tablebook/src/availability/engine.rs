//! Table availability decisions.
//!
//! The engine looks at the reservations already booked for a candidate's
//! exact `(date, time)` slot, counts the tables they occupy, and decides
//! whether the candidate's party still fits.

use std::fmt;

use crate::availability::buckets::TableBuckets;
use crate::config::RestaurantConfig;
use crate::reservation::Reservation;

/// Why a slot cannot take a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Every table in the slot is taken.
    NoTablesLeft,
    /// The party needs more seats than the remaining tables offer.
    OverCapacity,
    /// The table count went negative (only possible with an inconsistent store).
    NegativeRatio,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTablesLeft => write!(f, "no tables left in this slot"),
            Self::OverCapacity => write!(f, "not enough seats on the remaining tables"),
            Self::NegativeRatio => write!(f, "slot is overbooked"),
        }
    }
}

/// Verdict for a candidate reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The reservation fits.
    Available {
        /// Tables free in the slot before the candidate is seated.
        remaining_tables: i64,
    },
    /// The reservation does not fit.
    Unavailable {
        /// Why it was rejected.
        reason: UnavailableReason,
    },
}

impl Availability {
    /// Returns `true` if the candidate can be accepted.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }
}

/// Decides whether the restaurant can seat a candidate reservation.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use tablebook::availability::AvailabilityEngine;
/// use tablebook::{Name, PartySize, Reservation, RestaurantConfig};
///
/// let engine = AvailabilityEngine::from_config(&RestaurantConfig::default());
/// let booking = |name: &str, people: u16| {
///     Reservation::new(
///         Name::try_from(name).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 12, 17).unwrap(),
///         NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
///         PartySize::try_from(people).unwrap(),
///     )
/// };
///
/// let existing = vec![booking("Ana Lopez", 13)];
/// assert!(!engine.check(&booking("Dani Berrocal", 1), &existing).is_available());
/// assert!(engine.check(&booking("Dani Berrocal", 16), &[]).is_available());
/// ```
#[derive(Debug, Clone)]
pub struct AvailabilityEngine {
    tables: u16,
    table_capacity: u16,
    buckets: TableBuckets,
}

impl AvailabilityEngine {
    /// Creates an engine for a restaurant with the given shape.
    #[must_use]
    pub fn new(tables: u16, table_capacity: u16, buckets: TableBuckets) -> Self {
        Self {
            tables,
            table_capacity,
            buckets,
        }
    }

    /// Creates an engine whose buckets follow the configured restaurant shape.
    #[must_use]
    pub fn from_config(config: &RestaurantConfig) -> Self {
        Self::new(
            config.tables,
            config.table_capacity,
            TableBuckets::new(config.tables, config.table_capacity),
        )
    }

    /// Returns the bucket table in use.
    #[must_use]
    pub fn buckets(&self) -> &TableBuckets {
        &self.buckets
    }

    /// Tables still free in the candidate's slot.
    ///
    /// Can go negative if the existing reservations were not admitted by
    /// this engine (e.g. a hand-edited store).
    #[must_use]
    pub fn remaining_tables(&self, candidate: &Reservation, existing: &[Reservation]) -> i64 {
        existing
            .iter()
            .filter(|reservation| reservation.slot_key() == candidate.slot_key())
            .fold(i64::from(self.tables), |left, reservation| {
                left - i64::from(self.buckets.tables_for(reservation.people()))
            })
    }

    /// Checks whether the candidate fits into its slot.
    ///
    /// Rejected when no table is left, when `people / remaining` exceeds
    /// the seats per table, or when that ratio is negative.
    #[must_use]
    pub fn check(&self, candidate: &Reservation, existing: &[Reservation]) -> Availability {
        let remaining = self.remaining_tables(candidate, existing);
        let people = i64::from(candidate.people().value());
        let capacity = i64::from(self.table_capacity);

        // people >= 1, so people / remaining > capacity <=> people > capacity * remaining
        // for positive remaining, and the ratio is negative exactly when remaining is.
        let verdict = if remaining == 0 {
            Availability::Unavailable {
                reason: UnavailableReason::NoTablesLeft,
            }
        } else if remaining > 0 && people > capacity * remaining {
            Availability::Unavailable {
                reason: UnavailableReason::OverCapacity,
            }
        } else if remaining < 0 {
            Availability::Unavailable {
                reason: UnavailableReason::NegativeRatio,
            }
        } else {
            Availability::Available {
                remaining_tables: remaining,
            }
        };

        log::debug!(
            "availability for {} people on {} {}: {remaining} table(s) left, {verdict:?}",
            people,
            candidate.date(),
            candidate.time()
        );
        verdict
    }
}
