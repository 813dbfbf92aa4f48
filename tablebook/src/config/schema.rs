//! Configuration schema definitions.
//!
//! This module defines the restaurant's shape (tables, seats per table,
//! reservation slots) and the settings the command-line front end needs.

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::reservation::TIME_FORMAT;

/// Default reservation slots.
pub const DEFAULT_SLOTS: [&str; 4] = ["12:00", "14:00", "20:00", "22:00"];

/// Default store file name.
pub const DEFAULT_DATABASE: &str = "reservation_database.json";

/// Complete configuration structure.
///
/// Missing keys in a configuration file fall back to the defaults, which
/// describe a restaurant with four tables of four seats and four daily slots.
///
/// # Examples
///
/// ```
/// use tablebook::RestaurantConfig;
///
/// let config = RestaurantConfig::default();
/// assert_eq!(config.tables, 4);
/// assert_eq!(config.table_capacity, 4);
/// assert_eq!(config.restaurant_capacity(), 16);
/// assert_eq!(config.slots, vec!["12:00", "14:00", "20:00", "22:00"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct RestaurantConfig {
    /// Number of tables in the restaurant.
    pub tables: u16,

    /// Number of people one table seats.
    pub table_capacity: u16,

    /// Reservation slots as `HH:MM` strings.
    pub slots: Vec<String>,

    /// Location of the reservation store file.
    pub database: Option<PathBuf>,

    /// How many invalid values a field may receive before giving up.
    pub max_attempts: Option<u32>,

    /// Disable automatic creation of a missing store file.
    pub disable_autoinit: Option<bool>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            tables: 4,
            table_capacity: 4,
            slots: DEFAULT_SLOTS.iter().map(ToString::to_string).collect(),
            database: None,
            max_attempts: None,
            disable_autoinit: None,
        }
    }
}

impl RestaurantConfig {
    /// Maximum number of customers per slot.
    #[must_use]
    pub fn restaurant_capacity(&self) -> u16 {
        self.tables.saturating_mul(self.table_capacity)
    }

    /// Returns the slots as times, skipping entries that do not parse.
    ///
    /// Validated configurations contain no such entries.
    #[must_use]
    pub fn slot_times(&self) -> Vec<NaiveTime> {
        self.slots
            .iter()
            .filter_map(|slot| NaiveTime::parse_from_str(slot, TIME_FORMAT).ok())
            .collect()
    }

    /// Returns the store file location, falling back to the default file name.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE))
    }

    /// Message stating the one-reservation-per-name rule.
    #[must_use]
    pub const fn name_constraints() -> &'static str {
        "Only one reservation per person is allowed."
    }

    /// Message listing the reservation slots.
    #[must_use]
    pub fn slot_constraints(&self) -> String {
        format!("Time slots for reservations: {}", self.slots.join(", "))
    }

    /// Message describing the restaurant's capacity.
    #[must_use]
    pub fn capacity_constraints(&self) -> String {
        format!(
            "Maximum capacity of the restaurant by time slots: {}, {} tables of {} people each.",
            self.restaurant_capacity(),
            self.tables,
            self.table_capacity
        )
    }
}
