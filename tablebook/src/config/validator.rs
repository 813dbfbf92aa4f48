//! Configuration validation.

use std::collections::HashSet;

use chrono::NaiveTime;

use crate::config::schema::RestaurantConfig;
use crate::error::{Error, Result};
use crate::reservation::TIME_FORMAT;

/// Validates a configuration before it is used.
///
/// # Examples
///
/// ```
/// use tablebook::config::{ConfigValidator, RestaurantConfig};
///
/// ConfigValidator::validate(&RestaurantConfig::default()).unwrap();
///
/// let broken = RestaurantConfig { tables: 0, ..RestaurantConfig::default() };
/// assert!(ConfigValidator::validate(&broken).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending setting.
    pub fn validate(config: &RestaurantConfig) -> Result<()> {
        if config.tables == 0 {
            return Err(invalid("tables", "must be at least 1"));
        }

        if config.table_capacity == 0 {
            return Err(invalid("table_capacity", "must be at least 1"));
        }

        if config.tables.checked_mul(config.table_capacity).is_none() {
            return Err(invalid("tables", "restaurant capacity is too large"));
        }

        Self::validate_slots(&config.slots)?;

        if config.max_attempts == Some(0) {
            return Err(invalid("max_attempts", "must be greater than 0"));
        }

        Ok(())
    }

    /// Slots must be distinct and spelled exactly as `HH:MM`.
    fn validate_slots(slots: &[String]) -> Result<()> {
        if slots.is_empty() {
            return Err(invalid("slots", "at least one slot is required"));
        }

        let mut seen = HashSet::new();
        for slot in slots {
            let parsed = NaiveTime::parse_from_str(slot, TIME_FORMAT)
                .map_err(|_| invalid("slots", &format!("'{slot}' is not an HH:MM time")))?;
            if parsed.format(TIME_FORMAT).to_string() != *slot {
                return Err(invalid(
                    "slots",
                    &format!("'{slot}' must be written as HH:MM"),
                ));
            }
            if !seen.insert(parsed) {
                return Err(invalid("slots", &format!("'{slot}' is listed twice")));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> Error {
    Error::InvalidConfig {
        field: field.into(),
        message: message.into(),
    }
}
