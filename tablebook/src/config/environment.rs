//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TABLEBOOK_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;

use crate::config::schema::RestaurantConfig;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tablebook::config::{EnvironmentConfig, RestaurantConfig};
///
/// let mut config = RestaurantConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., a non-numeric table count or an invalid boolean).
    pub fn apply_overrides(config: &mut RestaurantConfig) -> Result<()> {
        if let Ok(val) = env::var("TABLEBOOK_TABLES") {
            config.tables = Self::parse_number("TABLEBOOK_TABLES", &val)?;
        }

        if let Ok(val) = env::var("TABLEBOOK_TABLE_CAPACITY") {
            config.table_capacity = Self::parse_number("TABLEBOOK_TABLE_CAPACITY", &val)?;
        }

        // Comma-separated, e.g. "12:00,14:00"
        if let Ok(val) = env::var("TABLEBOOK_SLOTS") {
            config.slots = val
                .split(',')
                .map(|slot| slot.trim().to_string())
                .filter(|slot| !slot.is_empty())
                .collect();
        }

        if let Ok(val) = env::var("TABLEBOOK_DATABASE") {
            config.database = Some(PathBuf::from(val));
        }

        if let Ok(val) = env::var("TABLEBOOK_MAX_ATTEMPTS") {
            config.max_attempts = Some(Self::parse_number("TABLEBOOK_MAX_ATTEMPTS", &val)?);
        }

        if let Ok(val) = env::var("TABLEBOOK_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("TABLEBOOK_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    fn parse_number<T: std::str::FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::InvalidConfig {
            field: field.into(),
            message: format!("Must be a positive integer, got '{s}'"),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::InvalidConfig {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
