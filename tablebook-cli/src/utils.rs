//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, store opening and outcome reporting.

use crate::error::CliError;
use std::path::PathBuf;
use tablebook::workflow::Outcome;
use tablebook::{ConfigBuilder, JsonStore, RestaurantConfig, StoreConfig};

/// Global CLI options shared across all commands.
///
/// Verbosity is not carried here: `main` installs the logger from the
/// parsed flags before any command runs.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Override the reservation store file.
    pub database: Option<PathBuf>,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Disable automatic store initialization.
    pub disable_autoinit: bool,
}

/// Load the restaurant configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file (`--config`, else `~/.tablebook/config.yaml`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<RestaurantConfig, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    let mut config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    if let Some(ref database) = global.database {
        config.database = Some(database.clone());
    }
    if global.disable_autoinit {
        config.disable_autoinit = Some(true);
    }

    Ok(config)
}

/// Open the reservation store named by the configuration.
///
/// # Errors
///
/// Returns `NoStore` if the file doesn't exist and auto-init is disabled.
pub fn open_store(config: &RestaurantConfig) -> Result<JsonStore, CliError> {
    JsonStore::open(StoreConfig::from_restaurant(config)).map_err(CliError::from)
}

/// Print a successful outcome, or turn a failed one into an error.
pub fn report(outcome: &Outcome) -> Result<(), CliError> {
    if !outcome.is_success() {
        return Err(CliError::SemanticFailure(outcome.message()));
    }

    println!("{}", outcome.message());
    if let Outcome::Confirmed(reservation) = outcome {
        println!("{reservation}");
    }
    Ok(())
}
