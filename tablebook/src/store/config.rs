//! Store configuration.

use std::path::{Path, PathBuf};

use crate::config::{RestaurantConfig, DEFAULT_DATABASE};
use crate::error::{Error, Result};

/// Configuration for a file-backed reservation store.
///
/// # Examples
///
/// ```
/// use tablebook::store::StoreConfig;
///
/// let config = StoreConfig::new("/tmp/reservation_database.json");
/// assert!(config.auto_create);
///
/// let config = StoreConfig::new("/tmp/reservation_database.json").without_auto_create();
/// assert!(!config.auto_create);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the store file.
    pub path: PathBuf,
    /// Whether to create an empty store file if it doesn't exist.
    pub auto_create: bool,
}

impl StoreConfig {
    /// Creates a store configuration with auto-creation enabled.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            auto_create: true,
        }
    }

    /// Requires the store file to exist already.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Derives the store configuration from the restaurant configuration.
    #[must_use]
    pub fn from_restaurant(config: &RestaurantConfig) -> Self {
        Self {
            path: config.database_path(),
            auto_create: !config.disable_autoinit.unwrap_or(false),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE)
    }
}

/// Returns the default data directory, `~/.tablebook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".tablebook"))
        .ok_or_else(|| Error::InvalidConfig {
            field: "home_directory".into(),
            message: "Cannot determine home directory".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.path, PathBuf::from("reservation_database.json"));
        assert!(config.auto_create);
    }

    #[test]
    fn test_from_restaurant() {
        let restaurant = RestaurantConfig {
            database: Some(PathBuf::from("/srv/book.json")),
            disable_autoinit: Some(true),
            ..RestaurantConfig::default()
        };
        let config = StoreConfig::from_restaurant(&restaurant);
        assert_eq!(config.path, PathBuf::from("/srv/book.json"));
        assert!(!config.auto_create);
    }

    #[test]
    fn test_default_data_dir() {
        if let Ok(dir) = default_data_dir() {
            assert!(dir.ends_with(".tablebook"));
        }
    }
}
