//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::RestaurantConfig;
use crate::error::{Error, Result};

/// Name of the user configuration file inside the data directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use tablebook::config::ConfigLoader;
///
/// let config = ConfigLoader::load_user_config(None).unwrap();
/// println!("user config present: {}", config.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file if it exists.
    ///
    /// If `data_dir` is provided, loads from `{data_dir}/config.yaml`,
    /// otherwise from the default data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Option<RestaurantConfig>> {
        let config_path = match data_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => Self::user_config_path()?,
        };

        if !config_path.exists() {
            return Ok(None);
        }

        Self::load_file(&config_path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<RestaurantConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidConfig {
            field: path.display().to_string(),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        // An empty file means "all defaults"
        if contents.trim().is_empty() {
            return Ok(RestaurantConfig::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    fn user_config_path() -> Result<PathBuf> {
        Ok(crate::store::default_data_dir()?.join(USER_CONFIG_FILE))
    }
}
