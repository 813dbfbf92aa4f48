//! Configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::RestaurantConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Assembles a validated [`RestaurantConfig`] from its sources.
///
/// # Examples
///
/// ```
/// use tablebook::config::{ConfigBuilder, RestaurantConfig};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(RestaurantConfig { tables: 6, ..RestaurantConfig::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.restaurant_capacity(), 24);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    file: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    base: Option<RestaurantConfig>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder reading the user config file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads this file instead of the user config file. The file must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Looks for the user config file in this directory.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Uses this configuration as the base instead of any file.
    #[must_use]
    pub fn with_config(mut self, config: RestaurantConfig) -> Self {
        self.base = Some(config);
        self
    }

    /// Does not read configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores `TABLEBOOK_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// Precedence, lowest to highest: built-in defaults, configuration file
    /// (or programmatic base), environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is malformed, or the result fails validation.
    pub fn build(self) -> Result<RestaurantConfig> {
        let mut config = match self.base {
            Some(base) => base,
            None if self.skip_files => RestaurantConfig::default(),
            None => match self.file {
                Some(ref file) => ConfigLoader::load_file(file)?,
                None => ConfigLoader::load_user_config(self.data_dir.as_deref())?
                    .unwrap_or_default(),
            },
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        ConfigValidator::validate(&config)?;
        log::debug!(
            "restaurant: {} tables x {} seats, slots {:?}",
            config.tables,
            config.table_capacity,
            config.slots
        );

        Ok(config)
    }
}
