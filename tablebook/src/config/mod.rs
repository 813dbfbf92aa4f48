//! Configuration system for tablebook.
//!
//! The restaurant's shape (tables, seats per table, reservation slots) is
//! configuration, not state. It is assembled from:
//!
//! 1. Environment variables (`TABLEBOOK_*`), highest precedence
//! 2. A YAML file: an explicit one, or `~/.tablebook/config.yaml` if present
//! 3. Built-in defaults: four tables of four seats, slots 12:00, 14:00,
//!    20:00 and 22:00
//!
//! # Examples
//!
//! ```no_run
//! use tablebook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("{}", config.capacity_constraints());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{RestaurantConfig, DEFAULT_DATABASE, DEFAULT_SLOTS};
pub use validator::ConfigValidator;
