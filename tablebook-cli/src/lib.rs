//! Library exports for tablebook-cli.
//!
//! This module exports the CLI structure, commands and prompters so they
//! can be driven from tests and other front ends.

pub mod cli;
pub mod commands;
pub mod error;
pub mod prompt;
pub mod utils;

pub use cli::Cli;
