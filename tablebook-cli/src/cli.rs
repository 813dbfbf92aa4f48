//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CancelCommand, CompletionsCommand, CreateCommand, ListCommand, MenuCommand, ShowCommand,
    UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing restaurant table reservations.
#[derive(Parser)]
#[command(name = "tablebook")]
#[command(version, about = "Manage restaurant table reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the reservation store file
    #[arg(long, value_name = "PATH", global = true, env = "TABLEBOOK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Read restaurant configuration from this file
    #[arg(long, value_name = "PATH", global = true, env = "TABLEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not create the store file if it is missing
    #[arg(long, global = true, env = "TABLEBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    /// Command to run (the interactive menu if omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Choose an action from the interactive menu
    Menu(MenuCommand),

    /// Create a reservation
    Create(CreateCommand),

    /// Show the reservation for a name
    Show(ShowCommand),

    /// Replace the reservation for a name
    Update(UpdateCommand),

    /// Cancel the reservation for a name
    Cancel(CancelCommand),

    /// List all reservations
    List(ListCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
