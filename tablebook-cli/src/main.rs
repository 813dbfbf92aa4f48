//! Main entry point for the tablebook CLI.
//!
//! This is the command-line interface for the tablebook reservation system.
//! It provides commands for managing restaurant table reservations:
//! - `menu`: Interactive menu (the default)
//! - `create`, `show`, `update`, `cancel`: Non-interactive operations
//! - `list`: List all reservations
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod prompt;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use commands::MenuCommand;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = tablebook::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("Warning: could not install logger: {e}");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        database: cli.database,
        config: cli.config,
        disable_autoinit: cli.disable_autoinit,
    };

    // Execute the command
    let command = cli
        .command
        .unwrap_or_else(|| Command::Menu(MenuCommand::default()));
    let result = match command {
        Command::Menu(cmd) => cmd.execute(&global),
        Command::Create(cmd) => cmd.execute(&global),
        Command::Show(cmd) => cmd.execute(&global),
        Command::Update(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
