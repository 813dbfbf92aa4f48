//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `menu`: Interactive menu (the default)
//! - `create`: Create a reservation
//! - `show`: Show the reservation for a name
//! - `update`: Replace the reservation for a name
//! - `cancel`: Cancel the reservation for a name
//! - `list`: List all reservations
//! - `completions`: Generate shell completion scripts

pub mod cancel;
pub mod completions;
pub mod create;
pub mod list;
pub mod menu;
pub mod show;
pub mod update;

pub use cancel::CancelCommand;
pub use completions::CompletionsCommand;
pub use create::CreateCommand;
pub use list::ListCommand;
pub use menu::MenuCommand;
pub use show::ShowCommand;
pub use update::UpdateCommand;
