//! Command-line front end.
//!
//! - Argument parsing
//! - Version and help display
//! - Command handlers over the state layer
//!
//! # Usage
//!
//! ```ignore
//! use pokedex::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(text) = run_cli_command(&command) {
//!     println!("{}", text);
//!     return Ok(());
//! }
//! // Otherwise build an `App` and call `run_command`.
//! ```

pub mod args;
pub mod commands;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, USAGE};
pub use commands::run_command;
pub use version::{version_line, VERSION};

/// Answer commands that need no state layer.
///
/// # Returns
///
/// * `Some(text)` - for `Version` and `Help`
/// * `None` - the command must be run against an [`App`](crate::app::App)
pub fn run_cli_command(command: &CliCommand) -> Option<String> {
    match command {
        CliCommand::Version => Some(version_line()),
        CliCommand::Help => Some(USAGE.to_string()),
        _ => None,
    }
}
