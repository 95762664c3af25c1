//! CLI module for Curator.
//!
//! Every subcommand runs inside the async runtime started by `main`; the
//! interactive `play` session drives the slideshow actor from stdin.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;

use crate::error::CuratorError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub async fn run() -> Result<(), CuratorError> {
    let cli = Cli::parse();
    cli.execute().await
}
