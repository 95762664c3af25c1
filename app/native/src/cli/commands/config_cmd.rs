//! Config CLI commands.
//!
//! Commands for managing the Curator configuration file.

use std::path::PathBuf;

use clap::Subcommand;

use crate::cli::output::print_highlighted_json;
use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{config_paths, get_config, get_config_path};
use crate::error::CuratorError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Initialize a new configuration file with all options documented.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  curator config init              # Create config at default location
  curator config init --force      # Overwrite existing config
  curator config init --path ~/my-config.jsonc  # Create at custom path
  curator config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        /// If not specified, uses ~/.config/curator/config.jsonc
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing to a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Print the resolved configuration.
    ///
    /// Shows the configuration in effect after defaults are applied, and the
    /// file it was loaded from.
    Show {
        /// Output bare JSON without the source line.
        #[arg(long, short)]
        json: bool,
    },

    /// Show the configuration file search paths.
    ///
    /// Indicates which one is currently in use (if any).
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), CuratorError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone())
            }
        }
        ConfigCommands::Show { json } => show_config(*json),
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Initialize a new configuration file.
fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<(), CuratorError> {
    let config_path = custom_path.unwrap_or_else(|| {
        config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc"))
    });

    if config_path.exists() && !force {
        return Err(CuratorError::InvalidArguments(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path)?;

    println!("Configuration file created at: {}", config_path.display());
    println!("\nEvery option is commented out and shows its default.");
    println!("Uncomment the ones you want to change.");

    Ok(())
}

/// Print the resolved configuration.
fn show_config(json: bool) -> Result<(), CuratorError> {
    let value = serde_json::to_value(get_config())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match get_config_path() {
        Some(path) => println!("# {}\n", path.display()),
        None => println!("# built-in defaults\n"),
    }
    print_highlighted_json(&value);

    Ok(())
}

/// Show the configuration file path.
fn show_config_path() {
    println!("Configuration file search paths (in priority order):\n");

    let mut found_config = false;

    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)"
        } else if exists {
            " (exists)"
        } else {
            ""
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if !found_config {
        println!("\nNo configuration file found.");
        println!("Run 'curator config init' to create one.");
    }
}
