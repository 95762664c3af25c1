//! CLI command definitions using Clap.
//!
//! - `play` - Interactive slideshow session
//! - `moods` - Configured moods
//! - `fetch` - One-shot mood fetch
//! - `config` - Configuration file management
//! - `schema` / `completions` - Tooling output

use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::config::CuratorConfig;
use crate::constants::APP_NAME;
use crate::error::CuratorError;
use crate::provider::PexelsClient;
use crate::{config, schema};

pub mod config_cmd;
pub mod fetch;
pub mod moods;
pub mod play;

pub use config_cmd::ConfigCommands;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Curator CLI - mood-themed photo slideshow.
#[derive(Parser, Debug)]
#[command(name = "curator")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments). `~` is expanded.
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Options for an interactive session.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayArgs {
    /// Mood to fetch on start, by name.
    #[arg(long, short, value_name = "NAME")]
    pub mood: Option<String>,

    /// Autoplay interval in seconds (clamped to 2..=30).
    #[arg(long, short, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// Start in wallpaper mode.
    #[arg(long, short)]
    pub wallpaper: bool,

    /// Start with the rotation timer enabled.
    #[arg(long, short)]
    pub timer: bool,

    /// Print each frame as a JSON line instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run an interactive slideshow session.
    ///
    /// Reads one command per line from stdin and prints a frame every time
    /// the slideshow changes.
    #[command(after_long_help = play::HELP)]
    Play(PlayArgs),

    /// List the configured moods.
    Moods {
        /// Output as JSON.
        #[arg(long, short)]
        json: bool,
    },

    /// Fetch imagery for one mood and print the resulting slides.
    Fetch {
        /// Mood name, as listed by `curator moods`.
        mood: String,
    },

    /// Configuration file management commands.
    ///
    /// Initialize, view, and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Curator configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(curator completions --shell zsh)"
    ///   curator completions --shell fish > ~/.config/fish/completions/curator.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.as_deref().map(|path| config::env::expand_and_resolve(path, &PathBuf::from(".")))
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub async fn execute(&self) -> Result<(), CuratorError> {
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(CuratorError::InvalidArguments(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            Commands::Play(args) => play::execute(args).await,
            Commands::Moods { json } => moods::execute(*json),
            Commands::Fetch { mood } => fetch::execute(mood).await,
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", schema::generate_schema_json()?);
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, APP_NAME, &mut io::stdout());
    }
}

/// Builds the Pexels client for `config`.
///
/// A missing API key is not fatal: every search is rejected upstream and the
/// client answers with placeholder images.
fn pexels_client(config: &CuratorConfig) -> Result<PexelsClient, CuratorError> {
    let api_key = config::env::load_api_key(&config.provider, &config::config_dir()).unwrap_or_else(|| {
        tracing::warn!(
            key = config::env::keys::PEXELS_API_KEY,
            "no Pexels API key configured, serving placeholder images"
        );
        String::new()
    });

    Ok(PexelsClient::new(&config.provider, api_key)?)
}
