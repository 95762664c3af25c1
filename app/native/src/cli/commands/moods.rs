//! `curator moods`: the configured mood catalog.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::output::{format_bool, truncate};
use crate::config::{CuratorConfig, get_config};
use crate::error::CuratorError;

#[derive(Tabled)]
struct MoodRow {
    #[tabled(rename = "Default")]
    default: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Accent")]
    accent: String,
    #[tabled(rename = "Query")]
    query: String,
}

fn rows(config: &CuratorConfig) -> Vec<MoodRow> {
    let default = config.resolve_default_mood().ok().map(|mood| mood.name.as_str());

    config
        .moods
        .iter()
        .map(|mood| MoodRow {
            default: if Some(mood.name.as_str()) == default { format_bool(true) } else { String::new() },
            name: mood.name.clone(),
            label: mood.label.clone(),
            accent: mood.accent_color.clone(),
            query: truncate(&mood.prompt_prefix, 48),
        })
        .collect()
}

/// Prints the mood catalog as a table, or as JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(json: bool) -> Result<(), CuratorError> {
    let config = get_config();

    if json {
        println!("{}", serde_json::to_string_pretty(&config.moods)?);
        return Ok(());
    }

    let table = Table::new(rows(config))
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::center()))
        .to_string();
    println!("{table}");

    Ok(())
}
