//! Configuration types for Curator.
//!
//! All types deserialize from camelCase JSON and fall back to defaults for
//! missing fields, so an empty file (`{}`) is a valid configuration.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{
    APP_NAME, DEFAULT_INTERVAL_SECS, DEFAULT_PROVIDER_TIMEOUT_SECS, PEXELS_SEARCH_URL,
    PLACEHOLDER_BASE_URL,
};
use crate::slideshow::autoplay::AutoplaySettings;
use crate::slideshow::catalog::{builtin_moods, initial_slides};
use crate::slideshow::coordinator::OverlapPolicy;
use crate::slideshow::state::{AutoplayInterval, MoodConfig, Slide, SlideSequence};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "no configuration file found; expected $XDG_CONFIG_HOME/curator/config.jsonc or ~/.curator.jsonc"
    )]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but is not usable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

// ============================================================================
// Root
// ============================================================================

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CuratorConfig {
    /// Optional JSON Schema reference for editor support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Selectable moods. Defaults to the built-in set.
    pub moods: Vec<MoodConfig>,

    /// Name of the mood selected at startup. Defaults to the first mood.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_mood: Option<String>,

    /// Slides shown before the first fetch.
    pub initial_slides: Vec<Slide>,

    /// Autoplay settings at startup.
    pub autoplay: AutoplayConfig,

    /// Image provider settings.
    pub provider: ProviderConfig,

    /// What to do with a mood selection made while a fetch is in flight.
    pub overlap: OverlapPolicy,
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            schema: None,
            moods: builtin_moods(),
            default_mood: None,
            initial_slides: initial_slides(),
            autoplay: AutoplayConfig::default(),
            provider: ProviderConfig::default(),
            overlap: OverlapPolicy::default(),
        }
    }
}

impl CuratorConfig {
    /// Looks up a mood by name.
    #[must_use]
    pub fn mood(&self, name: &str) -> Option<&MoodConfig> {
        self.moods.iter().find(|mood| mood.name == name)
    }

    /// The mood selected at startup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `defaultMood` names an unknown
    /// mood or no mood is configured.
    pub fn resolve_default_mood(&self) -> Result<&MoodConfig, ConfigError> {
        match &self.default_mood {
            Some(name) => self.mood(name).ok_or_else(|| {
                ConfigError::Invalid(format!("defaultMood `{name}` is not a configured mood"))
            }),
            None => self
                .moods
                .first()
                .ok_or_else(|| ConfigError::Invalid("at least one mood is required".to_string())),
        }
    }

    /// Checks the invariants the slideshow relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, mood) in self.moods.iter().enumerate() {
            if self.moods[..index].iter().any(|other| other.name == mood.name) {
                return Err(ConfigError::Invalid(format!("duplicate mood `{}`", mood.name)));
            }
        }
        self.resolve_default_mood()?;
        SlideSequence::new(self.initial_slides.clone())
            .map_err(|err| ConfigError::Invalid(format!("initialSlides: {err}")))?;
        Ok(())
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Autoplay settings at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoplayConfig {
    /// Seconds between rotations. Clamped to 2..=30.
    pub interval: u64,

    /// Start in wallpaper (zen) mode.
    pub wallpaper: bool,

    /// Start with the manual timer on.
    pub timer: bool,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL_SECS,
            wallpaper: false,
            timer: false,
        }
    }
}

impl AutoplayConfig {
    /// Converts to runtime settings, clamping the interval.
    #[must_use]
    pub const fn settings(&self) -> AutoplaySettings {
        AutoplaySettings {
            interval: AutoplayInterval::clamped(self.interval),
            wallpaper_mode: self.wallpaper,
            timer_enabled: self.timer,
        }
    }
}

/// Image provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Search endpoint.
    pub endpoint: String,

    /// Path to a `.env` file containing `PEXELS_API_KEY`.
    ///
    /// The path can be:
    /// - Relative to the config file directory (e.g., `.env`)
    /// - Absolute (e.g., `/Users/me/.secrets/.env`)
    /// - Home-relative with `~` (e.g., `~/.config/curator/.env`)
    ///
    /// `PEXELS_API_KEY` in the process environment takes precedence.
    pub api_keys: String,

    /// Photo orientation filter.
    pub orientation: String,

    /// Photo size filter.
    pub size: String,

    /// Request timeout in seconds.
    pub timeout: u64,

    /// Base URL for placeholder images used when a search fails.
    pub placeholder: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: PEXELS_SEARCH_URL.to_string(),
            api_keys: String::new(),
            orientation: "landscape".to_string(),
            size: "large".to_string(),
            timeout: DEFAULT_PROVIDER_TIMEOUT_SECS,
            placeholder: PLACEHOLDER_BASE_URL.to_string(),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Configuration file names, in order of preference.
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Configuration file names in the home directory.
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".curator.jsonc", ".curator.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/curator/config.jsonc` or `config.json`, if set
/// 2. `~/.config/curator/config.jsonc` or `config.json`
/// 3. The platform configuration directory (`dirs::config_dir`)
/// 4. `~/.curator.jsonc` or `~/.curator.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = Vec::new();
    let mut push_dir = |dir: PathBuf| {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    };

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        push_dir(PathBuf::from(xdg_config).join(APP_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        push_dir(home.join(".config").join(APP_NAME));
    }
    if let Some(config_dir) = dirs::config_dir() {
        push_dir(config_dir.join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first existing file in [`config_paths`].
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if no file exists, or any error from
/// [`load_config_from_path`].
pub fn load_config() -> Result<(CuratorConfig, PathBuf), ConfigError> {
    let path = config_paths().into_iter().find(|path| path.exists()).ok_or(ConfigError::NotFound)?;
    load_config_from_path(&path)
}

/// Loads and validates the configuration at `path`.
///
/// Comments (`//` and `/* */`) are stripped before parsing.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist,
/// [`ConfigError::Io`] if it cannot be read, [`ConfigError::Parse`] for
/// invalid JSON and [`ConfigError::Invalid`] if validation fails.
pub fn load_config_from_path(path: &Path) -> Result<(CuratorConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: CuratorConfig = serde_json::from_reader(reader)?;
    config.validate()?;

    Ok((config, path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("config.jsonc");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_default_config_uses_builtins() {
        let config = CuratorConfig::default();
        assert_eq!(config.moods.len(), 5);
        assert_eq!(config.initial_slides.len(), 4);
        assert_eq!(config.resolve_default_mood().unwrap().name, "cyberpunk");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: CuratorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CuratorConfig::default());
    }

    #[test]
    fn test_load_jsonc_with_comments() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"{
                // start in the cosmos
                "defaultMood": "space",
                /* zen mode on */
                "autoplay": { "wallpaper": true, "interval": 12 },
                "overlap": "ignoreWhileFetching"
            }"#,
        );

        let (config, loaded_from) = load_config_from_path(&path).unwrap();

        assert_eq!(loaded_from, path);
        assert_eq!(config.resolve_default_mood().unwrap().label, "Cosmic");
        assert!(config.autoplay.wallpaper);
        assert_eq!(config.autoplay.interval, 12);
        assert_eq!(config.overlap, OverlapPolicy::IgnoreWhileFetching);
        assert_eq!(config.provider, ProviderConfig::default());
    }

    #[test]
    fn test_autoplay_interval_is_clamped() {
        let config = AutoplayConfig { interval: 1, wallpaper: false, timer: true };
        let settings = config.settings();
        assert_eq!(settings.interval.seconds(), 2);
        assert!(settings.is_active());
    }

    #[test]
    fn test_unknown_default_mood_is_invalid() {
        let config = CuratorConfig {
            default_mood: Some("vaporwave".to_string()),
            ..CuratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("vaporwave")));
    }

    #[test]
    fn test_duplicate_moods_are_invalid() {
        let mut config = CuratorConfig::default();
        let first = config.moods[0].clone();
        config.moods.push(first);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_initial_slides_are_invalid() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "initialSlides": [] }"#);
        assert!(matches!(load_config_from_path(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(matches!(load_config_from_path(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let result = load_config_from_path(&dir.path().join("missing.jsonc"));
        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn test_config_paths_end_with_home_files() {
        let paths = config_paths();
        if dirs::home_dir().is_some() {
            let last = paths.last().unwrap();
            assert!(last.ends_with(".curator.json"));
        }
    }
}
