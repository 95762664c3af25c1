//! Configuration module for Curator.
//!
//! This module provides configuration types and loading functionality.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod env;
pub mod template;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use types::{
    AutoplayConfig, ConfigError, CuratorConfig, ProviderConfig, config_paths,
    load_config as load_config_default, load_config_from_path,
};

/// Global configuration instance, loaded once at startup.
static CONFIG: OnceLock<CuratorConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// Must be called before [`get_config`] to take effect. Returns `false` if
/// a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk, falling back to defaults.
///
/// If no configuration file exists, a template is written to the preferred
/// location.
fn load_or_default() -> CuratorConfig {
    let result = CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config_default, |path| load_config_from_path(path));

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            if CUSTOM_CONFIG_PATH.get().is_some() {
                tracing::warn!("configuration file not found, using defaults");
            } else {
                create_default_config_file();
            }
            CuratorConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            CuratorConfig::default()
        }
    }
}

/// Creates a template configuration file at the default location.
fn create_default_config_file() {
    let Some(config_path) = config_paths().into_iter().next() else {
        tracing::debug!("no config path available for creating template");
        return;
    };

    if config_path.exists() {
        return;
    }

    match template::create_config_file(&config_path) {
        Ok(()) => {
            tracing::info!(path = %config_path.display(), "created default configuration file");
            let _ = CONFIG_PATH.set(config_path);
        }
        Err(err) => {
            tracing::debug!(
                error = %err,
                path = %config_path.display(),
                "failed to create default configuration file"
            );
        }
    }
}

/// Returns the global configuration instance, loading it on first use.
pub fn get_config() -> &'static CuratorConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }

/// Directory used to resolve relative paths in the configuration.
///
/// This is the directory of the loaded file, or the current directory when
/// running on defaults.
#[must_use]
pub fn config_dir() -> PathBuf {
    get_config_path()
        .and_then(|path| path.parent())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
