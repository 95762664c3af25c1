//! Environment file parsing utilities.
//!
//! The Pexels API key is read from the process environment or from a `.env`
//! file referenced by `provider.apiKeys`, never from the configuration file
//! itself. Parsing uses the `dotenvy` crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::ProviderConfig;

/// Environment variable names for API keys.
pub mod keys {
    /// Pexels API key.
    pub const PEXELS_API_KEY: &str = "PEXELS_API_KEY";
}

/// Parses an environment file into a map of key-value pairs.
///
/// Returns an empty map if the file doesn't exist or can't be read.
#[must_use]
pub fn parse_env_file(path: &Path) -> HashMap<String, String> {
    match dotenvy::from_path_iter(path) {
        Ok(iter) => iter.filter_map(Result::ok).collect(),
        Err(err) => {
            if path.exists() {
                tracing::warn!(path = %path.display(), error = %err, "failed to read env file");
            }
            HashMap::new()
        }
    }
}

/// Expands `~` and resolves relative paths against `base_dir`.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let path = path.trim();
    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    if expanded.is_absolute() { expanded } else { base_dir.join(expanded) }
}

/// Picks the API key from the process environment value or the env file.
///
/// Empty values count as missing.
#[must_use]
pub fn resolve_api_key(
    process_value: Option<String>,
    api_keys_path: &str,
    config_dir: &Path,
) -> Option<String> {
    if let Some(value) = process_value.filter(|value| !value.trim().is_empty()) {
        return Some(value);
    }

    if api_keys_path.trim().is_empty() {
        return None;
    }

    let resolved = expand_and_resolve(api_keys_path, config_dir);
    parse_env_file(&resolved)
        .remove(keys::PEXELS_API_KEY)
        .filter(|value| !value.trim().is_empty())
}

/// Loads the Pexels API key for `provider`.
#[must_use]
pub fn load_api_key(provider: &ProviderConfig, config_dir: &Path) -> Option<String> {
    resolve_api_key(std::env::var(keys::PEXELS_API_KEY).ok(), &provider.api_keys, config_dir)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn write_env(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_env_file_with_comments_and_quotes() {
        let dir = TempDir::new().unwrap();
        let path = write_env(&dir, ".env", "# secrets\nPEXELS_API_KEY=\"abc 123\"\nOTHER=x\n");

        let vars = parse_env_file(&path);
        assert_eq!(vars.get("PEXELS_API_KEY"), Some(&"abc 123".to_string()));
        assert_eq!(vars.get("OTHER"), Some(&"x".to_string()));
    }

    #[test]
    fn test_parse_env_file_missing_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(parse_env_file(&dir.path().join("nope.env")).is_empty());
    }

    #[test]
    fn test_expand_and_resolve() {
        let base = Path::new("/config/dir");
        assert_eq!(expand_and_resolve(".env", base), PathBuf::from("/config/dir/.env"));
        assert_eq!(expand_and_resolve("/abs/.env", base), PathBuf::from("/abs/.env"));
        assert_eq!(expand_and_resolve("   ", base), PathBuf::new());
        assert!(!expand_and_resolve("~/.env", base).to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_process_value_wins() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, ".env", "PEXELS_API_KEY=from-file\n");

        let key = resolve_api_key(Some("from-env".to_string()), ".env", dir.path());
        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_env_file_relative_to_config_dir() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, "secrets.env", "PEXELS_API_KEY=from-file\n");

        let key = resolve_api_key(None, "secrets.env", dir.path());
        assert_eq!(key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_blank_values_are_missing() {
        let dir = TempDir::new().unwrap();
        write_env(&dir, ".env", "PEXELS_API_KEY=\n");

        assert_eq!(resolve_api_key(Some("  ".to_string()), ".env", dir.path()), None);
        assert_eq!(resolve_api_key(None, "", dir.path()), None);
    }
}
