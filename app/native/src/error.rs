//! Error types for Curator.
//!
//! Each layer has its own error enum; this module provides the top-level
//! error returned by CLI commands.

use thiserror::Error;

use crate::config::ConfigError;
use crate::provider::ProviderError;
use crate::slideshow::ActorError;
use crate::slideshow::state::SequenceError;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum CuratorError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image provider error.
    #[error("provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Slideshow actor communication error.
    #[error("slideshow error: {0}")]
    Actor(#[from] ActorError),

    /// Invalid slide sequence.
    #[error("slide error: {0}")]
    Sequence(#[from] SequenceError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<String> for CuratorError {
    fn from(msg: String) -> Self { Self::InvalidArguments(msg) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_display() {
        let err = CuratorError::InvalidArguments("interval must be a number".to_string());
        assert_eq!(err.to_string(), "interval must be a number");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: CuratorError = ConfigError::Invalid("defaultMood `x`".to_string()).into();
        assert!(matches!(err, CuratorError::Config(_)));
        assert!(err.to_string().starts_with("configuration error: invalid configuration"));
    }

    #[test]
    fn test_actor_error_conversion() {
        let err: CuratorError = ActorError::UnknownMood("vaporwave".to_string()).into();
        assert_eq!(err.to_string(), "slideshow error: unknown mood: vaporwave");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CuratorError = io.into();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_from_string() {
        let err: CuratorError = "bad flag".to_string().into();
        assert!(matches!(err, CuratorError::InvalidArguments(msg) if msg == "bad flag"));
    }
}
