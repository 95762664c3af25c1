//! Application-wide constants.

/// Binary and configuration directory name.
pub const APP_NAME: &str = "curator";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "CURATOR_LOG";

/// Default tracing filter when `CURATOR_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Number of images requested for every mood fetch.
pub const FETCH_COUNT: usize = 5;

/// Shortest allowed autoplay interval in seconds.
pub const MIN_INTERVAL_SECS: u64 = 2;

/// Longest allowed autoplay interval in seconds.
pub const MAX_INTERVAL_SECS: u64 = 30;

/// Autoplay interval used when none is configured.
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

/// Pexels photo search endpoint.
pub const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";

/// Base URL for placeholder images returned when the provider is unreachable.
pub const PLACEHOLDER_BASE_URL: &str = "https://picsum.photos/1920/1080";

/// Default HTTP timeout for provider requests, in seconds.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 15;
