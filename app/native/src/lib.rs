//! Curator - a mood-themed photo slideshow.
//!
//! The slideshow core lives in [`slideshow`]: a rotating slide sequence, a
//! mood coordinator that discards stale fetch results by request token, and
//! an autoplay timer, all owned by a single actor task. [`provider`] fetches
//! imagery from Pexels, [`view`] turns snapshots into frames and [`cli`]
//! drives everything from the terminal.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod schema;
pub mod slideshow;
pub mod view;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV};

/// Installs the global tracing subscriber.
///
/// The filter comes from `CURATOR_LOG` (same syntax as `RUST_LOG`), falling
/// back to `warn`. Output goes to stderr so frames on stdout stay clean.
/// Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
