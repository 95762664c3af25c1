//! Image provider clients.
//!
//! The slideshow core consumes a single operation, [`ImageProvider::fetch_images`].
//! The production client ([`PexelsClient`]) absorbs every transport and
//! upstream failure and answers with placeholder URLs instead, so the
//! coordinator's failure branch is only reached by clients that do raise.

mod pexels;
#[cfg(test)]
pub mod testing;

use std::future::Future;

use rand::Rng;

pub use pexels::{PexelsClient, SearchResponse};

/// Errors a provider may report to the coordinator.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status code.
    #[error("provider returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, for debugging.
        body: String,
    },

    /// The provider answered without any usable image.
    #[error("provider returned no images")]
    Empty,

    /// The provider could not be reached and has no fallback.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// The fetch task panicked.
    #[error("provider task panicked: {0}")]
    Panicked(String),
}

/// Source of image URLs for a text query.
pub trait ImageProvider: Send + Sync {
    /// Fetches up to `count` image URLs matching `query`.
    fn fetch_images(
        &self,
        query: &str,
        count: usize,
    ) -> impl Future<Output = Result<Vec<String>, ProviderError>> + Send;
}

/// Builds `count` distinct placeholder image URLs.
///
/// Every slot gets its own `random` query parameter: a random base shared by
/// the batch plus the slot index, so URLs within one batch never collide.
#[must_use]
pub fn placeholder_urls(base: &str, count: usize) -> Vec<String> {
    let seed: u32 = rand::rng().random();
    (0..count)
        .map(|index| format!("{base}?random={}", u64::from(seed) + index as u64))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_placeholder_urls_count() {
        assert_eq!(placeholder_urls("https://picsum.photos/1920/1080", 5).len(), 5);
        assert!(placeholder_urls("https://picsum.photos/1920/1080", 0).is_empty());
    }

    #[test]
    fn test_placeholder_urls_are_distinct() {
        let urls = placeholder_urls("https://picsum.photos/1920/1080", 10);
        let unique: HashSet<&String> = urls.iter().collect();
        assert_eq!(unique.len(), urls.len());
    }

    #[test]
    fn test_placeholder_urls_use_base() {
        for url in placeholder_urls("https://img.test/x", 3) {
            assert!(url.starts_with("https://img.test/x?random="));
        }
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Status { status: 429, body: "quota".to_string() };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("quota"));
        assert_eq!(ProviderError::Empty.to_string(), "provider returned no images");
    }
}
