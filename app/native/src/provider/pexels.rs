//! Pexels photo search client.
//!
//! Issues `GET /v1/search` with the query, result count, orientation and
//! size, authorized with the API key header. Any failure is logged and
//! replaced by placeholder URLs; [`ImageProvider::fetch_images`] never
//! returns an error for this client.

use std::time::Duration;

use serde::Deserialize;

use super::{ImageProvider, ProviderError, placeholder_urls};
use crate::config::ProviderConfig;

/// Search response body. Only the fields the slideshow uses are decoded.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    /// Matching photos.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// One photo from a search response.
#[derive(Debug, Deserialize)]
pub struct Photo {
    /// Size variants.
    pub src: PhotoSources,
}

/// URLs of the size variants of a photo.
#[derive(Debug, Default, Deserialize)]
pub struct PhotoSources {
    /// Preferred variant.
    pub large2x: Option<String>,
    /// Fallback variant.
    pub large: Option<String>,
}

impl SearchResponse {
    /// Maps photos to their preferred large URL, skipping photos that have
    /// neither large variant.
    #[must_use]
    pub fn image_urls(self) -> Vec<String> {
        self.photos.into_iter().filter_map(|photo| photo.src.large2x.or(photo.src.large)).collect()
    }
}

/// HTTP client for the Pexels search API.
pub struct PexelsClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    orientation: String,
    size: String,
    placeholder: String,
}

impl PexelsClient {
    /// Creates a client from provider configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Request`] if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig, api_key: String) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("curator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, config, api_key))
    }

    /// Creates a client reusing an existing [`reqwest::Client`].
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &ProviderConfig, api_key: String) -> Self {
        Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key,
            orientation: config.orientation.clone(),
            size: config.size.clone(),
            placeholder: config.placeholder.clone(),
        }
    }

    /// Performs the search without the placeholder fallback.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-2xx status, or a body that
    /// does not decode as a search response.
    pub async fn search(&self, query: &str, count: usize) -> Result<Vec<String>, ProviderError> {
        let per_page = count.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.api_key)
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", self.orientation.as_str()),
                ("size", self.size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ProviderError::Status { status: status.as_u16(), body });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.image_urls())
    }
}

impl ImageProvider for PexelsClient {
    async fn fetch_images(&self, query: &str, count: usize) -> Result<Vec<String>, ProviderError> {
        match self.search(query, count).await {
            Ok(urls) => {
                tracing::debug!(query, count = urls.len(), "pexels search succeeded");
                Ok(urls)
            }
            Err(err) => {
                tracing::warn!(error = %err, query, "pexels search failed, using placeholders");
                Ok(placeholder_urls(&self.placeholder, count))
            }
        }
    }
}
