//! `curator fetch <MOOD>`: one fetch through the coordinator, printed as JSON.

use crate::cli::output::print_highlighted_json;
use crate::config::{CuratorConfig, get_config};
use crate::error::CuratorError;
use crate::provider::{ImageProvider, ProviderError};
use crate::slideshow::Slide;
use crate::slideshow::coordinator::{MoodCoordinator, Resolution};

/// Fetches slides for `mood` and prints them.
///
/// # Errors
///
/// Returns an error for an unknown mood or a fetch that yields no slides.
pub async fn execute(mood: &str) -> Result<(), CuratorError> {
    let config = get_config();
    let provider = super::pexels_client(config)?;

    let slides = fetch_slides(config, &provider, mood).await?;
    print_highlighted_json(&serde_json::to_value(&slides)?);

    Ok(())
}

/// Runs a single selection of `mood` and returns the slides it produces.
async fn fetch_slides<P: ImageProvider>(
    config: &CuratorConfig,
    provider: &P,
    mood: &str,
) -> Result<Vec<Slide>, CuratorError> {
    let mood = config.mood(mood).cloned().ok_or_else(|| {
        let known: Vec<&str> = config.moods.iter().map(|mood| mood.name.as_str()).collect();
        CuratorError::InvalidArguments(format!("unknown mood `{mood}` (expected one of: {})", known.join(", ")))
    })?;

    let mut coordinator = MoodCoordinator::new(mood.clone(), config.overlap);
    let Some(request) = coordinator.begin(mood) else {
        return Err(ProviderError::Unavailable("selection was dropped".to_string()).into());
    };

    let result = provider.fetch_images(&request.mood.prompt_prefix, request.count).await;

    match coordinator.complete(request.token, &request.mood, result) {
        Resolution::Replace(sequence) => Ok(sequence.to_vec()),
        Resolution::Failed(err) => Err(err.into()),
        Resolution::Stale { token, latest } => Err(ProviderError::Unavailable(format!(
            "result {token} superseded by {latest}"
        ))
        .into()),
    }
}
