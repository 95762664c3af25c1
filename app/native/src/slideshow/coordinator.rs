//! Mood/refresh coordinator.
//!
//! Turns mood selections into fetch requests and fetch results into slide
//! sequences. Every request carries a monotonically increasing
//! [`RequestToken`]; only the result for the most recent token is applied,
//! so a slow fetch can never clobber a newer selection.
//!
//! The mood label changes as soon as a selection is made, before imagery
//! arrives. A failed fetch keeps the previous slides and does not roll the
//! label back, so label and imagery can disagree until the next success.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::state::{MoodConfig, SequenceError, Slide, SlideSequence};
use crate::constants::FETCH_COUNT;
use crate::provider::ProviderError;

/// Subtitle of the first slide of a fetched set.
pub const MAIN_SCENE_SUBTITLE: &str = "MAIN SCENE";

/// What to do with a selection issued while a fetch is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum OverlapPolicy {
    /// Issue the new fetch; results of older fetches are discarded.
    #[default]
    LatestWins,
    /// Drop the selection until the in-flight fetch resolves.
    IgnoreWhileFetching,
}

/// Marker identifying one fetch request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Raw token value.
    #[must_use]
    pub const fn value(self) -> u64 { self.0 }

    const fn next(self) -> Self { Self(self.0 + 1) }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// A fetch the actor must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Token to hand back with the result.
    pub token: RequestToken,
    /// Mood being fetched.
    pub mood: MoodConfig,
    /// Number of images to request.
    pub count: usize,
}

/// Outcome of feeding a fetch result back to the coordinator.
#[derive(Debug)]
pub enum Resolution {
    /// The result belongs to the latest request; replace the slides.
    Replace(SlideSequence),
    /// A newer request was issued; the result is dropped.
    Stale {
        /// Token of the dropped result.
        token: RequestToken,
        /// Token of the request still awaited.
        latest: RequestToken,
    },
    /// The latest request failed; keep the current slides.
    Failed(ProviderError),
}

/// Coordinator state: current mood, fetching flag, menu flag and tokens.
#[derive(Debug, Clone)]
pub struct MoodCoordinator {
    current_mood: MoodConfig,
    is_fetching: bool,
    menu_open: bool,
    latest: RequestToken,
    policy: OverlapPolicy,
}

impl MoodCoordinator {
    /// Creates a coordinator showing `initial` with nothing in flight.
    #[must_use]
    pub const fn new(initial: MoodConfig, policy: OverlapPolicy) -> Self {
        Self {
            current_mood: initial,
            is_fetching: false,
            menu_open: false,
            latest: RequestToken(0),
            policy,
        }
    }

    /// Mood currently displayed (possibly ahead of the imagery).
    #[must_use]
    pub const fn current_mood(&self) -> &MoodConfig { &self.current_mood }

    /// Whether the latest request is still unresolved.
    #[must_use]
    pub const fn is_fetching(&self) -> bool { self.is_fetching }

    /// Whether the mood menu is open.
    #[must_use]
    pub const fn is_menu_open(&self) -> bool { self.menu_open }

    /// Token of the most recent request.
    #[must_use]
    pub const fn latest_token(&self) -> RequestToken { self.latest }

    /// Active overlap policy.
    #[must_use]
    pub const fn policy(&self) -> OverlapPolicy { self.policy }

    /// Opens or closes the mood menu.
    pub const fn set_menu_open(&mut self, open: bool) { self.menu_open = open; }

    /// Starts a mood selection.
    ///
    /// Marks fetching, closes the menu and switches the mood label right
    /// away. Returns `None` when the overlap policy drops the selection.
    pub fn begin(&mut self, mood: MoodConfig) -> Option<FetchRequest> {
        if self.is_fetching && self.policy == OverlapPolicy::IgnoreWhileFetching {
            tracing::debug!(mood = %mood.name, "fetch in flight, ignoring mood selection");
            return None;
        }

        self.latest = self.latest.next();
        self.is_fetching = true;
        self.menu_open = false;
        self.current_mood = mood.clone();

        Some(FetchRequest { token: self.latest, mood, count: FETCH_COUNT })
    }

    /// Re-submits the current mood.
    pub fn refresh(&mut self) -> Option<FetchRequest> { self.begin(self.current_mood.clone()) }

    /// Resolves a fetch.
    ///
    /// Results for anything but the latest token are stale and leave the
    /// fetching flag alone. Otherwise the flag is cleared whatever the
    /// outcome.
    pub fn complete(
        &mut self,
        token: RequestToken,
        mood: &MoodConfig,
        result: Result<Vec<String>, ProviderError>,
    ) -> Resolution {
        if token != self.latest {
            return Resolution::Stale { token, latest: self.latest };
        }

        self.is_fetching = false;

        let urls = match result {
            Ok(urls) if urls.is_empty() => return Resolution::Failed(ProviderError::Empty),
            Ok(urls) => urls,
            Err(err) => return Resolution::Failed(err),
        };

        match build_slides(mood, token, urls) {
            Ok(sequence) => Resolution::Replace(sequence),
            Err(SequenceError::Empty) => Resolution::Failed(ProviderError::Empty),
            Err(err @ SequenceError::DuplicateId(_)) => {
                Resolution::Failed(ProviderError::Unavailable(err.to_string()))
            }
        }
    }
}

/// Builds the slide set for a fetched mood.
///
/// At most [`FETCH_COUNT`] URLs are used. Ids combine the request token with
/// the slide index, so two fetches never share an id.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] when `urls` is empty.
pub fn build_slides(
    mood: &MoodConfig,
    token: RequestToken,
    urls: Vec<String>,
) -> Result<SlideSequence, SequenceError> {
    let title = mood.slide_title();
    let description = mood.slide_description();

    let slides = urls
        .into_iter()
        .take(FETCH_COUNT)
        .enumerate()
        .map(|(index, image_url)| Slide {
            id: format!("pxl-{token}-{index}"),
            image_url,
            title: title.clone(),
            subtitle: if index == 0 {
                MAIN_SCENE_SUBTITLE.to_string()
            } else {
                format!("VIEW {}", index + 1)
            },
            description: description.clone(),
            mood: mood.name.clone(),
        })
        .collect();

    SlideSequence::new(slides)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn mood(name: &str, label: &str) -> MoodConfig {
        MoodConfig {
            name: name.to_string(),
            label: label.to_string(),
            prompt_prefix: format!("{name} query"),
            accent_color: "#3b82f6".to_string(),
            description: None,
        }
    }

    fn urls(n: usize) -> Vec<String> { (0..n).map(|i| format!("https://img/{i}.jpg")).collect() }

    fn applied(resolution: Resolution) -> SlideSequence {
        match resolution {
            Resolution::Replace(sequence) => sequence,
            other => panic!("expected replacement, got {other:?}"),
        }
    }

    #[test]
    fn test_begin_is_optimistic() {
        let mut coordinator = MoodCoordinator::new(mood("cyberpunk", "Cyberpunk"), OverlapPolicy::default());
        coordinator.set_menu_open(true);

        let request = coordinator.begin(mood("space", "Cosmic")).unwrap();

        assert!(coordinator.is_fetching());
        assert!(!coordinator.is_menu_open());
        assert_eq!(coordinator.current_mood().name, "space");
        assert_eq!(request.count, FETCH_COUNT);
        assert_eq!(request.mood.prompt_prefix, "space query");
    }

    #[test]
    fn test_space_scenario_builds_five_slides() {
        let space = mood("space", "Cosmic");
        let mut coordinator = MoodCoordinator::new(mood("nature", "Nature"), OverlapPolicy::default());
        let request = coordinator.begin(space.clone()).unwrap();

        let sequence = applied(coordinator.complete(request.token, &space, Ok(urls(5))));

        assert!(!coordinator.is_fetching());
        assert_eq!(sequence.len(), 5);
        let slides = sequence.to_vec();
        assert_eq!(slides[0].title, "COSMIC");
        assert_eq!(slides[0].subtitle, MAIN_SCENE_SUBTITLE);
        for (i, slide) in slides.iter().enumerate().skip(1) {
            assert_eq!(slide.subtitle, format!("VIEW {}", i + 1));
        }
        assert!(slides.iter().all(|s| s.mood == "space"));
        assert_eq!(slides[3].image_url, "https://img/3.jpg");
    }

    #[test]
    fn test_extra_urls_are_truncated() {
        let space = mood("space", "Cosmic");
        let sequence = build_slides(&space, RequestToken(1), urls(8)).unwrap();
        assert_eq!(sequence.len(), FETCH_COUNT);
    }

    #[test]
    fn test_refreshes_produce_disjoint_ids() {
        let zen = mood("minimal", "Zen");
        let mut coordinator = MoodCoordinator::new(zen.clone(), OverlapPolicy::default());

        let first = coordinator.refresh().unwrap();
        let a = applied(coordinator.complete(first.token, &zen, Ok(urls(5))));
        let second = coordinator.refresh().unwrap();
        let b = applied(coordinator.complete(second.token, &zen, Ok(urls(5))));

        let ids_a: HashSet<&str> = a.ids().into_iter().collect();
        let ids_b: HashSet<&str> = b.ids().into_iter().collect();
        assert!(ids_a.is_disjoint(&ids_b));
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let a = mood("nature", "Nature");
        let b = mood("space", "Cosmic");
        let mut coordinator = MoodCoordinator::new(a.clone(), OverlapPolicy::LatestWins);

        let request_a = coordinator.begin(a.clone()).unwrap();
        let request_b = coordinator.begin(b.clone()).unwrap();

        let sequence = applied(coordinator.complete(request_b.token, &b, Ok(urls(5))));
        assert!(sequence.iter().all(|s| s.mood == "space"));

        let late = coordinator.complete(request_a.token, &a, Ok(urls(5)));
        assert!(matches!(late, Resolution::Stale { .. }));
        assert_eq!(coordinator.current_mood().name, "space");
        assert!(!coordinator.is_fetching());
    }

    #[test]
    fn test_stale_result_does_not_clear_fetching() {
        let a = mood("nature", "Nature");
        let b = mood("space", "Cosmic");
        let mut coordinator = MoodCoordinator::new(a.clone(), OverlapPolicy::LatestWins);

        let request_a = coordinator.begin(a.clone()).unwrap();
        let _request_b = coordinator.begin(b).unwrap();

        let early = coordinator.complete(request_a.token, &a, Ok(urls(5)));
        assert!(matches!(early, Resolution::Stale { .. }));
        assert!(coordinator.is_fetching());
    }

    #[test]
    fn test_ignore_policy_drops_overlapping_selection() {
        let a = mood("nature", "Nature");
        let mut coordinator = MoodCoordinator::new(a.clone(), OverlapPolicy::IgnoreWhileFetching);

        let request = coordinator.begin(a.clone()).unwrap();
        assert!(coordinator.begin(mood("space", "Cosmic")).is_none());
        assert_eq!(coordinator.current_mood().name, "nature");

        applied(coordinator.complete(request.token, &a, Ok(urls(5))));
        assert!(coordinator.begin(mood("space", "Cosmic")).is_some());
    }

    #[test]
    fn test_failure_keeps_optimistic_mood() {
        let space = mood("space", "Cosmic");
        let mut coordinator = MoodCoordinator::new(mood("nature", "Nature"), OverlapPolicy::default());
        let request = coordinator.begin(space.clone()).unwrap();

        let resolution = coordinator.complete(
            request.token,
            &space,
            Err(ProviderError::Unavailable("offline".to_string())),
        );

        assert!(matches!(resolution, Resolution::Failed(ProviderError::Unavailable(_))));
        assert!(!coordinator.is_fetching());
        assert_eq!(coordinator.current_mood().name, "space");
    }

    #[test]
    fn test_empty_result_is_failure() {
        let space = mood("space", "Cosmic");
        let mut coordinator = MoodCoordinator::new(space.clone(), OverlapPolicy::default());
        let request = coordinator.refresh().unwrap();

        let resolution = coordinator.complete(request.token, &space, Ok(Vec::new()));
        assert!(matches!(resolution, Resolution::Failed(ProviderError::Empty)));
    }

    #[test]
    fn test_tokens_increase() {
        let zen = mood("minimal", "Zen");
        let mut coordinator = MoodCoordinator::new(zen, OverlapPolicy::default());
        let first = coordinator.refresh().unwrap().token;
        let second = coordinator.refresh().unwrap().token;
        assert!(second > first);
        assert_eq!(coordinator.latest_token(), second);
    }
}
