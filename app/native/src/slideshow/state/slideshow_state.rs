//! The `SlideshowState` aggregate.
//!
//! Owned by the slideshow actor; every mutation bumps the revision so the
//! actor knows when to publish a fresh [`SlideshowSnapshot`].

use serde::Serialize;

use super::sequence::SlideSequence;
use super::types::{CycleDirection, MoodConfig, Slide};
use crate::config::{ConfigError, CuratorConfig};
use crate::provider::ProviderError;
use crate::slideshow::autoplay::{AutoplaySettings, SettingChange};
use crate::slideshow::coordinator::{
    FetchRequest, MoodCoordinator, OverlapPolicy, RequestToken, Resolution,
};

/// Immutable view of the slideshow handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideshowSnapshot {
    /// Increases with every state change.
    pub revision: u64,
    /// Slides in display order; the first one is active.
    pub slides: Vec<Slide>,
    /// Mood shown in the header.
    pub current_mood: MoodConfig,
    /// All selectable moods.
    pub moods: Vec<MoodConfig>,
    /// Whether a mood fetch is in flight.
    pub is_fetching: bool,
    /// Whether the mood menu is open.
    pub mood_menu_open: bool,
    /// Wallpaper (zen) mode.
    pub wallpaper_mode: bool,
    /// Manual timer toggle.
    pub timer_enabled: bool,
    /// Seconds between autoplay rotations.
    pub interval_seconds: u64,
    /// Whether autoplay is running.
    pub autoplay_active: bool,
    /// Rotations performed so far.
    pub rotations: u64,
}

impl SlideshowSnapshot {
    /// The active slide.
    #[must_use]
    pub fn active_slide(&self) -> Option<&Slide> { self.slides.first() }
}

/// What applying a fetch result did to the state.
#[derive(Debug)]
pub enum FetchApplied {
    /// The slide set was replaced by `count` fresh slides.
    Replaced {
        /// Number of slides in the new set.
        count: usize,
    },
    /// The result was superseded by a newer request.
    Stale {
        /// Token of the dropped result.
        token: RequestToken,
        /// Token still awaited.
        latest: RequestToken,
    },
    /// The fetch failed; the previous slides stay.
    Failed(ProviderError),
}

/// Root state of the slideshow.
#[derive(Debug, Clone)]
pub struct SlideshowState {
    slides: SlideSequence,
    moods: Vec<MoodConfig>,
    coordinator: MoodCoordinator,
    autoplay: AutoplaySettings,
    revision: u64,
    rotations: u64,
}

impl SlideshowState {
    /// Creates a state showing `slides` with `initial_mood` selected.
    #[must_use]
    pub const fn new(
        slides: SlideSequence,
        moods: Vec<MoodConfig>,
        initial_mood: MoodConfig,
        autoplay: AutoplaySettings,
        policy: OverlapPolicy,
    ) -> Self {
        Self {
            slides,
            moods,
            coordinator: MoodCoordinator::new(initial_mood, policy),
            autoplay,
            revision: 0,
            rotations: 0,
        }
    }

    /// Builds the startup state from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the default mood is unknown or
    /// the initial slides do not form a valid sequence.
    pub fn from_config(config: &CuratorConfig) -> Result<Self, ConfigError> {
        let initial = config.resolve_default_mood()?.clone();
        let slides = SlideSequence::new(config.initial_slides.clone())
            .map_err(|err| ConfigError::Invalid(format!("initialSlides: {err}")))?;

        Ok(Self::new(
            slides,
            config.moods.clone(),
            initial,
            config.autoplay.settings(),
            config.overlap,
        ))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current slide sequence.
    #[must_use]
    pub const fn slides(&self) -> &SlideSequence { &self.slides }

    /// Selectable moods.
    #[must_use]
    pub fn moods(&self) -> &[MoodConfig] { &self.moods }

    /// Looks up a mood by name.
    #[must_use]
    pub fn mood(&self, name: &str) -> Option<&MoodConfig> {
        self.moods.iter().find(|mood| mood.name == name)
    }

    /// Mood coordinator.
    #[must_use]
    pub const fn coordinator(&self) -> &MoodCoordinator { &self.coordinator }

    /// Autoplay inputs.
    #[must_use]
    pub const fn autoplay(&self) -> AutoplaySettings { self.autoplay }

    /// State revision.
    #[must_use]
    pub const fn revision(&self) -> u64 { self.revision }

    /// Rotations performed so far.
    #[must_use]
    pub const fn rotations(&self) -> u64 { self.rotations }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Rotates the slides one step.
    pub fn rotate(&mut self, direction: CycleDirection) {
        if self.slides.is_empty() {
            return;
        }
        self.slides.rotate(direction);
        self.rotations += 1;
        self.touch();
    }

    /// Starts fetching `mood`. See [`MoodCoordinator::begin`].
    pub fn begin_fetch(&mut self, mood: MoodConfig) -> Option<FetchRequest> {
        let request = self.coordinator.begin(mood);
        if request.is_some() {
            self.touch();
        }
        request
    }

    /// Starts fetching the current mood again.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        let request = self.coordinator.refresh();
        if request.is_some() {
            self.touch();
        }
        request
    }

    /// Applies the result of the fetch identified by `token`.
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        mood: &MoodConfig,
        result: Result<Vec<String>, ProviderError>,
    ) -> FetchApplied {
        match self.coordinator.complete(token, mood, result) {
            Resolution::Replace(sequence) => {
                let count = sequence.len();
                self.slides = sequence;
                self.touch();
                FetchApplied::Replaced { count }
            }
            Resolution::Stale { token, latest } => FetchApplied::Stale { token, latest },
            Resolution::Failed(err) => {
                self.touch();
                FetchApplied::Failed(err)
            }
        }
    }

    /// Opens or closes the mood menu. Returns `true` if it changed.
    pub fn set_menu_open(&mut self, open: bool) -> bool {
        if self.coordinator.is_menu_open() == open {
            return false;
        }
        self.coordinator.set_menu_open(open);
        self.touch();
        true
    }

    /// Flips the mood menu.
    pub fn toggle_menu(&mut self) { self.set_menu_open(!self.coordinator.is_menu_open()); }

    /// Applies one autoplay setting change. Returns `true` if it changed.
    pub fn apply_setting(&mut self, change: SettingChange) -> bool {
        let changed = self.autoplay.apply(change);
        if changed {
            self.touch();
        }
        changed
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SlideshowSnapshot {
        SlideshowSnapshot {
            revision: self.revision,
            slides: self.slides.to_vec(),
            current_mood: self.coordinator.current_mood().clone(),
            moods: self.moods.clone(),
            is_fetching: self.coordinator.is_fetching(),
            mood_menu_open: self.coordinator.is_menu_open(),
            wallpaper_mode: self.autoplay.wallpaper_mode,
            timer_enabled: self.autoplay.timer_enabled,
            interval_seconds: self.autoplay.interval.seconds(),
            autoplay_active: self.autoplay.is_active(),
            rotations: self.rotations,
        }
    }

    const fn touch(&mut self) { self.revision += 1; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slideshow::catalog::{builtin_moods, initial_slides};
    use crate::slideshow::state::AutoplayInterval;

    fn state() -> SlideshowState {
        let moods = builtin_moods();
        let initial = moods[1].clone();
        SlideshowState::new(
            SlideSequence::new(initial_slides()).unwrap(),
            moods,
            initial,
            AutoplaySettings::default(),
            OverlapPolicy::default(),
        )
    }

    #[test]
    fn test_rotate_bumps_revision_and_counter() {
        let mut state = state();
        state.rotate(CycleDirection::Next);

        assert_eq!(state.revision(), 1);
        assert_eq!(state.rotations(), 1);
        assert_eq!(state.slides().ids(), ["2", "3", "4", "1"]);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = state();
        state.apply_setting(SettingChange::WallpaperMode(true));
        state.apply_setting(SettingChange::Interval(AutoplayInterval::clamped(50)));

        let snapshot = state.snapshot();
        assert_eq!(snapshot.current_mood.name, "nature");
        assert!(snapshot.wallpaper_mode);
        assert!(snapshot.autoplay_active);
        assert_eq!(snapshot.interval_seconds, 30);
        assert_eq!(snapshot.active_slide().map(|s| s.id.as_str()), Some("1"));
        assert_eq!(snapshot.moods.len(), 5);
    }

    #[test]
    fn test_unchanged_setting_keeps_revision() {
        let mut state = state();
        assert!(!state.apply_setting(SettingChange::TimerEnabled(false)));
        assert!(!state.set_menu_open(false));
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = state();
        state.toggle_menu();
        assert!(state.coordinator().is_menu_open());
        state.toggle_menu();
        assert!(!state.coordinator().is_menu_open());
    }

    #[test]
    fn test_complete_fetch_replaces_slides() {
        let mut state = state();
        let space = state.mood("space").cloned().unwrap();
        let request = state.begin_fetch(space.clone()).unwrap();
        assert!(state.snapshot().is_fetching);

        let urls: Vec<String> = (0..5).map(|i| format!("https://img/{i}.jpg")).collect();
        let applied = state.complete_fetch(request.token, &space, Ok(urls));

        assert!(matches!(applied, FetchApplied::Replaced { count: 5 }));
        let snapshot = state.snapshot();
        assert!(!snapshot.is_fetching);
        assert_eq!(snapshot.slides[0].title, "COSMIC");
    }

    #[test]
    fn test_failed_fetch_keeps_slides() {
        let mut state = state();
        let space = state.mood("space").cloned().unwrap();
        let request = state.begin_fetch(space.clone()).unwrap();

        let applied = state.complete_fetch(request.token, &space, Err(ProviderError::Empty));

        assert!(matches!(applied, FetchApplied::Failed(ProviderError::Empty)));
        assert_eq!(state.slides().ids(), ["1", "2", "3", "4"]);
        assert_eq!(state.snapshot().current_mood.name, "space");
    }

    #[test]
    fn test_unknown_mood_lookup() {
        assert!(state().mood("vaporwave").is_none());
    }
}
