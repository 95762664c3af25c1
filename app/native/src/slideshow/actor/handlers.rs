//! Message handlers for the slideshow actor.
//!
//! Handlers mutate [`SlideshowState`] only. Side effects the actor owns
//! (spawning fetches, arming the timer, publishing snapshots) are driven by
//! their return values.

use super::messages::FetchOutcome;
use crate::slideshow::autoplay::SettingChange;
use crate::slideshow::coordinator::FetchRequest;
use crate::slideshow::state::{CycleDirection, FetchApplied, MoodConfig, SlideshowState};

/// Rotates the slides.
pub fn on_rotate(state: &mut SlideshowState, direction: CycleDirection) {
    state.rotate(direction);
    tracing::trace!(
        ?direction,
        active = state.slides().active().map(|slide| slide.id.as_str()),
        "slideshow: rotated"
    );
}

/// Rotates forward once on a timer firing.
pub fn on_timer_fired(state: &mut SlideshowState) {
    tracing::trace!("slideshow: autoplay tick");
    on_rotate(state, CycleDirection::Next);
}

/// Starts a mood selection.
pub fn on_select_mood(state: &mut SlideshowState, mood: MoodConfig) -> Option<FetchRequest> {
    tracing::info!(mood = %mood.name, "slideshow: mood selected");
    state.begin_fetch(mood)
}

/// Starts fetching the current mood again.
pub fn on_refresh(state: &mut SlideshowState) -> Option<FetchRequest> {
    tracing::info!(mood = %state.coordinator().current_mood().name, "slideshow: refresh");
    state.refresh()
}

/// Flips the mood menu.
pub fn on_toggle_mood_menu(state: &mut SlideshowState) {
    state.toggle_menu();
    tracing::debug!(open = state.coordinator().is_menu_open(), "slideshow: mood menu toggled");
}

/// Opens or closes the mood menu.
pub fn on_set_mood_menu_open(state: &mut SlideshowState, open: bool) {
    if state.set_menu_open(open) {
        tracing::debug!(open, "slideshow: mood menu changed");
    }
}

/// Applies autoplay setting changes. Returns `true` if any input changed.
pub fn on_setting_changes(
    state: &mut SlideshowState,
    changes: impl IntoIterator<Item = SettingChange>,
) -> bool {
    let mut changed = false;
    for change in changes {
        changed |= state.apply_setting(change);
    }
    if changed {
        let settings = state.autoplay();
        tracing::debug!(
            wallpaper = settings.wallpaper_mode,
            timer = settings.timer_enabled,
            interval = settings.interval.seconds(),
            "slideshow: autoplay settings changed"
        );
    }
    changed
}

/// Applies a finished fetch.
pub fn on_fetch_completed(state: &mut SlideshowState, outcome: FetchOutcome) {
    let FetchOutcome { token, mood, result } = outcome;

    match state.complete_fetch(token, &mood, result) {
        FetchApplied::Replaced { count } => {
            tracing::info!(%token, mood = %mood.name, count, "slideshow: slides replaced");
        }
        FetchApplied::Stale { token, latest } => {
            tracing::debug!(%token, %latest, mood = %mood.name, "slideshow: discarding stale fetch");
        }
        FetchApplied::Failed(err) => {
            tracing::error!(
                %token,
                mood = %mood.name,
                error = %err,
                "slideshow: fetch failed, keeping current slides"
            );
        }
    }
}
