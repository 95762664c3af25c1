//! Message types for the slideshow actor.
//!
//! This module defines:
//! - `SlideshowMessage` - commands and queries sent to the actor
//! - `StateQuery` - requests for state data (with response channel)
//! - `QueryResult` - responses from queries
//! - `TimerStatus` - introspection of the autoplay trigger

use std::fmt;

use eyeball::Subscriber;
use serde::Serialize;
use tokio::sync::oneshot;

use crate::provider::ProviderError;
use crate::slideshow::autoplay::{AutoplayTimer, SettingChange};
use crate::slideshow::coordinator::RequestToken;
use crate::slideshow::state::{CycleDirection, MoodConfig, SlideshowSnapshot};

/// Messages processed by the slideshow actor.
#[derive(Debug)]
pub enum SlideshowMessage {
    // ========================================================================
    // Navigation
    // ========================================================================
    /// Rotate the slides one step.
    Rotate { direction: CycleDirection },

    // ========================================================================
    // Mood
    // ========================================================================
    /// Switch to a mood and fetch its imagery.
    SelectMood { mood: MoodConfig },

    /// Fetch fresh imagery for the current mood.
    Refresh,

    /// Open the mood menu if closed, close it if open.
    ToggleMoodMenu,

    /// Open or close the mood menu.
    SetMoodMenuOpen { open: bool },

    // ========================================================================
    // Autoplay
    // ========================================================================
    /// Change one autoplay input.
    Autoplay(SettingChange),

    /// Change several autoplay inputs; the timer is reconciled once.
    AutoplayBatch(Vec<SettingChange>),

    // ========================================================================
    // Queries & lifecycle
    // ========================================================================
    /// Query state and reply on `respond_to`.
    Query {
        query: StateQuery,
        respond_to: oneshot::Sender<QueryResult>,
    },

    /// Stop the actor.
    Shutdown,
}

impl SlideshowMessage {
    /// Message name, for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Rotate { .. } => "Rotate",
            Self::SelectMood { .. } => "SelectMood",
            Self::Refresh => "Refresh",
            Self::ToggleMoodMenu => "ToggleMoodMenu",
            Self::SetMoodMenuOpen { .. } => "SetMoodMenuOpen",
            Self::Autoplay(_) => "Autoplay",
            Self::AutoplayBatch(_) => "AutoplayBatch",
            Self::Query { .. } => "Query",
            Self::Shutdown => "Shutdown",
        }
    }
}

/// State queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateQuery {
    /// Current snapshot.
    Snapshot,
    /// Configured moods.
    Moods,
    /// One mood by name.
    Mood { name: String },
    /// A subscriber to future snapshots.
    Subscribe,
    /// Autoplay trigger status.
    TimerStatus,
}

/// Autoplay trigger status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerStatus {
    /// Whether a trigger is armed.
    pub armed: bool,
    /// Triggers armed since startup.
    pub installs: u64,
    /// Rotations fired by the timer since startup.
    pub fired: u64,
}

impl From<&AutoplayTimer> for TimerStatus {
    fn from(timer: &AutoplayTimer) -> Self {
        Self {
            armed: timer.is_armed(),
            installs: timer.installs(),
            fired: timer.fired(),
        }
    }
}

/// Query responses.
pub enum QueryResult {
    Snapshot(SlideshowSnapshot),
    Moods(Vec<MoodConfig>),
    Mood(Option<MoodConfig>),
    Subscriber(Subscriber<SlideshowSnapshot>),
    TimerStatus(TimerStatus),
}

impl fmt::Debug for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snapshot(snapshot) => f.debug_tuple("Snapshot").field(snapshot).finish(),
            Self::Moods(moods) => f.debug_tuple("Moods").field(moods).finish(),
            Self::Mood(mood) => f.debug_tuple("Mood").field(mood).finish(),
            Self::Subscriber(_) => f.write_str("Subscriber(..)"),
            Self::TimerStatus(status) => f.debug_tuple("TimerStatus").field(status).finish(),
        }
    }
}

impl QueryResult {
    /// Try to get a snapshot from the result.
    #[must_use]
    pub fn into_snapshot(self) -> Option<SlideshowSnapshot> {
        match self {
            Self::Snapshot(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Try to get the mood list from the result.
    #[must_use]
    pub fn into_moods(self) -> Option<Vec<MoodConfig>> {
        match self {
            Self::Moods(moods) => Some(moods),
            _ => None,
        }
    }

    /// Try to get a single mood lookup from the result.
    #[must_use]
    pub fn into_mood(self) -> Option<Option<MoodConfig>> {
        match self {
            Self::Mood(mood) => Some(mood),
            _ => None,
        }
    }

    /// Try to get a subscriber from the result.
    #[must_use]
    pub fn into_subscriber(self) -> Option<Subscriber<SlideshowSnapshot>> {
        match self {
            Self::Subscriber(subscriber) => Some(subscriber),
            _ => None,
        }
    }

    /// Try to get the timer status from the result.
    #[must_use]
    pub fn into_timer_status(self) -> Option<TimerStatus> {
        match self {
            Self::TimerStatus(status) => Some(status),
            _ => None,
        }
    }
}

/// Result of a fetch task, fed back into the actor loop.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Token the fetch was issued with.
    pub token: RequestToken,
    /// Mood that was fetched.
    pub mood: MoodConfig,
    /// Provider answer.
    pub result: Result<Vec<String>, ProviderError>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names() {
        assert_eq!(SlideshowMessage::Refresh.name(), "Refresh");
        assert_eq!(
            SlideshowMessage::Rotate { direction: CycleDirection::Next }.name(),
            "Rotate"
        );
        assert_eq!(SlideshowMessage::AutoplayBatch(Vec::new()).name(), "AutoplayBatch");
    }

    #[test]
    fn test_query_result_conversions() {
        let status = TimerStatus { armed: true, installs: 1, fired: 0 };
        assert_eq!(QueryResult::TimerStatus(status).into_timer_status(), Some(status));
        assert!(QueryResult::Moods(Vec::new()).into_snapshot().is_none());
        assert_eq!(QueryResult::Mood(None).into_mood(), Some(None));
    }

    #[test]
    fn test_timer_status_from_disarmed_timer() {
        let status = TimerStatus::from(&AutoplayTimer::new());
        assert!(!status.armed);
        assert_eq!(status.installs, 0);
    }
}
