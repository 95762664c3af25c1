//! Handle for communicating with the slideshow actor.
//!
//! The `SlideshowHandle` is the presentation boundary: a cheap, cloneable
//! interface for sending commands to the actor, reading snapshots and
//! subscribing to snapshot changes.

use std::time::Duration;

use eyeball::Subscriber;
use tokio::sync::{mpsc, oneshot};

use super::messages::{QueryResult, SlideshowMessage, StateQuery, TimerStatus};
use crate::slideshow::autoplay::SettingChange;
use crate::slideshow::state::{AutoplayInterval, CycleDirection, MoodConfig, SlideshowSnapshot};

/// Error types for actor communication.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// Failed to send message to actor.
    #[error("failed to send message to slideshow actor: channel closed")]
    SendFailed,

    /// Failed to receive response from actor.
    #[error("failed to receive response from slideshow actor: channel closed")]
    ReceiveFailed,

    /// Query timed out.
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    /// The actor answered a query with the wrong result kind.
    #[error("unexpected response to {0} query")]
    UnexpectedResponse(&'static str),

    /// No configured mood has this name.
    #[error("unknown mood: {0}")]
    UnknownMood(String),
}

/// Handle for communicating with the slideshow actor.
#[derive(Clone)]
pub struct SlideshowHandle {
    sender: mpsc::Sender<SlideshowMessage>,
}

impl SlideshowHandle {
    pub(crate) const fn new(sender: mpsc::Sender<SlideshowMessage>) -> Self { Self { sender } }

    // ========================================================================
    // Sending
    // ========================================================================

    /// Send a message without waiting for channel capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed or full.
    pub fn send(&self, msg: SlideshowMessage) -> Result<(), ActorError> {
        self.sender.try_send(msg).map_err(|_| ActorError::SendFailed)
    }

    /// Send a message, waiting for channel capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed.
    pub async fn send_async(&self, msg: SlideshowMessage) -> Result<(), ActorError> {
        self.sender.send(msg).await.map_err(|_| ActorError::SendFailed)
    }

    /// Execute a query and wait for the result.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed, or
    /// [`ActorError::ReceiveFailed`] if the response channel is closed.
    pub async fn query(&self, query: StateQuery) -> Result<QueryResult, ActorError> {
        let (tx, rx) = oneshot::channel();

        self.send_async(SlideshowMessage::Query { query, respond_to: tx }).await?;

        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Execute a query with a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Timeout`] if the query doesn't complete in time,
    /// or any error from [`Self::query`].
    pub async fn query_timeout(
        &self,
        query: StateQuery,
        timeout: Duration,
    ) -> Result<QueryResult, ActorError> {
        tokio::time::timeout(timeout, self.query(query))
            .await
            .map_err(|_| ActorError::Timeout(timeout))?
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Current snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn snapshot(&self) -> Result<SlideshowSnapshot, ActorError> {
        self.query(StateQuery::Snapshot)
            .await?
            .into_snapshot()
            .ok_or(ActorError::UnexpectedResponse("Snapshot"))
    }

    /// Subscribe to snapshot changes.
    ///
    /// The subscriber starts at the current snapshot; `next().await` yields
    /// every later one that it observes.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn subscribe(&self) -> Result<Subscriber<SlideshowSnapshot>, ActorError> {
        self.query(StateQuery::Subscribe)
            .await?
            .into_subscriber()
            .ok_or(ActorError::UnexpectedResponse("Subscribe"))
    }

    /// Configured moods.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn moods(&self) -> Result<Vec<MoodConfig>, ActorError> {
        self.query(StateQuery::Moods)
            .await?
            .into_moods()
            .ok_or(ActorError::UnexpectedResponse("Moods"))
    }

    /// Autoplay trigger status.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn timer_status(&self) -> Result<TimerStatus, ActorError> {
        self.query(StateQuery::TimerStatus)
            .await?
            .into_timer_status()
            .ok_or(ActorError::UnexpectedResponse("TimerStatus"))
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Rotate forward one slide.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn rotate_next(&self) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::Rotate { direction: CycleDirection::Next }).await
    }

    /// Rotate back one slide.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn rotate_prev(&self) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::Rotate { direction: CycleDirection::Previous }).await
    }

    /// Switch to `mood` and fetch its imagery.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn select_mood(&self, mood: MoodConfig) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::SelectMood { mood }).await
    }

    /// Switch to the configured mood called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::UnknownMood`] if no configured mood has that
    /// name, or an error if communication with the actor fails.
    pub async fn select_mood_by_name(&self, name: &str) -> Result<(), ActorError> {
        let mood = self
            .query(StateQuery::Mood { name: name.to_string() })
            .await?
            .into_mood()
            .ok_or(ActorError::UnexpectedResponse("Mood"))?
            .ok_or_else(|| ActorError::UnknownMood(name.to_string()))?;

        self.select_mood(mood).await
    }

    /// Fetch fresh imagery for the current mood.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn refresh(&self) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::Refresh).await
    }

    /// Open or close the mood menu.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn toggle_mood_menu(&self) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::ToggleMoodMenu).await
    }

    /// Set the mood menu state.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn set_mood_menu_open(&self, open: bool) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::SetMoodMenuOpen { open }).await
    }

    /// Enter or leave wallpaper mode.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn set_wallpaper_mode(&self, enabled: bool) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::Autoplay(SettingChange::WallpaperMode(enabled))).await
    }

    /// Turn the manual timer on or off.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn set_timer_enabled(&self, enabled: bool) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::Autoplay(SettingChange::TimerEnabled(enabled))).await
    }

    /// Set the autoplay interval, clamped to the allowed range.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn set_interval(&self, seconds: u64) -> Result<(), ActorError> {
        let interval = AutoplayInterval::clamped(seconds);
        self.send_async(SlideshowMessage::Autoplay(SettingChange::Interval(interval))).await
    }

    /// Apply several autoplay changes at once.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub async fn apply_batch(&self, changes: Vec<SettingChange>) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::AutoplayBatch(changes)).await
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Check whether the actor is still running.
    #[must_use]
    pub fn is_alive(&self) -> bool { !self.sender.is_closed() }

    /// Ask the actor to stop. In-flight fetches are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has already stopped.
    pub async fn shutdown(&self) -> Result<(), ActorError> {
        self.send_async(SlideshowMessage::Shutdown).await
    }
}
