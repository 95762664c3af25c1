//! Slideshow actor.
//!
//! The actor owns the [`SlideshowState`] and is the only place it changes.
//! One `select!` loop serializes every trigger:
//!
//! - inbox messages from [`SlideshowHandle`]s (navigation, mood, settings,
//!   queries)
//! - completions of fetch tasks, collected from a `JoinSet`
//! - the autoplay deadline
//!
//! After each step the autoplay timer is reconciled against the settings and,
//! if the state revision moved, a new snapshot is published to subscribers.
//! The presentation layer therefore never sees a half-replaced slide set.
//!
//! # Panic Recovery
//!
//! A panicking handler is caught and logged, and the actor keeps serving
//! messages. A panicking provider is caught inside its fetch task and
//! reported as a failed fetch, so the request token is never lost.

mod handle;
pub mod handlers;
mod messages;

use std::any::Any;
use std::future::pending;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use eyeball::Observable;
use futures::FutureExt;
pub use handle::{ActorError, SlideshowHandle};
pub use messages::{FetchOutcome, QueryResult, SlideshowMessage, StateQuery, TimerStatus};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::{Instant, sleep_until};

use crate::provider::{ImageProvider, ProviderError};
use crate::slideshow::autoplay::{AutoplayTimer, Reconciled};
use crate::slideshow::coordinator::FetchRequest;
use crate::slideshow::state::{SlideshowSnapshot, SlideshowState};

/// Channel buffer size for the slideshow actor.
const CHANNEL_BUFFER_SIZE: usize = 64;

/// The actor that owns all slideshow state.
pub struct SlideshowActor<P> {
    state: SlideshowState,
    timer: AutoplayTimer,
    provider: Arc<P>,
    fetches: JoinSet<FetchOutcome>,
    snapshot: Observable<SlideshowSnapshot>,
    receiver: mpsc::Receiver<SlideshowMessage>,
}

impl<P: ImageProvider + 'static> SlideshowActor<P> {
    /// Spawn the actor on the current tokio runtime and return a handle.
    ///
    /// Autoplay is armed immediately if the initial settings ask for it.
    #[must_use]
    pub fn spawn(state: SlideshowState, provider: Arc<P>) -> SlideshowHandle {
        tracing::debug!("slideshow: spawning actor");
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let mut actor = Self {
            snapshot: Observable::new(state.snapshot()),
            state,
            timer: AutoplayTimer::new(),
            provider,
            fetches: JoinSet::new(),
            receiver,
        };
        actor.reconcile_timer();

        tokio::spawn(actor.run());

        SlideshowHandle::new(sender)
    }

    async fn run(mut self) {
        tracing::trace!("slideshow: actor loop starting");

        loop {
            let deadline = self.timer.deadline();

            tokio::select! {
                biased;

                msg = self.receiver.recv() => {
                    let Some(msg) = msg else {
                        tracing::debug!("slideshow: actor channel closed, exiting");
                        break;
                    };
                    if matches!(msg, SlideshowMessage::Shutdown) {
                        tracing::debug!("slideshow: actor received shutdown");
                        break;
                    }
                    let name = msg.name();
                    self.guarded(name, |actor| actor.handle_message(msg));
                }

                Some(joined) = self.fetches.join_next(), if !self.fetches.is_empty() => {
                    match joined {
                        Ok(outcome) => self.guarded("FetchCompleted", |actor| {
                            handlers::on_fetch_completed(&mut actor.state, outcome);
                        }),
                        Err(err) => tracing::error!(error = %err, "slideshow: fetch task aborted"),
                    }
                }

                () = wait_for(deadline) => {
                    if self.timer.fire(Instant::now()) {
                        self.guarded("TimerFired", |actor| handlers::on_timer_fired(&mut actor.state));
                    }
                }
            }

            self.reconcile_timer();
            self.publish();
        }

        self.fetches.abort_all();
    }

    /// Run `f`, logging instead of unwinding if it panics.
    fn guarded(&mut self, name: &'static str, f: impl FnOnce(&mut Self)) {
        let result = catch_unwind(AssertUnwindSafe(|| f(self)));

        if let Err(payload) = result {
            tracing::error!(
                msg = name,
                panic = %panic_message(payload.as_ref()),
                "slideshow: PANIC in actor, state may be inconsistent"
            );
        }
    }

    fn handle_message(&mut self, msg: SlideshowMessage) {
        match msg {
            SlideshowMessage::Rotate { direction } => handlers::on_rotate(&mut self.state, direction),
            SlideshowMessage::SelectMood { mood } => {
                if let Some(request) = handlers::on_select_mood(&mut self.state, mood) {
                    self.start_fetch(request);
                }
            }
            SlideshowMessage::Refresh => {
                if let Some(request) = handlers::on_refresh(&mut self.state) {
                    self.start_fetch(request);
                }
            }
            SlideshowMessage::ToggleMoodMenu => handlers::on_toggle_mood_menu(&mut self.state),
            SlideshowMessage::SetMoodMenuOpen { open } => {
                handlers::on_set_mood_menu_open(&mut self.state, open);
            }
            SlideshowMessage::Autoplay(change) => {
                handlers::on_setting_changes(&mut self.state, [change]);
            }
            SlideshowMessage::AutoplayBatch(changes) => {
                handlers::on_setting_changes(&mut self.state, changes);
            }
            SlideshowMessage::Query { query, respond_to } => {
                let result = self.handle_query(query);
                let _ = respond_to.send(result);
            }
            // Handled in the run loop.
            SlideshowMessage::Shutdown => {}
        }
    }

    fn handle_query(&self, query: StateQuery) -> QueryResult {
        match query {
            StateQuery::Snapshot => QueryResult::Snapshot(self.state.snapshot()),
            StateQuery::Moods => QueryResult::Moods(self.state.moods().to_vec()),
            StateQuery::Mood { name } => QueryResult::Mood(self.state.mood(&name).cloned()),
            StateQuery::Subscribe => QueryResult::Subscriber(Observable::subscribe(&self.snapshot)),
            StateQuery::TimerStatus => QueryResult::TimerStatus(TimerStatus::from(&self.timer)),
        }
    }

    fn start_fetch(&mut self, request: FetchRequest) {
        let FetchRequest { token, mood, count } = request;
        let provider = Arc::clone(&self.provider);
        tracing::debug!(%token, mood = %mood.name, count, "slideshow: starting fetch");

        self.fetches.spawn(async move {
            let result = AssertUnwindSafe(provider.fetch_images(&mood.prompt_prefix, count))
                .catch_unwind()
                .await
                .unwrap_or_else(|payload| {
                    Err(ProviderError::Panicked(panic_message(payload.as_ref())))
                });

            FetchOutcome { token, mood, result }
        });
    }

    fn reconcile_timer(&mut self) {
        let settings = self.state.autoplay();
        match self.timer.reconcile(settings, Instant::now()) {
            Reconciled::Unchanged => {}
            Reconciled::Armed | Reconciled::Rearmed => {
                tracing::debug!(interval = settings.interval.seconds(), "slideshow: autoplay armed");
            }
            Reconciled::Disarmed => tracing::debug!("slideshow: autoplay disarmed"),
        }
    }

    fn publish(&mut self) {
        if Observable::get(&self.snapshot).revision != self.state.revision() {
            Observable::set(&mut self.snapshot, self.state.snapshot());
        }
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => pending().await,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
