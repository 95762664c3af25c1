//! Slideshow core.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                         SlideshowHandle                          │
//! │    (rotate, select mood, refresh, autoplay settings, queries)    │
//! └──────────────────────────────┬───────────────────────────────────┘
//!                                │ mpsc
//!                                ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                          SlideshowActor                          │
//! │   inbox ─┐                                                       │
//! │   fetch completions (JoinSet) ─┼─► SlideshowState ─► snapshot    │
//! │   autoplay deadline ─┘      (sequence, coordinator, settings)    │
//! └──────────────────────────────┬───────────────────────────────────┘
//!                                │ eyeball::Observable
//!                                ▼
//!                     view::render(&snapshot)
//! ```
//!
//! - [`state`]: slide types, the rotation engine and the state aggregate
//! - [`coordinator`]: mood selection, request tokens and slide building
//! - [`autoplay`]: the single periodic trigger behind wallpaper/timer mode
//! - [`actor`]: the control loop serializing all of the above
//! - [`catalog`]: built-in moods and startup slides

pub mod actor;
pub mod autoplay;
pub mod catalog;
pub mod coordinator;
pub mod state;

pub use actor::{ActorError, SlideshowActor, SlideshowHandle};
pub use autoplay::{AutoplaySettings, SettingChange};
pub use coordinator::OverlapPolicy;
pub use state::{AutoplayInterval, CycleDirection, MoodConfig, Slide, SlideshowSnapshot};
