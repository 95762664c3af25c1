//! Slideshow state.
//!
//! This module contains:
//! - Value types (`Slide`, `MoodConfig`, `AutoplayInterval`, `CycleDirection`)
//! - The rotation engine (`SlideSequence`)
//! - The `SlideshowState` aggregate and its published `SlideshowSnapshot`

mod sequence;
mod slideshow_state;
mod types;

pub use sequence::{SequenceError, SlideSequence};
pub use slideshow_state::{FetchApplied, SlideshowSnapshot, SlideshowState};
pub use types::{AutoplayInterval, CycleDirection, MoodConfig, Slide};
