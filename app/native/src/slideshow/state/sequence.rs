//! Slide rotation engine.
//!
//! A [`SlideSequence`] is an ordered, non-empty list of slides where the
//! head is the active slide. Rotation is a permutation: it never changes the
//! length or the set of slides, only their order.

use std::collections::{HashSet, VecDeque};

use super::types::{CycleDirection, Slide};

/// Errors raised when building a sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A sequence must hold at least one slide.
    #[error("slide sequence must contain at least one slide")]
    Empty,

    /// Two slides share the same identifier.
    #[error("duplicate slide id in sequence: {0}")]
    DuplicateId(String),
}

/// Ordered, non-empty set of slides. Position 0 is the active slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSequence {
    slides: VecDeque<Slide>,
}

impl SlideSequence {
    /// Builds a sequence, rejecting empty input and duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Empty`] for an empty list and
    /// [`SequenceError::DuplicateId`] when an id appears twice.
    pub fn new(slides: Vec<Slide>) -> Result<Self, SequenceError> {
        if slides.is_empty() {
            return Err(SequenceError::Empty);
        }

        let mut seen = HashSet::with_capacity(slides.len());
        for slide in &slides {
            if !seen.insert(slide.id.as_str()) {
                return Err(SequenceError::DuplicateId(slide.id.clone()));
            }
        }

        Ok(Self { slides: slides.into() })
    }

    /// Returns the sequence rotated one step forward.
    #[must_use]
    pub fn rotate_next(mut self) -> Self {
        self.advance();
        self
    }

    /// Returns the sequence rotated one step backward.
    #[must_use]
    pub fn rotate_prev(mut self) -> Self {
        self.retreat();
        self
    }

    /// Rotates in place in the given direction.
    pub fn rotate(&mut self, direction: CycleDirection) {
        match direction {
            CycleDirection::Next => self.advance(),
            CycleDirection::Previous => self.retreat(),
        }
    }

    /// Moves the head to the tail.
    pub fn advance(&mut self) {
        debug_assert!(!self.slides.is_empty(), "slide sequence became empty");
        if let Some(head) = self.slides.pop_front() {
            self.slides.push_back(head);
        }
    }

    /// Moves the tail to the head.
    pub fn retreat(&mut self) {
        debug_assert!(!self.slides.is_empty(), "slide sequence became empty");
        if let Some(tail) = self.slides.pop_back() {
            self.slides.push_front(tail);
        }
    }

    /// The active slide.
    #[must_use]
    pub fn active(&self) -> Option<&Slide> { self.slides.front() }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize { self.slides.len() }

    /// Always `false` for a sequence built through [`Self::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool { self.slides.is_empty() }

    /// Iterates slides from the head.
    pub fn iter(&self) -> impl Iterator<Item = &Slide> { self.slides.iter() }

    /// Slide ids in order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> { self.slides.iter().map(|s| s.id.as_str()).collect() }

    /// Copies the slides into a vector, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Slide> { self.slides.iter().cloned().collect() }
}

impl<'a> IntoIterator for &'a SlideSequence {
    type Item = &'a Slide;
    type IntoIter = std::collections::vec_deque::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter { self.slides.iter() }
}
