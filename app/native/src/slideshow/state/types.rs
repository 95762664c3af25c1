//! Value types shared by the slideshow state, coordinator and presentation.

use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_INTERVAL_SECS, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};

/// One displayable image with its text metadata.
///
/// Slides are never edited once created; rotation reorders them and a mood
/// fetch replaces the whole set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Unique identifier within a sequence.
    pub id: String,
    /// Image location.
    pub image_url: String,
    /// Small heading shown above the subtitle.
    pub title: String,
    /// Large heading, drawn in the mood accent color.
    pub subtitle: String,
    /// Body text.
    pub description: String,
    /// Name of the mood this slide belongs to.
    pub mood: String,
}

/// A named visual theme driving the search query and accent color.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoodConfig {
    /// Stable identifier (e.g. `space`).
    pub name: String,
    /// Display label (e.g. `Cosmic`).
    pub label: String,
    /// Search query sent to the image provider.
    pub prompt_prefix: String,
    /// Accent color passed through to the presentation layer.
    pub accent_color: String,
    /// Description used for fetched slides. Falls back to a generic text
    /// built from the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MoodConfig {
    /// Title stamped on every slide fetched for this mood.
    #[must_use]
    pub fn slide_title(&self) -> String { self.label.to_uppercase() }

    /// Description stamped on every slide fetched for this mood.
    #[must_use]
    pub fn slide_description(&self) -> String {
        self.description.clone().unwrap_or_else(|| {
            format!(
                "Experience the breathtaking {} atmosphere curated from world-class photography. \
                 Every image captured to tell a unique story.",
                self.label.to_lowercase()
            )
        })
    }
}

/// Seconds between autoplay rotations.
///
/// Construction clamps to the allowed range, so a value of this type is
/// always valid and the timer never re-checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AutoplayInterval(u64);

impl AutoplayInterval {
    /// Builds an interval, clamping `secs` into the allowed range.
    #[must_use]
    pub const fn clamped(secs: u64) -> Self {
        if secs < MIN_INTERVAL_SECS {
            Self(MIN_INTERVAL_SECS)
        } else if secs > MAX_INTERVAL_SECS {
            Self(MAX_INTERVAL_SECS)
        } else {
            Self(secs)
        }
    }

    /// Interval in whole seconds.
    #[must_use]
    pub const fn seconds(self) -> u64 { self.0 }

    /// Interval as a [`Duration`].
    #[must_use]
    pub const fn as_duration(self) -> Duration { Duration::from_secs(self.0) }
}

impl Default for AutoplayInterval {
    fn default() -> Self { Self(DEFAULT_INTERVAL_SECS) }
}

impl From<u64> for AutoplayInterval {
    fn from(secs: u64) -> Self { Self::clamped(secs) }
}

/// Direction of a manual or timed rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleDirection {
    /// Head moves to the tail.
    Next,
    /// Tail moves to the head.
    Previous,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood(label: &str) -> MoodConfig {
        MoodConfig {
            name: label.to_lowercase(),
            label: label.to_string(),
            prompt_prefix: "query".to_string(),
            accent_color: "#ffffff".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_slide_title_is_upper_cased_label() {
        assert_eq!(mood("Dark Fantasy").slide_title(), "DARK FANTASY");
    }

    #[test]
    fn test_slide_description_defaults_to_label_text() {
        let description = mood("Cosmic").slide_description();
        assert!(description.starts_with("Experience the breathtaking cosmic atmosphere"));
    }

    #[test]
    fn test_slide_description_uses_override() {
        let mut custom = mood("Zen");
        custom.description = Some("Quiet gardens.".to_string());
        assert_eq!(custom.slide_description(), "Quiet gardens.");
    }

    #[test]
    fn test_interval_clamps_low_and_high() {
        assert_eq!(AutoplayInterval::clamped(0).seconds(), MIN_INTERVAL_SECS);
        assert_eq!(AutoplayInterval::clamped(1).seconds(), MIN_INTERVAL_SECS);
        assert_eq!(AutoplayInterval::clamped(31).seconds(), MAX_INTERVAL_SECS);
        assert_eq!(AutoplayInterval::clamped(u64::MAX).seconds(), MAX_INTERVAL_SECS);
    }

    #[test]
    fn test_interval_keeps_in_range_values() {
        assert_eq!(AutoplayInterval::from(2).seconds(), 2);
        assert_eq!(AutoplayInterval::from(17).seconds(), 17);
        assert_eq!(AutoplayInterval::from(30).seconds(), 30);
    }

    #[test]
    fn test_interval_default_and_duration() {
        let interval = AutoplayInterval::default();
        assert_eq!(interval.seconds(), DEFAULT_INTERVAL_SECS);
        assert_eq!(interval.as_duration(), Duration::from_secs(DEFAULT_INTERVAL_SECS));
    }

    #[test]
    fn test_slide_serializes_camel_case() {
        let slide = Slide {
            id: "1".to_string(),
            image_url: "https://example.com/a.jpg".to_string(),
            title: "T".to_string(),
            subtitle: "S".to_string(),
            description: "D".to_string(),
            mood: "nature".to_string(),
        };
        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/a.jpg");
    }
}
