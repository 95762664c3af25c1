//! Presentation layer.
//!
//! [`render`] maps a [`SlideshowSnapshot`] to a [`Frame`]: a plain
//! description of what is on screen. It performs no I/O, so any front end
//! (the terminal printer in `cli::output`, a JSON consumer, a test) draws the
//! same thing from the same snapshot.
//!
//! Wallpaper mode hides every piece of chrome: header, hero text, thumbnails,
//! arrows, sidebar and indicators. Only the background image stays, at full
//! brightness.

use serde::Serialize;

use crate::slideshow::state::SlideshowSnapshot;

/// Brand shown in the header.
pub const BRAND: &str = "PEXELS CURATOR";

/// Caption under every thumbnail.
pub const THUMBNAIL_CAPTION: &str = "VIEW NEXT";

/// Heading of the loading overlay.
pub const OVERLAY_HEADING: &str = "Curating Atmosphere";

/// Heading of the mood menu.
pub const MENU_HEADING: &str = "Visual Experience";

/// Indicator color for inactive slides.
pub const INACTIVE_INDICATOR: &str = "rgba(255,255,255,0.1)";

/// Everything on screen for one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Snapshot revision this frame was rendered from.
    pub revision: u64,
    /// Accent color of the current mood.
    pub accent_color: String,
    /// Active slide image.
    pub background: Option<Background>,
    /// Top navigation bar.
    pub header: Option<Header>,
    /// Active slide text.
    pub hero: Option<Hero>,
    /// Upcoming slides.
    pub thumbnails: Vec<Thumbnail>,
    /// Whether the previous/next arrows are shown.
    pub arrows: bool,
    /// Right-hand controls.
    pub sidebar: Option<Sidebar>,
    /// One marker per slide; the first is the active one.
    pub indicators: Vec<Indicator>,
    /// Loading overlay while a fetch is in flight.
    pub overlay: Option<Overlay>,
    /// Whether the exit-wallpaper control is offered.
    pub exit_wallpaper: bool,
    /// Autoplay summary.
    pub autoplay: AutoplayBadge,
}

/// Background image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub image_url: String,
    /// Dimmed behind the chrome; full brightness in wallpaper mode.
    pub dimmed: bool,
}

/// Top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub brand: &'static str,
    pub mood_label: String,
}

/// Active slide text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    /// Drawn in the accent color.
    pub subtitle: String,
    pub description: String,
}

/// Preview of an upcoming slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub caption: &'static str,
}

/// Label on the mood button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StatusLabel {
    Fetching,
    Theme,
}

impl StatusLabel {
    /// Display text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fetching => "Fetching",
            Self::Theme => "Theme",
        }
    }
}

/// Right-hand controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sidebar {
    pub status: StatusLabel,
    /// Present while the mood menu is open.
    pub menu: Option<MoodMenu>,
}

/// Open mood menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodMenu {
    pub heading: &'static str,
    pub interval_seconds: u64,
    pub entries: Vec<MoodEntry>,
    /// Mood buttons and refresh are disabled while fetching.
    pub enabled: bool,
}

/// One selectable mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub name: String,
    pub label: String,
    pub accent_color: String,
    pub selected: bool,
}

/// Slide position marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub active: bool,
    pub color: String,
}

/// Loading overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub heading: &'static str,
    pub message: String,
}

/// Autoplay summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoplayBadge {
    pub active: bool,
    pub wallpaper: bool,
    pub timer: bool,
    pub interval_seconds: u64,
}

/// Loading overlay message for a mood label.
#[must_use]
pub fn overlay_message(label: &str) -> String { format!("Sourcing high-end {label} imagery via Pexels") }

/// Renders a snapshot.
#[must_use]
pub fn render(snapshot: &SlideshowSnapshot) -> Frame {
    let chrome = !snapshot.wallpaper_mode;
    let accent = &snapshot.current_mood.accent_color;
    let active = snapshot.active_slide();

    Frame {
        revision: snapshot.revision,
        accent_color: accent.clone(),
        background: active.map(|slide| Background {
            image_url: slide.image_url.clone(),
            dimmed: chrome,
        }),
        header: chrome.then(|| Header {
            brand: BRAND,
            mood_label: snapshot.current_mood.label.clone(),
        }),
        hero: active.filter(|_| chrome).map(|slide| Hero {
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            description: slide.description.clone(),
        }),
        thumbnails: if chrome {
            snapshot
                .slides
                .iter()
                .skip(1)
                .map(|slide| Thumbnail {
                    id: slide.id.clone(),
                    title: slide.title.clone(),
                    image_url: slide.image_url.clone(),
                    caption: THUMBNAIL_CAPTION,
                })
                .collect()
        } else {
            Vec::new()
        },
        arrows: chrome,
        sidebar: chrome.then(|| render_sidebar(snapshot)),
        indicators: if chrome {
            (0..snapshot.slides.len())
                .map(|index| Indicator {
                    active: index == 0,
                    color: if index == 0 { accent.clone() } else { INACTIVE_INDICATOR.to_string() },
                })
                .collect()
        } else {
            Vec::new()
        },
        overlay: snapshot.is_fetching.then(|| Overlay {
            heading: OVERLAY_HEADING,
            message: overlay_message(&snapshot.current_mood.label),
        }),
        exit_wallpaper: snapshot.wallpaper_mode,
        autoplay: AutoplayBadge {
            active: snapshot.autoplay_active,
            wallpaper: snapshot.wallpaper_mode,
            timer: snapshot.timer_enabled,
            interval_seconds: snapshot.interval_seconds,
        },
    }
}

fn render_sidebar(snapshot: &SlideshowSnapshot) -> Sidebar {
    let status = if snapshot.is_fetching { StatusLabel::Fetching } else { StatusLabel::Theme };

    let menu = snapshot.mood_menu_open.then(|| MoodMenu {
        heading: MENU_HEADING,
        interval_seconds: snapshot.interval_seconds,
        entries: snapshot
            .moods
            .iter()
            .map(|mood| MoodEntry {
                name: mood.name.clone(),
                label: mood.label.clone(),
                accent_color: mood.accent_color.clone(),
                selected: mood.name == snapshot.current_mood.name,
            })
            .collect(),
        enabled: !snapshot.is_fetching,
    });

    Sidebar { status, menu }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slideshow::autoplay::AutoplaySettings;
    use crate::slideshow::catalog::{builtin_moods, initial_slides};
    use crate::slideshow::coordinator::OverlapPolicy;
    use crate::slideshow::state::{SlideSequence, SlideshowState};

    fn snapshot() -> SlideshowSnapshot {
        let moods = builtin_moods();
        let initial = moods[0].clone();
        SlideshowState::new(
            SlideSequence::new(initial_slides()).unwrap(),
            moods,
            initial,
            AutoplaySettings::default(),
            OverlapPolicy::default(),
        )
        .snapshot()
    }

    #[test]
    fn test_render_default_frame() {
        let frame = render(&snapshot());

        assert_eq!(frame.header.as_ref().unwrap().mood_label, "Cyberpunk");
        assert_eq!(frame.hero.as_ref().unwrap().title, "THE WILD");
        assert!(frame.background.as_ref().unwrap().dimmed);
        assert_eq!(frame.thumbnails.len(), 3);
        assert!(frame.thumbnails.iter().all(|t| t.caption == THUMBNAIL_CAPTION));
        assert_eq!(frame.thumbnails[0].id, "2");
        assert!(frame.arrows);
        assert!(frame.overlay.is_none());
        assert!(!frame.exit_wallpaper);
    }

    #[test]
    fn test_indicators_mark_head_with_accent() {
        let frame = render(&snapshot());
        assert_eq!(frame.indicators.len(), 4);
        assert!(frame.indicators[0].active);
        assert_eq!(frame.indicators[0].color, "#f43f5e");
        assert!(frame.indicators[1..].iter().all(|i| !i.active && i.color == INACTIVE_INDICATOR));
    }

    #[test]
    fn test_wallpaper_mode_hides_chrome() {
        let mut snapshot = snapshot();
        snapshot.wallpaper_mode = true;

        let frame = render(&snapshot);

        assert!(frame.header.is_none());
        assert!(frame.hero.is_none());
        assert!(frame.thumbnails.is_empty());
        assert!(!frame.arrows);
        assert!(frame.sidebar.is_none());
        assert!(frame.indicators.is_empty());
        assert!(frame.exit_wallpaper);
        assert!(!frame.background.unwrap().dimmed);
    }

    #[test]
    fn test_fetching_shows_overlay_and_status() {
        let mut snapshot = snapshot();
        snapshot.is_fetching = true;
        snapshot.current_mood = snapshot.moods[3].clone();

        let frame = render(&snapshot);

        let overlay = frame.overlay.unwrap();
        assert_eq!(overlay.message, "Sourcing high-end Cosmic imagery via Pexels");
        assert_eq!(frame.sidebar.unwrap().status.as_str(), "Fetching");
    }

    #[test]
    fn test_open_menu_lists_moods() {
        let mut snapshot = snapshot();
        snapshot.mood_menu_open = true;

        let sidebar = render(&snapshot).sidebar.unwrap();
        assert_eq!(sidebar.status, StatusLabel::Theme);

        let menu = sidebar.menu.unwrap();
        assert_eq!(menu.entries.len(), 5);
        assert!(menu.entries[0].selected);
        assert!(menu.entries[1..].iter().all(|e| !e.selected));
        assert_eq!(menu.interval_seconds, 5);
        assert!(menu.enabled);
    }
}
