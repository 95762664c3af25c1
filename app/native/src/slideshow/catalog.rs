//! Built-in moods and the static slide set shown before any fetch.

use super::state::{MoodConfig, Slide};

fn mood(name: &str, label: &str, prompt_prefix: &str, accent_color: &str) -> MoodConfig {
    MoodConfig {
        name: name.to_string(),
        label: label.to_string(),
        prompt_prefix: prompt_prefix.to_string(),
        accent_color: accent_color.to_string(),
        description: None,
    }
}

fn pexels_photo(id: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2"
    )
}

fn slide(id: &str, photo: u32, title: &str, subtitle: &str, description: &str, mood: &str) -> Slide {
    Slide {
        id: id.to_string(),
        image_url: pexels_photo(photo),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        mood: mood.to_string(),
    }
}

/// Moods available when the configuration does not define its own.
#[must_use]
pub fn builtin_moods() -> Vec<MoodConfig> {
    vec![
        mood("cyberpunk", "Cyberpunk", "cyberpunk city neon night futuristic", "#f43f5e"),
        mood("nature", "Nature", "enchanted forest mystical waterfall mountain", "#10b981"),
        mood("fantasy", "Dark Fantasy", "gothic castle dark fantasy epic landscape", "#8b5cf6"),
        mood("space", "Cosmic", "galaxy nebula outer space stars planet", "#3b82f6"),
        mood("minimal", "Zen", "minimalist architecture zen garden peaceful sunset", "#f59e0b"),
    ]
}

/// Slides shown at startup.
#[must_use]
pub fn initial_slides() -> Vec<Slide> {
    vec![
        slide(
            "1",
            1_671_325,
            "THE WILD",
            "NATURE",
            "Explore the depths of the untamed wilderness where nature reigns supreme. Experience \
             the world in its purest, most raw form through high-definition photography.",
            "nature",
        ),
        slide(
            "2",
            2_525_903,
            "LOST CITY",
            "EXPLORE",
            "Ancient ruins hidden deep within the mist of time, waiting for the bold to uncover \
             their forgotten secrets and golden treasures.",
            "nature",
        ),
        slide(
            "3",
            14_350_712,
            "NEON EDGE",
            "FUTURE",
            "When the sun sets, the city of tomorrow wakes up in a blaze of neon and shadow. A \
             world where tech and humanity collide.",
            "cyberpunk",
        ),
        slide(
            "4",
            189_349,
            "DEEP BLUE",
            "OCEAN",
            "Beneath the surface lies a quiet world of immense pressure and unparalleled beauty. \
             The final frontier of our own planet.",
            "nature",
        ),
    ]
}
