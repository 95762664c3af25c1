//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r##"// Curator Configuration File
// ===========================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.
//
// Run `curator schema` to print the JSON Schema for this file.

{
  // ============================================================================
  // Moods
  // ============================================================================
  // Selectable themes. Each mood drives the photo search query and the accent
  // color. Defining this list replaces the built-in moods.
  // "moods": [
  //   {
  //     "name": "space",
  //     "label": "Cosmic",
  //     "promptPrefix": "galaxy nebula outer space stars planet",
  //     "accentColor": "#3b82f6",
  //     // Optional text shown on every fetched slide
  //     "description": "Experience the breathtaking cosmic atmosphere."
  //   }
  // ],

  // Mood selected at startup (defaults to the first mood)
  // "defaultMood": "cyberpunk",

  // Slides shown before the first fetch (defaults to the built-in set)
  // "initialSlides": [
  //   {
  //     "id": "1",
  //     "imageUrl": "https://images.pexels.com/photos/1671325/pexels-photo-1671325.jpeg",
  //     "title": "THE WILD",
  //     "subtitle": "NATURE",
  //     "description": "Explore the depths of the untamed wilderness.",
  //     "mood": "nature"
  //   }
  // ],

  // ============================================================================
  // Autoplay
  // ============================================================================
  // "autoplay": {
  //   // Seconds between rotations (2 to 30)
  //   "interval": 5,
  //
  //   // Start in wallpaper (zen) mode: chrome hidden, slides rotate
  //   "wallpaper": false,
  //
  //   // Start with the manual timer on
  //   "timer": false
  // },

  // ============================================================================
  // Image Provider
  // ============================================================================
  // "provider": {
  //   // Pexels search endpoint
  //   "endpoint": "https://api.pexels.com/v1/search",
  //
  //   // Path to .env file containing PEXELS_API_KEY
  //   // (PEXELS_API_KEY in the environment takes precedence)
  //   "apiKeys": "",
  //
  //   // Search filters
  //   "orientation": "landscape",
  //   "size": "large",
  //
  //   // Request timeout in seconds
  //   "timeout": 15,
  //
  //   // Placeholder images used when a search fails
  //   "placeholder": "https://picsum.photos/1920/1080"
  // },

  // ============================================================================
  // Overlapping Mood Changes
  // ============================================================================
  // "latestWins": a new selection supersedes an in-flight fetch
  // "ignoreWhileFetching": selections are ignored until the fetch resolves
  // "overlap": "latestWins"
}
"##
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
