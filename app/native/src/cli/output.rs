//! CLI output formatting.
//!
//! - Frames drawn as plain terminal text, with the mood accent as color
//! - JSON syntax highlighting

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};

use crate::view::Frame;

// ============================================================================
// Colors
// ============================================================================

/// Parses `#rrggbb` into RGB components.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Colors `text` with a hex accent, leaving it plain if the accent is not `#rrggbb`.
fn accent(text: &str, color: &str) -> ColoredString {
    match parse_hex_color(color) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

// ============================================================================
// Frames
// ============================================================================

/// Formats a frame as terminal text.
#[must_use]
pub fn format_frame(frame: &Frame) -> String {
    let mut out = String::new();
    let color = frame.accent_color.as_str();

    if let Some(header) = &frame.header {
        let _ = writeln!(out, "{}  ·  {}", header.brand.bold(), accent(&header.mood_label, color));
    }

    if let Some(hero) = &frame.hero {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", hero.title.dimmed());
        let _ = writeln!(out, "  {}", accent(&hero.subtitle, color).bold());
        let _ = writeln!(out, "  {}", truncate(&hero.description, 96));
    }

    if let Some(background) = &frame.background {
        let _ = writeln!(out, "  {}", background.image_url.dimmed());
    }

    if !frame.thumbnails.is_empty() {
        let thumbnails: Vec<String> = frame
            .thumbnails
            .iter()
            .map(|thumb| format!("[{} · {}]", truncate(&thumb.title, 18), thumb.caption))
            .collect();
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", thumbnails.join(" "));
    }

    if !frame.indicators.is_empty() {
        let bar: String = frame
            .indicators
            .iter()
            .map(|indicator| {
                if indicator.active {
                    accent("━━━━", &indicator.color).to_string()
                } else {
                    "─".dimmed().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let arrows = if frame.arrows { "   ‹ p   n ›" } else { "" };
        let _ = writeln!(out, "  {bar}{arrows}");
    }

    if let Some(sidebar) = &frame.sidebar {
        let _ = writeln!(out, "  [{}]", sidebar.status.as_str().to_uppercase());
        if let Some(menu) = &sidebar.menu {
            let _ = writeln!(out, "  {}  (timer {}s)", menu.heading.to_uppercase().dimmed(), menu.interval_seconds);
            for entry in &menu.entries {
                let marker = if entry.selected { "●" } else { "○" };
                let _ = writeln!(out, "    {} {}", accent(marker, &entry.accent_color), entry.label);
            }
            if !menu.enabled {
                let _ = writeln!(out, "    {}", "(disabled while fetching)".dimmed());
            }
        }
    }

    if let Some(overlay) = &frame.overlay {
        let _ = writeln!(out, "  {} {}", overlay.heading.to_uppercase().bold(), overlay.message.dimmed());
    }

    let autoplay = frame.autoplay;
    let _ = write!(
        out,
        "  autoplay {} · wallpaper {} · timer {} · every {}s",
        format_bool(autoplay.active),
        format_bool(autoplay.wallpaper),
        format_bool(autoplay.timer),
        autoplay.interval_seconds
    );
    if frame.exit_wallpaper {
        let _ = write!(out, " · {}", "w to exit zen mode".dimmed());
    }

    out
}

/// Prints a frame followed by a separator line.
pub fn print_frame(frame: &Frame) {
    println!("{}", format_frame(frame));
    println!("{}", "─".repeat(72).dimmed());
}

// ============================================================================
// JSON
// ============================================================================

/// Prints JSON with syntax highlighting.
pub fn print_highlighted_json(value: &serde_json::Value) {
    let json = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    println!("{}", highlight_json(&json));
}

/// Colors a pretty-printed JSON document.
///
/// Keys are cyan, strings green, numbers yellow, booleans and null magenta,
/// brackets bold.
#[must_use]
pub fn highlight_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len() * 2);
    let mut chars = json.chars().peekable();
    let mut expecting_value = false;

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                let mut literal = String::from('"');
                let mut escaped = false;
                for next in chars.by_ref() {
                    literal.push(next);
                    if escaped {
                        escaped = false;
                    } else if next == '\\' {
                        escaped = true;
                    } else if next == '"' {
                        break;
                    }
                }
                let colored = if expecting_value { literal.green() } else { literal.cyan() };
                let _ = write!(out, "{colored}");
                expecting_value = false;
            }
            ':' => {
                out.push(':');
                expecting_value = true;
            }
            ',' => {
                out.push(',');
                expecting_value = false;
            }
            '{' | '}' | '[' | ']' => {
                let _ = write!(out, "{}", ch.to_string().bold());
                // Array elements are values.
                expecting_value = ch == '[';
            }
            c if c.is_whitespace() => out.push(c),
            _ => {
                let mut token = String::from(ch);
                while let Some(&next) = chars.peek() {
                    if next == ',' || next == '}' || next == ']' || next.is_whitespace() {
                        break;
                    }
                    token.push(next);
                    chars.next();
                }
                let colored = if token == "true" || token == "false" || token == "null" {
                    token.magenta()
                } else {
                    token.yellow()
                };
                let _ = write!(out, "{colored}");
                expecting_value = false;
            }
        }
    }

    out
}

// ============================================================================
// Text helpers
// ============================================================================

/// Truncates a string to a maximum number of characters, adding ellipsis if needed.
#[must_use]
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return "…".to_string();
    }
    let cut = s.char_indices().nth(max_chars - 1).map_or(s.len(), |(idx, _)| idx);
    format!("{}…", &s[..cut])
}

/// Formats a boolean as a colored mark.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value { "✓".green().to_string() } else { "✗".red().to_string() }
}
