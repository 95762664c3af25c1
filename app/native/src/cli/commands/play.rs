//! `curator play`: interactive slideshow session.
//!
//! The actor owns the slideshow; this module only translates stdin lines
//! into handle calls and prints a frame for every published snapshot.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use super::PlayArgs;
use crate::cli::output::print_frame;
use crate::config::get_config;
use crate::error::CuratorError;
use crate::slideshow::state::SlideshowState;
use crate::slideshow::{
    ActorError, AutoplayInterval, SettingChange, SlideshowActor, SlideshowHandle, SlideshowSnapshot,
};
use crate::view::render;

/// Commands accepted on stdin.
pub const HELP: &str = "Session commands (one per line):
  n            next slide
  p            previous slide
  m NAME       select a mood
  r            refresh the current mood
  menu         open or close the mood menu
  w            toggle wallpaper mode
  t            toggle the rotation timer
  i SECONDS    set the autoplay interval (2-30)
  q            quit";

/// One parsed stdin command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Next,
    Previous,
    Mood(String),
    Refresh,
    Menu,
    ToggleWallpaper,
    ToggleTimer,
    Interval(u64),
    Help,
    Quit,
}

/// Parses a stdin line. Blank lines yield `Ok(None)`.
///
/// # Errors
///
/// Returns a message describing the problem for unknown commands or missing
/// arguments.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    let command = match (head.to_ascii_lowercase().as_str(), rest.as_slice()) {
        ("n" | "next", []) => SessionCommand::Next,
        ("p" | "prev", []) => SessionCommand::Previous,
        ("m" | "mood", [name]) => SessionCommand::Mood((*name).to_string()),
        ("m" | "mood", []) => return Err("usage: m NAME".to_string()),
        ("r" | "refresh", []) => SessionCommand::Refresh,
        ("menu", []) => SessionCommand::Menu,
        ("w" | "wallpaper", []) => SessionCommand::ToggleWallpaper,
        ("t" | "timer", []) => SessionCommand::ToggleTimer,
        ("i" | "interval", [seconds]) => SessionCommand::Interval(
            seconds.parse().map_err(|_| format!("interval must be a number of seconds, got `{seconds}`"))?,
        ),
        ("i" | "interval", []) => return Err("usage: i SECONDS".to_string()),
        ("h" | "help" | "?", []) => SessionCommand::Help,
        ("q" | "quit" | "exit", []) => SessionCommand::Quit,
        (other, []) => return Err(format!("unknown command `{other}` (h for help)")),
        (other, _) => return Err(format!("unexpected arguments for `{other}` (h for help)")),
    };

    Ok(Some(command))
}

/// Setting changes requested by startup flags, applied as one batch.
fn startup_changes(args: &PlayArgs) -> Vec<SettingChange> {
    let mut changes = Vec::new();
    if let Some(seconds) = args.interval {
        changes.push(SettingChange::Interval(AutoplayInterval::clamped(seconds)));
    }
    if args.wallpaper {
        changes.push(SettingChange::WallpaperMode(true));
    }
    if args.timer {
        changes.push(SettingChange::TimerEnabled(true));
    }
    changes
}

/// Sends `command` to the actor. Returns `false` when the session should end.
async fn dispatch(
    handle: &SlideshowHandle,
    current: &SlideshowSnapshot,
    command: SessionCommand,
) -> Result<bool, CuratorError> {
    match command {
        SessionCommand::Next => handle.rotate_next().await?,
        SessionCommand::Previous => handle.rotate_prev().await?,
        SessionCommand::Mood(name) => handle.select_mood_by_name(&name).await?,
        SessionCommand::Refresh => handle.refresh().await?,
        SessionCommand::Menu => handle.toggle_mood_menu().await?,
        SessionCommand::ToggleWallpaper => handle.set_wallpaper_mode(!current.wallpaper_mode).await?,
        SessionCommand::ToggleTimer => handle.set_timer_enabled(!current.timer_enabled).await?,
        SessionCommand::Interval(seconds) => handle.set_interval(seconds).await?,
        SessionCommand::Help => eprintln!("{HELP}"),
        SessionCommand::Quit => return Ok(false),
    }
    Ok(true)
}

fn show(snapshot: &SlideshowSnapshot, json: bool) -> Result<(), CuratorError> {
    let frame = render(snapshot);
    if json {
        println!("{}", serde_json::to_string(&frame)?);
    } else {
        print_frame(&frame);
    }
    Ok(())
}

/// Runs the session until `q`, end of input, or the actor stopping.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a startup flag names an
/// unknown mood, or the actor cannot be reached.
pub async fn execute(args: &PlayArgs) -> Result<(), CuratorError> {
    let config = get_config();
    let state = SlideshowState::from_config(config)?;
    let provider = Arc::new(super::pexels_client(config)?);
    let handle = SlideshowActor::spawn(state, provider);

    let changes = startup_changes(args);
    if !changes.is_empty() {
        handle.apply_batch(changes).await?;
    }
    if let Some(mood) = &args.mood {
        handle.select_mood_by_name(mood).await?;
    }

    let mut subscriber = handle.subscribe().await?;
    let mut current = subscriber.get();
    show(&current, args.json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            snapshot = subscriber.next() => {
                let Some(snapshot) = snapshot else { break };
                show(&snapshot, args.json)?;
                current = snapshot;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(Some(command)) => match dispatch(&handle, &current, command).await {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(CuratorError::Actor(err @ ActorError::UnknownMood(_))) => {
                            eprintln!("{err}");
                        }
                        Err(err) => return Err(err),
                    },
                    Ok(None) => {}
                    Err(message) => eprintln!("{message}"),
                }
            }
        }
    }

    if handle.is_alive() {
        handle.shutdown().await?;
    }
    Ok(())
}
