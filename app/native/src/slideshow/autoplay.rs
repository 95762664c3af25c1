//! Autoplay timer.
//!
//! Two independent flags (wallpaper mode and the manual timer) share one
//! interval. Their OR decides whether a single periodic trigger is armed.
//! The timer itself holds no task: it keeps a deadline the actor sleeps on,
//! so tearing down and re-arming is a plain field update.

use tokio::time::Instant;

use super::state::AutoplayInterval;

/// Inputs governing autoplay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AutoplaySettings {
    /// Seconds between rotations.
    pub interval: AutoplayInterval,
    /// Wallpaper (zen) presentation mode.
    pub wallpaper_mode: bool,
    /// Manual timer toggle.
    pub timer_enabled: bool,
}

/// One change to the autoplay inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingChange {
    /// Enter or leave wallpaper mode.
    WallpaperMode(bool),
    /// Turn the manual timer on or off.
    TimerEnabled(bool),
    /// Change the interval.
    Interval(AutoplayInterval),
}

impl AutoplaySettings {
    /// Whether a trigger should be armed.
    #[must_use]
    pub const fn is_active(&self) -> bool { self.wallpaper_mode || self.timer_enabled }

    /// Applies a change. Returns `true` if any input changed.
    pub fn apply(&mut self, change: SettingChange) -> bool {
        let before = *self;
        match change {
            SettingChange::WallpaperMode(enabled) => self.wallpaper_mode = enabled,
            SettingChange::TimerEnabled(enabled) => self.timer_enabled = enabled,
            SettingChange::Interval(interval) => self.interval = interval,
        }
        before != *self
    }
}

/// What a reconciliation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// Inputs unchanged; the armed trigger (if any) keeps its phase.
    Unchanged,
    /// A trigger was armed where none existed.
    Armed,
    /// The previous trigger was replaced by a fresh one.
    Rearmed,
    /// The trigger was torn down.
    Disarmed,
}

#[derive(Debug, Clone, Copy)]
struct ArmedTrigger {
    settings: AutoplaySettings,
    deadline: Instant,
}

/// Keeps at most one armed trigger in line with [`AutoplaySettings`].
#[derive(Debug, Default)]
pub struct AutoplayTimer {
    armed: Option<ArmedTrigger>,
    installs: u64,
    fired: u64,
}

impl AutoplayTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Brings the trigger in line with `settings`.
    ///
    /// Any change to a flag or the interval tears down the old trigger and,
    /// when autoplay stays active, arms a new one counting from `now`.
    /// Calling again with the same settings does nothing.
    pub fn reconcile(&mut self, settings: AutoplaySettings, now: Instant) -> Reconciled {
        match (self.armed, settings.is_active()) {
            (Some(armed), true) if armed.settings == settings => Reconciled::Unchanged,
            (None, false) => Reconciled::Unchanged,
            (Some(_), false) => {
                self.armed = None;
                Reconciled::Disarmed
            }
            (previous, true) => {
                self.armed = Some(ArmedTrigger {
                    settings,
                    deadline: now + settings.interval.as_duration(),
                });
                self.installs += 1;
                if previous.is_some() { Reconciled::Rearmed } else { Reconciled::Armed }
            }
        }
    }

    /// Fires the trigger if its deadline has passed.
    ///
    /// Returns `true` when exactly one rotation is due. The next deadline is
    /// one full interval after `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        if now < armed.deadline {
            return false;
        }
        armed.deadline = now + armed.settings.interval.as_duration();
        self.fired += 1;
        true
    }

    /// Deadline of the armed trigger.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> { self.armed.map(|armed| armed.deadline) }

    /// Whether a trigger is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool { self.armed.is_some() }

    /// Number of triggers armed so far.
    #[must_use]
    pub const fn installs(&self) -> u64 { self.installs }

    /// Number of firings so far.
    #[must_use]
    pub const fn fired(&self) -> u64 { self.fired }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn settings(wallpaper: bool, timer: bool, secs: u64) -> AutoplaySettings {
        AutoplaySettings {
            interval: AutoplayInterval::clamped(secs),
            wallpaper_mode: wallpaper,
            timer_enabled: timer,
        }
    }

    #[test]
    fn test_inactive_settings_arm_nothing() {
        let mut timer = AutoplayTimer::new();
        let now = Instant::now();
        assert_eq!(timer.reconcile(settings(false, false, 5), now), Reconciled::Unchanged);
        assert!(!timer.is_armed());
        assert!(!timer.fire(now + Duration::from_secs(60)));
    }

    #[test]
    fn test_either_flag_arms_one_trigger() {
        let now = Instant::now();

        let mut timer = AutoplayTimer::new();
        assert_eq!(timer.reconcile(settings(true, false, 5), now), Reconciled::Armed);
        assert_eq!(timer.deadline(), Some(now + Duration::from_secs(5)));

        let mut timer = AutoplayTimer::new();
        assert_eq!(timer.reconcile(settings(false, true, 5), now), Reconciled::Armed);
        assert_eq!(timer.installs(), 1);
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut timer = AutoplayTimer::new();
        let start = Instant::now();
        timer.reconcile(settings(true, false, 5), start);

        let later = start + Duration::from_secs(3);
        assert_eq!(timer.reconcile(settings(true, false, 5), later), Reconciled::Unchanged);
        assert_eq!(timer.installs(), 1);
        assert_eq!(timer.deadline(), Some(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_interval_change_restarts_period() {
        let mut timer = AutoplayTimer::new();
        let start = Instant::now();
        timer.reconcile(settings(false, true, 5), start);

        let change = start + Duration::from_secs(4);
        assert_eq!(timer.reconcile(settings(false, true, 10), change), Reconciled::Rearmed);

        assert!(!timer.fire(start + Duration::from_secs(5)));
        assert!(!timer.fire(change + Duration::from_millis(9_999)));
        assert!(timer.fire(change + Duration::from_secs(10)));
    }

    #[test]
    fn test_flag_change_restarts_even_when_still_active() {
        let mut timer = AutoplayTimer::new();
        let start = Instant::now();
        timer.reconcile(settings(true, false, 5), start);

        let change = start + Duration::from_secs(2);
        assert_eq!(timer.reconcile(settings(true, true, 5), change), Reconciled::Rearmed);
        assert_eq!(timer.deadline(), Some(change + Duration::from_secs(5)));
    }

    #[test]
    fn test_disabling_both_flags_disarms() {
        let mut timer = AutoplayTimer::new();
        let start = Instant::now();
        timer.reconcile(settings(true, true, 5), start);
        assert_eq!(timer.reconcile(settings(false, false, 5), start), Reconciled::Disarmed);
        assert!(!timer.is_armed());
        assert!(!timer.fire(start + Duration::from_secs(30)));
    }

    #[test]
    fn test_fire_schedules_next_period() {
        let mut timer = AutoplayTimer::new();
        let start = Instant::now();
        timer.reconcile(settings(true, false, 2), start);

        let first = start + Duration::from_secs(2);
        assert!(timer.fire(first));
        assert!(!timer.fire(first));
        assert_eq!(timer.deadline(), Some(first + Duration::from_secs(2)));
        assert_eq!(timer.fired(), 1);
    }

    #[test]
    fn test_settings_apply_reports_changes() {
        let mut s = AutoplaySettings::default();
        assert!(s.apply(SettingChange::WallpaperMode(true)));
        assert!(!s.apply(SettingChange::WallpaperMode(true)));
        assert!(s.apply(SettingChange::Interval(AutoplayInterval::clamped(9))));
        assert!(!s.apply(SettingChange::TimerEnabled(false)));
        assert!(s.is_active());
    }
}
