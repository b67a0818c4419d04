//! Pomodoro timer state machine.
//!
//! `TimerState` is a plain value: every operation consumes the state and
//! returns the next one, optionally with a [`SessionComplete`] event. The UI
//! owns the only live instance and decides when to feed ticks; nothing in
//! here reads the clock or touches the terminal.

use crate::config::Config;
use crate::models::Mode;
use chrono::NaiveDateTime;

/// Durations and cycle rules the timer runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub work_secs: u64,
    pub short_break_secs: u64,
    pub long_break_secs: u64,
    pub cycles_before_long: u32,
    pub auto_start: bool,
}

impl TimerSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            work_secs: u64::from(cfg.work_minutes) * 60,
            short_break_secs: u64::from(cfg.short_break_minutes) * 60,
            long_break_secs: u64::from(cfg.long_break_minutes) * 60,
            cycles_before_long: cfg.cycles_before_long.max(1),
            auto_start: cfg.auto_start,
        }
    }

    /// Configured length of a session of the given mode, in seconds.
    pub fn duration_for(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::ShortBreak => self.short_break_secs,
            Mode::LongBreak => self.long_break_secs,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Emitted once per finished session, whether it ran out or was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionComplete {
    pub mode: Mode,
    pub next_mode: Mode,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
    /// Seconds the session actually ran.
    pub elapsed_secs: u64,
    /// Seconds the session was configured for.
    pub configured_secs: u64,
    pub skipped: bool,
    /// Completed work sessions after this one finished.
    pub cycle: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining_secs: u64,
    pub completed_work_sessions: u32,
    pub running: bool,
    /// Seconds counted in the current session so far.
    pub elapsed_secs: u64,
    /// Set the first time the current session is started.
    pub started_at: Option<NaiveDateTime>,
}

impl TimerState {
    /// A paused Work session with the full configured duration.
    pub fn new(settings: &TimerSettings) -> Self {
        Self::fresh(Mode::Work, 0, settings)
    }

    fn fresh(mode: Mode, completed_work_sessions: u32, settings: &TimerSettings) -> Self {
        Self {
            mode,
            remaining_secs: settings.duration_for(mode),
            completed_work_sessions,
            running: false,
            elapsed_secs: 0,
            started_at: None,
        }
    }

    /// True once the current session has been started at least once.
    pub fn is_underway(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn start(mut self, now: NaiveDateTime) -> Self {
        if !self.running {
            self.running = true;
            self.started_at.get_or_insert(now);
        }
        self
    }

    #[must_use]
    pub fn pause(mut self) -> Self {
        self.running = false;
        self
    }

    #[must_use]
    pub fn toggle(self, now: NaiveDateTime) -> Self {
        if self.running {
            self.pause()
        } else {
            self.start(now)
        }
    }

    /// Back to the full duration of the current mode, paused, cycle count cleared.
    /// Nothing is reported for the abandoned session.
    #[must_use]
    pub fn reset(self, settings: &TimerSettings) -> Self {
        Self::fresh(self.mode, 0, settings)
    }

    /// Switch to `mode` by hand. The current session is dropped unreported.
    #[must_use]
    pub fn select_mode(self, mode: Mode, settings: &TimerSettings) -> Self {
        Self::fresh(mode, self.completed_work_sessions, settings)
    }

    /// Pick up new durations. A session already underway keeps its clock;
    /// a session not yet started gets the new length right away.
    #[must_use]
    pub fn apply_settings(mut self, settings: &TimerSettings) -> Self {
        if !self.is_underway() {
            self.remaining_secs = settings.duration_for(self.mode);
        }
        self
    }

    /// Advance by one second.
    ///
    /// Paused timers ignore ticks. When the remaining time reaches zero the
    /// session completes and the state moves on to the next mode, paused.
    pub fn tick(
        mut self,
        settings: &TimerSettings,
        now: NaiveDateTime,
    ) -> (Self, Option<SessionComplete>) {
        if !self.running {
            return (self, None);
        }

        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            self.elapsed_secs += 1;
        }

        if self.remaining_secs == 0 {
            let (next, done) = self.complete(settings, now, false);
            return (next, Some(done));
        }

        (self, None)
    }

    /// Finish the current session immediately, whatever is left on the clock.
    pub fn skip(self, settings: &TimerSettings, now: NaiveDateTime) -> (Self, SessionComplete) {
        self.complete(settings, now, true)
    }

    /// Called once a completion has been handled: auto-start the next session
    /// when enabled, otherwise stay paused.
    #[must_use]
    pub fn resume(self, settings: &TimerSettings, now: NaiveDateTime) -> Self {
        if settings.auto_start {
            self.start(now)
        } else {
            self
        }
    }

    fn complete(
        self,
        settings: &TimerSettings,
        now: NaiveDateTime,
        skipped: bool,
    ) -> (Self, SessionComplete) {
        let finished = self.mode;
        let completed = if finished == Mode::Work {
            self.completed_work_sessions + 1
        } else {
            self.completed_work_sessions
        };
        let next_mode = next_mode(finished, completed, settings.cycles_before_long);

        let done = SessionComplete {
            mode: finished,
            next_mode,
            started_at: self.started_at.unwrap_or(now),
            ended_at: now,
            elapsed_secs: self.elapsed_secs,
            configured_secs: settings.duration_for(finished),
            skipped,
            cycle: completed,
        };

        (Self::fresh(next_mode, completed, settings), done)
    }

    /// Fraction of the current session already done, in `0.0..=1.0`.
    pub fn progress(&self, settings: &TimerSettings) -> f64 {
        let total = settings.duration_for(self.mode);
        if total == 0 {
            return 1.0;
        }
        let done = total.saturating_sub(self.remaining_secs);
        (done as f64 / total as f64).clamp(0.0, 1.0)
    }
}

/// Mode that follows `finished`.
///
/// After Work: Long Break on every `cycles_before_long`-th completed work
/// session, Short Break otherwise. After any break: Work.
pub fn next_mode(finished: Mode, completed_work_sessions: u32, cycles_before_long: u32) -> Mode {
    match finished {
        Mode::Work => {
            if completed_work_sessions % cycles_before_long.max(1) == 0 {
                Mode::LongBreak
            } else {
                Mode::ShortBreak
            }
        }
        Mode::ShortBreak | Mode::LongBreak => Mode::Work,
    }
}
