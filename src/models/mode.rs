use serde::{Deserialize, Serialize};
use std::fmt;

/// The three kinds of Pomodoro session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Work, Mode::ShortBreak, Mode::LongBreak];

    /// Human readable label used in the UI and in the Markdown headings.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Short key used in the diagnostics log.
    pub fn key(&self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::ShortBreak => "short",
            Mode::LongBreak => "long",
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, Mode::ShortBreak | Mode::LongBreak)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
