use super::mode::Mode;
use crate::core::timer::SessionComplete;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One finished session, ready to be appended to the Markdown logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRecord {
    pub mode: Mode,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
    /// Seconds actually spent running, pauses excluded.
    pub duration_secs: u64,
    pub task: String,
    pub note: String,
    pub skipped: bool,
    pub cycle: u32,
}

impl SessionRecord {
    /// Build the record for a completion event once the dialog answered.
    ///
    /// Task and note are trimmed; an empty note is kept as an empty note.
    pub fn from_completion(done: &SessionComplete, task: &str, note: &str) -> Self {
        Self {
            mode: done.mode,
            started_at: done.started_at,
            ended_at: done.ended_at,
            duration_secs: done.elapsed_secs,
            task: task.trim().to_string(),
            note: note.trim().to_string(),
            skipped: done.skipped,
            cycle: done.cycle,
        }
    }

    pub fn has_task(&self) -> bool {
        !self.task.is_empty()
    }

    pub fn has_note(&self) -> bool {
        !self.note.is_empty()
    }
}
