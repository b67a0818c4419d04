//! Markdown session logs.
//!
//! Every finished session becomes one block appended to two files:
//! - `<dir>/<AppName>_<YYYY-MM-DD>.md` for the day the session ended
//! - `<dir>/tasks/<TaskName>.md` for the task (skipped for unnamed tasks)
//!
//! A block that cannot be written is kept in memory and can be retried.

use crate::core::suggest::{self, Advice};
use crate::errors::{AppError, AppResult};
use crate::models::SessionRecord;
use crate::utils::format_duration;
use crate::utils::path::sanitize_filename;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A block waiting to be appended to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWrite {
    pub path: PathBuf,
    /// Heading written first when the file is new or empty.
    pub title: String,
    pub block: String,
}

#[derive(Debug)]
pub struct Logbook {
    dir: PathBuf,
    app_name: String,
    pending: Vec<PendingWrite>,
}

impl Logbook {
    pub fn new(dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            dir: dir.into(),
            app_name: app_name.to_string(),
            pending: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn day_file(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("{}_{}.md", self.app_name, date.format("%Y-%m-%d")))
    }

    /// `None` when the task name has nothing left after sanitising.
    pub fn task_file(&self, task: &str) -> Option<PathBuf> {
        let stem = sanitize_filename(task);
        if stem.is_empty() {
            None
        } else {
            Some(self.dir.join("tasks").join(format!("{stem}.md")))
        }
    }

    pub fn pending(&self) -> &[PendingWrite] {
        &self.pending
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Append `record` to the day log and, when it has a task, to the task log.
    ///
    /// Each file is written independently. Files that fail are queued for
    /// [`Logbook::retry_pending`] and the first failure is returned.
    pub fn append(&mut self, record: &SessionRecord) -> AppResult<()> {
        let block = render_entry(record);
        let date = record.ended_at.date();

        let mut writes = vec![PendingWrite {
            path: self.day_file(date),
            title: format!("# {} Log - {}\n\n", self.app_name, date.format("%Y-%m-%d")),
            block: block.clone(),
        }];

        if let Some(path) = self.task_file(&record.task) {
            writes.push(PendingWrite {
                path,
                title: format!("# Task Log - {}\n\n", record.task),
                block,
            });
        }

        let mut first_err = None;
        for w in writes {
            if let Err(e) = write_block(&w) {
                tracing::warn!(path = %w.path.display(), error = %e, "log write failed, queued");
                if first_err.is_none() {
                    first_err = Some(AppError::LogWrite {
                        path: w.path.display().to_string(),
                        source: e,
                    });
                }
                self.pending.push(w);
            } else {
                tracing::debug!(path = %w.path.display(), "log entry appended");
            }
        }

        first_err.map_or(Ok(()), Err)
    }

    /// Try every queued block again, in order.
    ///
    /// Returns how many were written; blocks that still fail stay queued.
    pub fn retry_pending(&mut self) -> AppResult<usize> {
        let queued = std::mem::take(&mut self.pending);
        let mut written = 0;
        let mut first_err = None;

        for w in queued {
            match write_block(&w) {
                Ok(()) => written += 1,
                Err(e) => {
                    if first_err.is_none() {
                        first_err = Some(AppError::LogWrite {
                            path: w.path.display().to_string(),
                            source: e,
                        });
                    }
                    self.pending.push(w);
                }
            }
        }

        first_err.map_or(Ok(written), Err)
    }

    /// Drop every queued block, returning how many were lost.
    pub fn discard_pending(&mut self) -> usize {
        let n = self.pending.len();
        self.pending.clear();
        n
    }
}

/// Render the Markdown block for one session.
///
/// Break entries carry the do/don't advice derived from the note.
pub fn render_entry(record: &SessionRecord) -> String {
    let advice = record.mode.is_break().then(|| suggest::advise(&record.note));
    render_entry_with(record, advice.as_ref())
}

fn render_entry_with(record: &SessionRecord, advice: Option<&Advice>) -> String {
    let duration = format_duration(record.duration_secs);
    let mut out = format!(
        "## {} • {} → {} ({})\n\n",
        record.mode.label(),
        ts(&record.started_at),
        ts(&record.ended_at),
        duration
    );

    let task = if record.has_task() {
        record.task.as_str()
    } else {
        "(unnamed)"
    };
    out.push_str(&kv("Task", task));
    out.push_str(&kv("Start", &ts(&record.started_at)));
    out.push_str(&kv("End", &ts(&record.ended_at)));
    out.push_str(&kv("Duration", &duration));
    out.push_str(&kv("Cycle", &record.cycle.to_string()));
    if record.skipped {
        out.push_str(&kv("Skipped", "yes"));
    }
    out.push('\n');

    if record.has_note() {
        out.push_str("#### Memo\n\n");
        out.push_str(&record.note);
        out.push_str("\n\n");
    }

    if let Some(advice) = advice {
        out.push_str(&bullets("Do", &advice.dos));
        out.push_str(&bullets("Don't", &advice.donts));
    }

    out.push_str("---\n\n");
    out
}

fn ts(t: &NaiveDateTime) -> String {
    t.format(TS_FORMAT).to_string()
}

fn kv(key: &str, value: &str) -> String {
    format!("- **{key}**: {value}\n")
}

fn bullets(heading: &str, items: &[&str]) -> String {
    if items.is_empty() {
        return String::new();
    }
    let mut s = format!("#### {heading}\n\n");
    for item in items {
        s.push_str(&format!("- {item}\n"));
    }
    s.push('\n');
    s
}

fn write_block(w: &PendingWrite) -> io::Result<()> {
    if let Some(parent) = w.path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(&w.path)?;

    if file.metadata()?.len() == 0 {
        file.write_all(w.title.as_bytes())?;
    }
    file.write_all(w.block.as_bytes())?;
    file.flush()
}
