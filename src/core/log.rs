//! Internal activity journal.
//!
//! One JSON object per line, appended next to the config file. Operations
//! are short verbs (`init`, `session`, `skip`, `reset`, `config`, `export`,
//! `write_error`, `retry`); the journal is printed by `pomomemo log --print`.

use crate::errors::AppResult;
use crate::utils::formatting::{pad_right, truncate_width};
use ansi_term::Colour;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

const OP_TARGET_MAX: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append one line to the journal at `path`.
pub fn ttlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let entry = JournalEntry {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let line = serde_json::to_string(&entry)?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Same as [`ttlog`] but never fails: problems go to the diagnostics log.
pub fn ttlog_quiet(path: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(path, operation, target, message) {
        tracing::warn!(journal = %path.display(), error = %e, "failed to write journal entry");
    }
}

/// Read every entry; malformed lines are skipped.
pub fn read_journal(path: &Path) -> AppResult<Vec<JournalEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(fs::File::open(path)?);
    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<JournalEntry>(&line) {
            Ok(e) => entries.push(e),
            Err(e) => tracing::debug!(error = %e, "skipping malformed journal line"),
        }
    }
    Ok(entries)
}

/// Colour by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "session" => Colour::Green,
        "skip" => Colour::Yellow,
        "reset" => Colour::Red,
        "config" => Colour::Purple,
        "export" => Colour::Blue,
        "write_error" => Colour::Red,
        "retry" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the journal as aligned, coloured lines.
    pub fn render(entries: &[JournalEntry], color: bool) -> Vec<String> {
        let rows: Vec<(usize, String, &JournalEntry)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (i + 1, date, e)
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _)| d.len()).max().unwrap_or(0);
        let op_w = rows
            .iter()
            .map(|(_, _, e)| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);

        rows.iter()
            .map(|(id, date, e)| {
                let visible = pad_right(&truncate_width(&op_target(e), OP_TARGET_MAX), op_w);
                let shown = if color {
                    // only the operation word is coloured
                    let paint = color_for_operation(&e.operation);
                    match visible.split_once(' ') {
                        Some((op, rest)) => format!("{} {rest}", paint.paint(op)),
                        None => paint.paint(visible.as_str()).to_string(),
                    }
                } else {
                    visible
                };
                format!(
                    "{:>id_w$}: {:<date_w$} | {} => {}",
                    id, date, shown, e.message
                )
            })
            .collect()
    }

    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = read_journal(path)?;

        if entries.is_empty() {
            println!("📜 Journal is empty ({})", path.display());
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries, true) {
            println!("{line}");
        }
        Ok(())
    }
}

fn op_target(e: &JournalEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
