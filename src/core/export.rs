//! Export of Markdown logs into a single file.
//!
//! Day logs are discovered by name (`<AppName>_<YYYY-MM-DD>.md`), filtered
//! by range, sorted by date and concatenated. A task export copies the task
//! log as it is.

use crate::core::logbook::Logbook;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::date::{parse_date, parse_range};
use chrono::NaiveDate;
use regex::Regex;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// What ended up in the export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: usize,
    pub path: PathBuf,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export logs from `logbook` into `dest`.
    ///
    /// - `task`: copy that task's log instead of day logs
    /// - `range`: `None`, `"all"` or a range expression (`YYYY`, `YYYY-MM`,
    ///   `YYYY-MM-DD`, or `start:end` in the same format)
    /// - `force`: overwrite `dest` without asking
    ///
    /// Returns `Ok(None)` when nothing matched, or when the user declined
    /// to overwrite.
    pub fn export(
        logbook: &Logbook,
        dest: &Path,
        range: Option<&str>,
        task: Option<&str>,
        force: bool,
    ) -> AppResult<Option<ExportSummary>> {
        let sources = match task {
            Some(t) => {
                let path = logbook
                    .task_file(t)
                    .ok_or_else(|| AppError::Export(format!("'{t}' is not a usable task name")))?;
                if path.exists() { vec![path] } else { Vec::new() }
            }
            None => {
                let bounds = match range {
                    None => None,
                    Some(r) if r.eq_ignore_ascii_case("all") => None,
                    Some(r) => Some(parse_range(r)?),
                };
                day_logs(logbook, bounds)?
            }
        };

        if sources.is_empty() {
            warning("No log files found for the selected range.");
            return Ok(None);
        }

        if !ensure_writable(dest, force)? {
            return Ok(None);
        }

        let mut out = String::new();
        for (i, src) in sources.iter().enumerate() {
            let content = fs::read_to_string(src)?;
            if i > 0 && !out.ends_with("\n\n") {
                out.push('\n');
            }
            out.push_str(&content);
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(dest, out)?;

        Ok(Some(ExportSummary {
            files: sources.len(),
            path: dest.to_path_buf(),
        }))
    }
}

/// Day logs of `logbook`, oldest first, optionally limited to `bounds`.
pub fn day_logs(
    logbook: &Logbook,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<PathBuf>> {
    let dir = logbook.dir();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let pattern = format!(r"^{}_(\d{{4}}-\d{{2}}-\d{{2}})\.md$", regex::escape(logbook.app_name()));
    let re = Regex::new(&pattern).map_err(|e| AppError::Other(e.to_string()))?;

    let mut found: Vec<(NaiveDate, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let Some(date) = re
            .captures(&name)
            .and_then(|c| c.get(1))
            .and_then(|m| parse_date(m.as_str()))
        else {
            continue;
        };
        if let Some((start, end)) = bounds
            && (date < start || date > end)
        {
            continue;
        }
        found.push((date, entry.path()));
    }

    found.sort();
    Ok(found.into_iter().map(|(_, p)| p).collect())
}

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → true
/// - file exists and `force` → true
/// - file exists otherwise → ask the user
fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        warning("Export cancelled: existing file not overwritten.");
        Ok(false)
    }
}
