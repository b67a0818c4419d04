//! Path utilities: expand ~, turn task names into safe file names.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

const MAX_FILE_STEM: usize = 80;

static FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\\/:*?"<>|]+"#).expect("static regex must compile")
});
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Turn a free-text task name into a file stem.
///
/// Characters rejected by common file systems become `-`, runs of
/// whitespace collapse to one space and the result is capped at 80
/// characters. Returns an empty string when nothing usable is left.
pub fn sanitize_filename(name: &str) -> String {
    let replaced = FORBIDDEN.replace_all(name.trim(), "-");
    let collapsed = WHITESPACE.replace_all(&replaced, " ");
    let stem: String = collapsed.trim().chars().take(MAX_FILE_STEM).collect();
    let stem = stem.trim_end().trim_end_matches('.').to_string();

    if stem.chars().all(|c| c == '-' || c == ' ') {
        String::new()
    } else {
        stem
    }
}
