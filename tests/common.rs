#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pomo() -> Command {
    cargo_bin_cmd!("pomomemo")
}

/// Create a fresh directory inside the system temp dir, removing any previous run
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_pomomemo"));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Config file path inside a fresh test directory (the file itself is not created)
pub fn setup_test_config(name: &str) -> (PathBuf, String) {
    let dir = setup_test_dir(name);
    let config = dir.join("pomomemo.conf");
    (dir, config.to_string_lossy().to_string())
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid timestamp")
}

/// Write a small day log the way the timer does
pub fn write_day_log(dir: &PathBuf, app: &str, date: &str, body: &str) {
    fs::create_dir_all(dir).expect("create log dir");
    fs::write(
        dir.join(format!("{app}_{date}.md")),
        format!("# {app} Log - {date}\n\n{body}"),
    )
    .expect("write day log");
}
