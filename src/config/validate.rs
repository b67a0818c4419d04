//! Input validation for settings typed by the user, either in the settings
//! panel or through `config --set KEY=VALUE`.
//!
//! Every function either returns the new value or an error; callers keep the
//! previous value when an error comes back.

use super::Config;
use crate::errors::{AppError, AppResult};

pub const MIN_MINUTES: u32 = 1;
pub const MAX_MINUTES: u32 = 300;
pub const MIN_CYCLES: u32 = 1;
pub const MAX_CYCLES: u32 = 50;

/// Keys accepted by [`apply_setting`].
pub const SETTING_KEYS: [&str; 8] = [
    "work", "short", "long", "cycles", "auto_start", "log_dir", "app_name", "task",
];

pub fn check_minutes(value: u32) -> AppResult<u32> {
    if (MIN_MINUTES..=MAX_MINUTES).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::InvalidDuration(value.to_string()))
    }
}

pub fn check_cycles(value: u32) -> AppResult<u32> {
    if (MIN_CYCLES..=MAX_CYCLES).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::InvalidCycles(value.to_string()))
    }
}

/// Parse a duration in whole minutes (1..=300).
pub fn parse_minutes(input: &str) -> AppResult<u32> {
    let trimmed = input.trim();
    let value: u32 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidDuration(trimmed.to_string()))?;
    check_minutes(value)
}

/// Parse the number of work sessions before a long break (1..=50).
pub fn parse_cycles(input: &str) -> AppResult<u32> {
    let trimmed = input.trim();
    let value: u32 = trimmed
        .parse()
        .map_err(|_| AppError::InvalidCycles(trimmed.to_string()))?;
    check_cycles(value)
}

pub fn parse_bool(input: &str) -> AppResult<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(true),
        "false" | "no" | "n" | "off" | "0" => Ok(false),
        other => Err(AppError::InvalidSetting(format!(
            "'{other}' is not a boolean (use true/false)"
        ))),
    }
}

/// Return a copy of `cfg` with `key` set to `value`.
///
/// `cfg` itself is never touched, so a rejected value leaves the previous
/// configuration in place.
pub fn apply_setting(cfg: &Config, key: &str, value: &str) -> AppResult<Config> {
    let mut next = cfg.clone();

    match key.trim().to_ascii_lowercase().as_str() {
        "work" | "work_minutes" => next.work_minutes = parse_minutes(value)?,
        "short" | "short_break_minutes" => next.short_break_minutes = parse_minutes(value)?,
        "long" | "long_break_minutes" => next.long_break_minutes = parse_minutes(value)?,
        "cycles" | "cycles_before_long" => next.cycles_before_long = parse_cycles(value)?,
        "auto_start" | "auto" => next.auto_start = parse_bool(value)?,
        "log_dir" => next.log_dir = value.trim().to_string(),
        "app_name" => {
            let name = value.trim();
            if name.is_empty() {
                return Err(AppError::InvalidSetting("app_name must not be empty".into()));
            }
            next.app_name = name.to_string();
        }
        "task" | "default_task" => next.default_task = value.trim().to_string(),
        other => {
            return Err(AppError::InvalidSetting(format!(
                "unknown key '{other}' (expected one of: {})",
                SETTING_KEYS.join(", ")
            )));
        }
    }

    Ok(next)
}

/// Split a `KEY=VALUE` argument.
pub fn split_assignment(raw: &str) -> AppResult<(&str, &str)> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| AppError::InvalidSetting(format!("expected KEY=VALUE, got '{raw}'")))
}
