use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod validate;

pub const DEFAULT_WORK_MINUTES: u32 = 25;
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 15;
pub const DEFAULT_CYCLES_BEFORE_LONG: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_work")]
    pub work_minutes: u32,
    #[serde(default = "default_short")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long")]
    pub long_break_minutes: u32,
    #[serde(default = "default_cycles")]
    pub cycles_before_long: u32,
    #[serde(default)]
    pub auto_start: bool,
    /// Directory holding the Markdown logs. Empty means `<config dir>/logs`.
    #[serde(default)]
    pub log_dir: String,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default)]
    pub default_task: String,
}

fn default_work() -> u32 {
    DEFAULT_WORK_MINUTES
}
fn default_short() -> u32 {
    DEFAULT_SHORT_BREAK_MINUTES
}
fn default_long() -> u32 {
    DEFAULT_LONG_BREAK_MINUTES
}
fn default_cycles() -> u32 {
    DEFAULT_CYCLES_BEFORE_LONG
}
fn default_app_name() -> String {
    "Pomodoro".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_minutes: default_work(),
            short_break_minutes: default_short(),
            long_break_minutes: default_long(),
            cycles_before_long: default_cycles(),
            auto_start: false,
            log_dir: String::new(),
            app_name: default_app_name(),
            default_task: String::new(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("pomomemo")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".pomomemo")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pomomemo.conf")
    }

    /// Activity journal, kept next to the config file in use.
    pub fn journal_file(config_file: &Path) -> PathBuf {
        sibling(config_file, "pomomemo.journal")
    }

    /// Diagnostic log written by `tracing`.
    pub fn diagnostics_file(config_file: &Path) -> PathBuf {
        sibling(config_file, "pomomemo.log")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        cfg.validated()
    }

    /// Write the configuration as YAML, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .map_err(|_| AppError::ConfigSave(path.display().to_string()))?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave(path.display().to_string()))?;
        Ok(())
    }

    /// Directory where Markdown logs are written.
    ///
    /// An empty `log_dir` resolves to `logs/` beside the config file.
    pub fn resolve_log_dir(&self, config_file: &Path) -> PathBuf {
        if self.log_dir.trim().is_empty() {
            sibling(config_file, "logs")
        } else {
            expand_tilde(self.log_dir.trim())
        }
    }

    /// Initialize configuration file and log directories.
    ///
    /// An existing config file is kept as is.
    pub fn init_all(
        config_file: &Path,
        log_dir_override: Option<&Path>,
    ) -> AppResult<(Self, PathBuf)> {
        let cfg = Self::load_from(config_file)?;

        if !config_file.exists() {
            cfg.save_to(config_file)?;
        }

        let log_dir = log_dir_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cfg.resolve_log_dir(config_file));

        fs::create_dir_all(log_dir.join("tasks"))?;

        Ok((cfg, log_dir))
    }

    /// Reject out-of-range values coming from a hand-edited file.
    fn validated(self) -> AppResult<Self> {
        validate::check_minutes(self.work_minutes)?;
        validate::check_minutes(self.short_break_minutes)?;
        validate::check_minutes(self.long_break_minutes)?;
        validate::check_cycles(self.cycles_before_long)?;
        if self.app_name.trim().is_empty() {
            return Err(AppError::InvalidSetting("app_name must not be empty".into()));
        }
        Ok(self)
    }
}

fn sibling(config_file: &Path, name: &str) -> PathBuf {
    match config_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}
