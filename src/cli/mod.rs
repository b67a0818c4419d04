pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::core::logbook::Logbook;
use std::path::PathBuf;

/// Configuration and resolved paths shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    pub cfg: Config,
    pub config_file: PathBuf,
    pub log_dir: PathBuf,
    pub journal: PathBuf,
}

impl Context {
    pub fn new(cfg: Config, config_file: PathBuf, log_override: Option<PathBuf>) -> Self {
        let log_dir = log_override.unwrap_or_else(|| cfg.resolve_log_dir(&config_file));
        let journal = Config::journal_file(&config_file);
        Self {
            cfg,
            config_file,
            log_dir,
            journal,
        }
    }

    pub fn logbook(&self) -> Logbook {
        Logbook::new(&self.log_dir, &self.cfg.app_name)
    }
}
