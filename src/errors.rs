//! Unified application error type.
//! All modules (config, core, cli, tui) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot write log file {path}: {source}")]
    LogWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid duration '{0}': expected whole minutes between 1 and 300")]
    InvalidDuration(String),

    #[error("Invalid cycle count '{0}': expected a number between 1 and 50")]
    InvalidCycles(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration to {0}")]
    ConfigSave(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
