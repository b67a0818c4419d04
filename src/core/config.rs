use crate::config::Config;
use crate::config::validate::{apply_setting, split_assignment};
use crate::core::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Open the config file in an editor, falling back to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                println!("✅ Configuration file edited successfully using '{editor_to_use}'");
                Ok(())
            }
            _ => {
                eprintln!(
                    "⚠️  Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                );
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))
                    .and_then(|s| {
                        if s.success() {
                            Ok(())
                        } else {
                            Err(AppError::Config(format!(
                                "editor '{default_editor}' exited with {s}"
                            )))
                        }
                    })
            }
        }
    }

    /// Apply one `KEY=VALUE` assignment and save the file.
    ///
    /// The file is only rewritten when the value is valid.
    pub fn set(cfg: &Config, path: &Path, assignment: &str) -> AppResult<Config> {
        let (key, value) = split_assignment(assignment)?;
        let next = apply_setting(cfg, key, value)?;
        next.save_to(path)?;

        ttlog_quiet(
            &Config::journal_file(path),
            "config",
            key,
            &format!("{key} set to '{}'", value.trim()),
        );

        Ok(next)
    }
}
