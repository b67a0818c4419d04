use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for pomomemo
/// Pomodoro timer with a memo pad and Markdown logs
#[derive(Parser, Debug)]
#[command(
    name = "pomomemo",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal Pomodoro timer with a memo pad: notes go to Markdown logs per day and per task",
    long_about = None
)]
pub struct Cli {
    /// Override the config file path (useful for tests or several profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the directory holding the Markdown logs
    #[arg(global = true, long = "logs", value_name = "DIR")]
    pub logs: Option<PathBuf>,

    /// Write debug diagnostics
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Without a subcommand the timer window opens
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create the config file and the log directories
    Init,

    /// Open the timer window (default)
    Run {
        /// Task name for this run (defaults to the configured task)
        #[arg(long = "task", short = 't')]
        task: Option<String>,
    },

    /// Manage the configuration file (view, edit or set one value)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,

        /// Set one value, e.g. `--set work=50` or `--set auto_start=true`.
        /// Keys: work, short, long, cycles, auto_start, log_dir, app_name, task
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },

    /// Print the internal activity journal
    Log {
        #[arg(long = "print", help = "Print the activity journal")]
        print: bool,
    },

    /// Export Markdown logs into one file
    Export {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        /// Filter day logs by period.
        ///
        /// Supported formats: YYYY, YYYY-MM, YYYY-MM-DD and ranges
        /// start:end in the same format (e.g. 2025-06:2025-08), or `all`.
        #[arg(long, short = 'r', value_name = "RANGE")]
        range: Option<String>,

        /// Export the log of this task instead of day logs
        #[arg(long, short = 't', conflicts_with = "range")]
        task: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite FILE without asking")]
        force: bool,
    },

    /// Show the do/don't suggestion for a break-activity note
    Suggest {
        /// What you did during the break
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}
