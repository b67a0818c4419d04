//! pomomemo library root.
//! Exposes the CLI parser, the high-level run() function and the timer,
//! suggestion and logging modules used by the terminal UI.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod tui;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::Context;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::run::handle(None, ctx),
        Some(cmd @ Commands::Run { .. }) => cli::commands::run::handle(Some(cmd), ctx),
        Some(Commands::Init) => cli::commands::init::handle(ctx),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, ctx),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, ctx),
        Some(cmd @ Commands::Export { .. }) => cli::commands::export::handle(cmd, ctx),
        Some(cmd @ Commands::Suggest { .. }) => cli::commands::suggest::handle(cmd),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ resolve the config file (default location unless --config)
    let config_file = cli.config.clone().unwrap_or_else(Config::config_file);

    // 3️⃣ diagnostics go next to it
    logging::init(&Config::diagnostics_file(&config_file), cli.verbose);

    // 4️⃣ load config once, apply the --logs override
    let cfg = Config::load_from(&config_file)?;
    let ctx = Context::new(cfg, config_file, cli.logs.clone());
    tracing::debug!(
        config = %ctx.config_file.display(),
        logs = %ctx.log_dir.display(),
        "context ready"
    );

    dispatch(&cli, &ctx)
}
