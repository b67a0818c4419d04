use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
        set,
    } = cmd
    {
        // ---- SET VALUES ----
        // applied one by one: a bad value stops here and leaves the file as it was
        let mut cfg = ctx.cfg.clone();
        for assignment in set {
            cfg = ConfigLogic::set(&cfg, &ctx.config_file, assignment)?;
            success(format!("Updated {assignment}"));
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            ConfigLogic::print(&cfg)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !ctx.config_file.exists() {
                cfg.save_to(&ctx.config_file)?;
            }
            ConfigLogic::edit(&ctx.config_file, editor)?;
        }

        if set.is_empty() && !*print_config && !*edit_config {
            info(format!("Config file: {}", ctx.config_file.display()));
        }
    }

    Ok(())
}
