use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(&ctx.journal)?;
    } else {
        info(format!("Journal: {} (use --print)", ctx.journal.display()));
    }

    Ok(())
}
