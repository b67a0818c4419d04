use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::core::export::ExportLogic;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        file,
        range,
        task,
        force,
    } = cmd
    {
        let logbook = ctx.logbook();
        let summary =
            ExportLogic::export(&logbook, file, range.as_deref(), task.as_deref(), *force)?;

        if let Some(summary) = summary {
            success(format!(
                "Markdown export completed: {} ({} file(s))",
                summary.path.display(),
                summary.files
            ));
            ttlog_quiet(
                &ctx.journal,
                "export",
                task.as_deref().or(range.as_deref()).unwrap_or("all"),
                &format!("{} file(s) to {}", summary.files, summary.path.display()),
            );
        }
    }
    Ok(())
}
