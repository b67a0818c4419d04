use crate::cli::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::tui;
use crate::ui::messages::warning;

/// Open the timer window; `None` means the bare `pomomemo` invocation.
pub fn handle(cmd: Option<&Commands>, ctx: &Context) -> AppResult<()> {
    let task = match cmd {
        Some(Commands::Run { task: Some(t) }) => t.clone(),
        _ => ctx.cfg.default_task.clone(),
    };

    let (report, res) = tui::run(ctx, &task);

    if report.lost_entries > 0 {
        warning(format!(
            "{} log entr{} could not be written to {} and were discarded.",
            report.lost_entries,
            if report.lost_entries == 1 { "y" } else { "ies" },
            ctx.log_dir.display()
        ));
    }
    if report.sessions_logged > 0 {
        println!(
            "🍅 {} session(s) logged to {}",
            report.sessions_logged,
            ctx.log_dir.display()
        );
    }
    res
}
