use crate::cli::Context;
use crate::config::Config;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (kept if it already exists)
///  - the log directory and its `tasks/` subdirectory
pub fn handle(ctx: &Context) -> AppResult<()> {
    println!("⚙️  Initializing pomomemo…");

    let (_, log_dir) = Config::init_all(&ctx.config_file, Some(ctx.log_dir.as_path()))?;

    println!("📄 Config file : {}", ctx.config_file.display());
    println!("🗂️  Logs        : {}", log_dir.display());

    ttlog_quiet(
        &ctx.journal,
        "init",
        "",
        &format!("logs at {}", log_dir.display()),
    );

    println!("🎉 pomomemo initialization completed!");
    Ok(())
}
