//! Terminal window: timer, memo dialog and settings.
//!
//! `app` holds the state, `render` draws it, and `run` owns the terminal
//! and turns wall-clock seconds into ticks.

pub mod app;
pub mod dialog;
pub mod render;
pub mod settings;

use crate::cli::Context;
use crate::errors::AppResult;
use app::App;
use chrono::Local;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const ONE_SECOND: Duration = Duration::from_secs(1);

/// What happened during a `run` call, for the closing message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub sessions_logged: usize,
    /// Entries that never reached disk and were dropped on exit.
    pub lost_entries: usize,
}

/// Open the timer window until the user quits.
///
/// The report comes back even when the loop fails, so entries that never
/// reached disk are still accounted for after the terminal is restored.
pub fn run(ctx: &Context, task: &str) -> (RunReport, AppResult<()>) {
    let mut app = App::from_context(ctx, task);
    tracing::info!(task = app.task(), logs = %ctx.log_dir.display(), "timer window opened");

    let mut terminal = match open_terminal() {
        Ok(t) => t,
        Err(e) => {
            let _ = restore_terminal(None);
            return (wrap_up(&mut app), Err(e));
        }
    };

    let res = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(Some(&mut terminal));

    let report = wrap_up(&mut app);
    if let Err(e) = &res {
        tracing::error!(error = %e, "timer window failed");
    }
    (report, res.and(restored))
}

/// Close the books on a run: count what was logged and drop what was not.
pub fn wrap_up(app: &mut App) -> RunReport {
    let report = RunReport {
        sessions_logged: app.sessions_logged(),
        lost_entries: app.discard_pending(),
    };
    tracing::info!(
        sessions = report.sessions_logged,
        lost = report.lost_entries,
        "timer window closed"
    );
    report
}

fn open_terminal() -> AppResult<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undo raw mode and the alternate screen. Every step is attempted; the
/// first failure is returned.
fn restore_terminal(terminal: Option<&mut Terminal<CrosstermBackend<Stdout>>>) -> AppResult<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen);
    let cursor = terminal.map_or(Ok(()), |t| t.show_cursor());
    raw.and(screen).and(cursor)?;
    Ok(())
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> AppResult<()> {
    let mut last_second = Instant::now();

    loop {
        terminal.draw(|f| render::draw(f, app))?;

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Local::now().naive_local());
        }

        if app.should_quit() {
            return Ok(());
        }

        // Count seconds only while the clock can move.
        if !app.timer().running || app.dialog().is_some() {
            last_second = Instant::now();
            continue;
        }

        while last_second.elapsed() >= ONE_SECOND {
            last_second += ONE_SECOND;
            app.tick(Local::now().naive_local());
            if app.dialog().is_some() {
                break;
            }
        }
    }
}
