//! State behind the timer window and everything a key press can do to it.
//!
//! Nothing here draws or reads the clock: the event loop passes `now` in,
//! which keeps the whole flow drivable from tests.

use crate::cli::Context;
use crate::config::Config;
use crate::config::validate::apply_setting;
use crate::core::log::ttlog_quiet;
use crate::core::logbook::Logbook;
use crate::core::suggest::{Suggestion, suggest};
use crate::core::timer::{SessionComplete, TimerSettings, TimerState};
use crate::models::{Mode, SessionRecord};
use crate::tui::dialog::{Dialog, DialogOutcome};
use crate::tui::settings::SettingsPanel;
use crate::utils::format_duration;
use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Entries kept for the "recent memos" panel.
const HISTORY_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Timer,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// One-line status message shown under the timer until replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Debug)]
pub struct App {
    cfg: Config,
    config_file: PathBuf,
    journal: PathBuf,
    settings: TimerSettings,
    timer: TimerState,
    logbook: Logbook,
    task: String,
    /// `Some` while the task name is being edited.
    task_input: Option<String>,
    dialog: Option<Dialog>,
    view: View,
    panel: SettingsPanel,
    notice: Option<Notice>,
    hint: Option<Suggestion>,
    history: Vec<SessionRecord>,
    sessions_logged: usize,
    quit: bool,
}

impl App {
    pub fn new(cfg: Config, config_file: PathBuf, logbook: Logbook, task: &str) -> Self {
        let settings = TimerSettings::from_config(&cfg);
        let journal = Config::journal_file(&config_file);
        Self {
            cfg,
            config_file,
            journal,
            settings,
            timer: TimerState::new(&settings),
            logbook,
            task: task.trim().to_string(),
            task_input: None,
            dialog: None,
            view: View::Timer,
            panel: SettingsPanel::default(),
            notice: None,
            hint: None,
            history: Vec::new(),
            sessions_logged: 0,
            quit: false,
        }
    }

    pub fn from_context(ctx: &Context, task: &str) -> Self {
        Self::new(ctx.cfg.clone(), ctx.config_file.clone(), ctx.logbook(), task)
    }

    // ---------------------------
    // Read access for rendering and tests
    // ---------------------------

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn settings(&self) -> &TimerSettings {
        &self.settings
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn logbook(&self) -> &Logbook {
        &self.logbook
    }

    pub fn task(&self) -> &str {
        &self.task
    }

    pub fn task_input(&self) -> Option<&str> {
        self.task_input.as_deref()
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn panel(&self) -> &SettingsPanel {
        &self.panel
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn hint(&self) -> Option<&Suggestion> {
        self.hint.as_ref()
    }

    pub fn history(&self) -> &[SessionRecord] {
        &self.history
    }

    pub fn sessions_logged(&self) -> usize {
        self.sessions_logged
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Drop queued log blocks on exit; returns how many were lost.
    pub fn discard_pending(&mut self) -> usize {
        let lost = self.logbook.discard_pending();
        if lost > 0 {
            ttlog_quiet(
                &self.journal,
                "write_error",
                "",
                &format!("{lost} unwritten entr(y/ies) discarded on exit"),
            );
        }
        lost
    }

    // ---------------------------
    // Clock
    // ---------------------------

    /// One second has passed.
    ///
    /// Ignored while a dialog waits for an answer.
    pub fn tick(&mut self, now: NaiveDateTime) {
        if self.dialog.is_some() {
            return;
        }

        let (timer, done) = self.timer.tick(&self.settings, now);
        self.timer = timer;

        if let Some(done) = done {
            tracing::info!(mode = done.mode.key(), secs = done.elapsed_secs, "session complete");
            self.dialog = Some(Dialog::for_completion(done));
        }
    }

    // ---------------------------
    // Keys
    // ---------------------------

    pub fn handle_key(&mut self, key: KeyEvent, now: NaiveDateTime) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            // a finished session waiting in the dialog is logged with an empty note
            if let Some(dialog) = self.dialog.take() {
                self.finish(dialog.into_completion(), "", now);
            }
            self.quit = true;
            return;
        }

        if let Some(dialog) = self.dialog.take() {
            let (still_open, outcome) = dialog.handle_key(key);
            self.dialog = still_open;
            if let DialogOutcome::Closed { done, note } = outcome {
                self.finish(done, &note, now);
            }
            return;
        }

        if self.task_input.is_some() {
            self.handle_task_key(key);
            return;
        }

        match self.view {
            View::Timer => self.handle_timer_key(key, now),
            View::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_timer_key(&mut self, key: KeyEvent, now: NaiveDateTime) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char(' ') => self.toggle(now),
            KeyCode::Char('s') => self.skip(now),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('1') => self.select_mode(Mode::Work),
            KeyCode::Char('2') => self.select_mode(Mode::ShortBreak),
            KeyCode::Char('3') => self.select_mode(Mode::LongBreak),
            KeyCode::Char('t') => self.task_input = Some(self.task.clone()),
            KeyCode::Char('a') => self.toggle_auto_start(),
            KeyCode::Char('c') => {
                self.panel.cancel_editing();
                self.view = View::Settings;
            }
            KeyCode::Char('w') => self.retry_pending(),
            _ => {}
        }
    }

    fn handle_task_key(&mut self, key: KeyEvent) {
        let Some(input) = self.task_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Enter => {
                let name = input.trim().to_string();
                self.task_input = None;
                self.set_task(&name);
            }
            KeyCode::Esc => self.task_input = None,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => input.push(c),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        if self.panel.editing {
            match key.code {
                KeyCode::Enter => {
                    let field = self.panel.selected;
                    let value = self.panel.input.clone();
                    self.panel.cancel_editing();
                    self.update_setting(field.key(), &value);
                }
                KeyCode::Esc => self.panel.cancel_editing(),
                KeyCode::Backspace => {
                    self.panel.input.pop();
                }
                KeyCode::Char(c) => self.panel.input.push(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => self.view = View::Timer,
            KeyCode::Up | KeyCode::Char('k') => self.panel.selected = self.panel.selected.prev(),
            KeyCode::Down | KeyCode::Char('j') => self.panel.selected = self.panel.selected.next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.panel.selected.is_toggle() {
                    self.toggle_auto_start();
                } else {
                    self.panel.start_editing(&self.cfg);
                }
            }
            _ => {}
        }
    }

    // ---------------------------
    // Timer operations
    // ---------------------------

    pub fn toggle(&mut self, now: NaiveDateTime) {
        self.timer = self.timer.toggle(now);
        tracing::debug!(running = self.timer.running, "toggle");
    }

    /// Finish the running session now. Skipped sessions are logged without a prompt.
    pub fn skip(&mut self, now: NaiveDateTime) {
        let (timer, done) = self.timer.skip(&self.settings, now);
        self.timer = timer;
        ttlog_quiet(
            &self.journal,
            "skip",
            done.mode.label(),
            &format!("skipped after {}", format_duration(done.elapsed_secs)),
        );
        self.finish(done, "", now);
    }

    pub fn reset(&mut self) {
        self.timer = self.timer.reset(&self.settings);
        ttlog_quiet(&self.journal, "reset", self.timer.mode.label(), "timer reset, nothing logged");
        self.info("Timer reset.");
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.timer = self.timer.select_mode(mode, &self.settings);
    }

    pub fn set_task(&mut self, name: &str) {
        self.task = name.trim().to_string();
        if self.task.is_empty() {
            self.info("Task cleared: entries go to the day log only.");
        } else {
            let text = format!("Task set to '{}'.", self.task);
            self.info(text);
        }
    }

    /// Change one setting through the same validation as `config --set`.
    ///
    /// A rejected value keeps the previous one and shows why.
    pub fn update_setting(&mut self, key: &str, value: &str) {
        match apply_setting(&self.cfg, key, value) {
            Ok(next) => {
                self.cfg = next;
                self.settings = TimerSettings::from_config(&self.cfg);
                self.timer = self.timer.apply_settings(&self.settings);
                ttlog_quiet(
                    &self.journal,
                    "config",
                    key,
                    &format!("{key} set to '{}'", value.trim()),
                );
                self.persist_config();
            }
            Err(e) => {
                self.notice = Some(Notice {
                    level: NoticeLevel::Error,
                    text: format!("{e}; previous value kept."),
                });
            }
        }
    }

    pub fn toggle_auto_start(&mut self) {
        let value = if self.cfg.auto_start { "false" } else { "true" };
        self.update_setting("auto_start", value);
    }

    pub fn retry_pending(&mut self) {
        if self.logbook.pending_count() == 0 {
            self.info("Nothing to retry.");
            return;
        }
        match self.logbook.retry_pending() {
            Ok(n) => {
                ttlog_quiet(
                    &self.journal,
                    "retry",
                    "",
                    &format!("{n} pending entr(y/ies) written"),
                );
                self.info(format!("{n} pending log write(s) completed."));
            }
            Err(e) => self.write_failed(&e.to_string()),
        }
    }

    // ---------------------------
    // Completion
    // ---------------------------

    /// The dialog answered (or the session was skipped): log, update the hint
    /// and let the timer continue.
    fn finish(&mut self, done: SessionComplete, note: &str, now: NaiveDateTime) {
        let record = SessionRecord::from_completion(&done, &self.task, note);

        if record.mode.is_break() {
            self.hint = Some(suggest(&record.note));
        }

        match self.logbook.append(&record) {
            Ok(()) => {
                ttlog_quiet(
                    &self.journal,
                    "session",
                    record.mode.label(),
                    &format!(
                        "{} logged{}",
                        format_duration(record.duration_secs),
                        if record.has_task() {
                            format!(" for '{}'", record.task)
                        } else {
                            String::new()
                        }
                    ),
                );
                self.info(format!(
                    "{} logged ({}). Next: {}.",
                    record.mode.label(),
                    format_duration(record.duration_secs),
                    done.next_mode.label()
                ));
                self.sessions_logged += 1;
            }
            Err(e) => self.write_failed(&e.to_string()),
        }

        self.history.push(record);
        if self.history.len() > HISTORY_LEN {
            self.history.remove(0);
        }

        self.timer = self.timer.resume(&self.settings, now);
    }

    fn write_failed(&mut self, reason: &str) {
        ttlog_quiet(&self.journal, "write_error", "", reason);
        self.notice = Some(Notice {
            level: NoticeLevel::Warning,
            text: format!(
                "{reason} ({} pending, press w to retry)",
                self.logbook.pending_count()
            ),
        });
    }

    fn persist_config(&mut self) {
        match self.cfg.save_to(&self.config_file) {
            Ok(()) => self.info("Settings saved."),
            Err(e) => {
                self.notice = Some(Notice {
                    level: NoticeLevel::Warning,
                    text: format!("{e}; settings apply to this run only."),
                });
            }
        }
    }

    fn info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            level: NoticeLevel::Info,
            text: text.into(),
        });
    }
}
