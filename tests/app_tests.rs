mod common;
use common::{at, setup_test_dir};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pomomemo::config::Config;
use pomomemo::core::log::read_journal;
use pomomemo::core::logbook::Logbook;
use pomomemo::core::suggest::HintKind;
use pomomemo::models::Mode;
use pomomemo::tui::app::{App, NoticeLevel, View};
use pomomemo::tui::dialog::DialogKind;
use pomomemo::tui::wrap_up;
use std::fs;
use std::path::PathBuf;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    let now = at(2025, 3, 10, 12, 0, 0);
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)), now);
    }
}

/// One-minute sessions, logs and config inside a fresh temp dir
fn setup_app(name: &str, task: &str) -> (App, PathBuf) {
    let dir = setup_test_dir(name);
    let cfg = Config {
        work_minutes: 1,
        short_break_minutes: 1,
        long_break_minutes: 2,
        cycles_before_long: 2,
        ..Config::default()
    };
    let logs = dir.join("logs");
    let app = App::new(cfg, dir.join("pomomemo.conf"), Logbook::new(&logs, "Pomodoro"), task);
    (app, dir)
}

fn run_out(app: &mut App) {
    let t0 = at(2025, 3, 10, 9, 0, 0);
    app.handle_key(key(KeyCode::Char(' ')), t0);
    for i in 1..=60 {
        app.tick(t0 + chrono::Duration::seconds(i));
    }
}

#[test]
fn test_completion_opens_memo_dialog_and_freezes_timer() {
    let (mut app, _) = setup_app("app_dialog_freeze", "Essay");
    run_out(&mut app);

    let dialog = app.dialog().expect("dialog open");
    assert_eq!(dialog.kind, DialogKind::Memo);
    assert_eq!(dialog.completion().elapsed_secs, 60);

    let before = *app.timer();
    for i in 0..30 {
        app.tick(at(2025, 3, 10, 9, 2, i));
    }
    assert_eq!(*app.timer(), before, "no ticks while the dialog is open");
    assert_eq!(app.sessions_logged(), 0);
}

#[test]
fn test_memo_is_logged_after_enter() {
    let (mut app, dir) = setup_app("app_memo_logged", "Essay");
    run_out(&mut app);

    type_text(&mut app, "drafted intro");
    app.handle_key(
        KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT),
        at(2025, 3, 10, 9, 1, 5),
    );
    type_text(&mut app, "fixed refs");
    app.handle_key(key(KeyCode::Enter), at(2025, 3, 10, 9, 1, 10));

    assert!(app.dialog().is_none());
    assert_eq!(app.sessions_logged(), 1);
    assert_eq!(app.timer().mode, Mode::ShortBreak);
    assert!(!app.timer().running);

    let day = fs::read_to_string(dir.join("logs").join("Pomodoro_2025-03-10.md")).expect("day log");
    assert!(day.contains("drafted intro\nfixed refs"));
    let task_log = dir.join("logs").join("tasks").join("Essay.md");
    let task = fs::read_to_string(task_log).expect("task log");
    assert!(task.contains("## Work"));

    let journal = read_journal(&dir.join("pomomemo.journal")).expect("journal");
    assert!(journal.iter().any(|e| e.operation == "session"));
}

#[test]
fn test_escape_logs_session_with_empty_note() {
    let (mut app, dir) = setup_app("app_escape", "");
    run_out(&mut app);
    type_text(&mut app, "will be dropped");
    app.handle_key(key(KeyCode::Esc), at(2025, 3, 10, 9, 1, 5));

    assert_eq!(app.sessions_logged(), 1);
    let day = fs::read_to_string(dir.join("logs").join("Pomodoro_2025-03-10.md")).expect("day log");
    assert!(!day.contains("will be dropped"));
    assert!(!day.contains("#### Memo"));
    assert!(!dir.join("logs").join("tasks").exists());
}

#[test]
fn test_break_note_sets_hint() {
    let (mut app, _) = setup_app("app_break_hint", "");
    run_out(&mut app);
    app.handle_key(key(KeyCode::Enter), at(2025, 3, 10, 9, 1, 0));
    assert!(app.hint().is_none(), "work sessions do not change the hint");

    run_out(&mut app);
    let dialog = app.dialog().expect("break dialog");
    assert_eq!(dialog.kind, DialogKind::BreakActivity);
    type_text(&mut app, "checked instagram");
    app.handle_key(key(KeyCode::Enter), at(2025, 3, 10, 9, 3, 0));

    let hint = app.hint().expect("hint after break");
    assert_eq!(hint.kind, HintKind::Dont);
    assert_eq!(hint.keyword, Some("instagram"));
    assert_eq!(app.timer().mode, Mode::Work);
}

#[test]
fn test_skip_logs_without_dialog() {
    let (mut app, dir) = setup_app("app_skip", "Essay");
    let t0 = at(2025, 3, 10, 9, 0, 0);
    app.handle_key(key(KeyCode::Char(' ')), t0);
    for i in 1..=10 {
        app.tick(t0 + chrono::Duration::seconds(i));
    }
    app.handle_key(key(KeyCode::Char('s')), at(2025, 3, 10, 9, 0, 10));

    assert!(app.dialog().is_none());
    assert_eq!(app.sessions_logged(), 1);
    assert!(app.history()[0].skipped);
    assert_eq!(app.history()[0].duration_secs, 10);

    let day = fs::read_to_string(dir.join("logs").join("Pomodoro_2025-03-10.md")).expect("day log");
    assert!(day.contains("(0m 10s)"));
    assert!(day.contains("- **Skipped**: yes"));
}

#[test]
fn test_reset_before_any_tick_writes_nothing() {
    let (mut app, dir) = setup_app("app_reset", "Essay");
    app.handle_key(key(KeyCode::Char(' ')), at(2025, 3, 10, 9, 0, 0));
    app.handle_key(key(KeyCode::Char('r')), at(2025, 3, 10, 9, 0, 0));

    assert!(!app.timer().running);
    assert_eq!(app.timer().remaining_secs, 60);
    assert_eq!(app.sessions_logged(), 0);
    assert!(!dir.join("logs").exists());
}

#[test]
fn test_invalid_setting_keeps_previous_value() {
    let (mut app, dir) = setup_app("app_invalid_setting", "");
    app.update_setting("work", "0");

    assert_eq!(app.config().work_minutes, 1);
    assert_eq!(app.settings().work_secs, 60);
    assert_eq!(app.notice().map(|n| n.level), Some(NoticeLevel::Error));
    assert!(!dir.join("pomomemo.conf").exists());
}

#[test]
fn test_settings_panel_updates_idle_session_and_saves() {
    let (mut app, dir) = setup_app("app_settings_panel", "");
    let now = at(2025, 3, 10, 9, 0, 0);

    app.handle_key(key(KeyCode::Char('c')), now);
    assert_eq!(app.view(), View::Settings);

    // Work is selected first: clear the buffer and type 50
    app.handle_key(key(KeyCode::Enter), now);
    app.handle_key(key(KeyCode::Backspace), now);
    type_text(&mut app, "50");
    app.handle_key(key(KeyCode::Enter), now);
    app.handle_key(key(KeyCode::Esc), now);

    assert_eq!(app.view(), View::Timer);
    assert_eq!(app.config().work_minutes, 50);
    assert_eq!(app.timer().remaining_secs, 50 * 60);

    let saved = Config::load_from(&dir.join("pomomemo.conf")).expect("saved config");
    assert_eq!(saved.work_minutes, 50);
}

#[test]
fn test_task_can_be_renamed_from_the_window() {
    let (mut app, _) = setup_app("app_task_rename", "Old");
    let now = at(2025, 3, 10, 9, 0, 0);

    app.handle_key(key(KeyCode::Char('t')), now);
    for _ in 0..3 {
        app.handle_key(key(KeyCode::Backspace), now);
    }
    type_text(&mut app, "New task");
    app.handle_key(key(KeyCode::Enter), now);

    assert_eq!(app.task(), "New task");
    assert!(app.task_input().is_none());
}

#[test]
fn test_quit_keys() {
    let (mut app, dir) = setup_app("app_quit", "");
    app.handle_key(key(KeyCode::Char('q')), at(2025, 3, 10, 9, 0, 0));
    assert!(app.should_quit());
    assert_eq!(app.sessions_logged(), 0);
    assert!(!dir.join("logs").exists(), "an unfinished session is dropped");
}

#[test]
fn test_ctrl_c_in_dialog_logs_finished_session() {
    let (mut app, dir) = setup_app("app_quit_ctrl_c", "Essay");
    run_out(&mut app);
    type_text(&mut app, "half typed");
    app.handle_key(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        at(2025, 3, 10, 9, 1, 0),
    );

    assert!(app.should_quit());
    assert!(app.dialog().is_none());
    assert_eq!(app.sessions_logged(), 1);

    let day = fs::read_to_string(dir.join("logs").join("Pomodoro_2025-03-10.md")).expect("day log");
    assert!(day.contains("## Work"));
    assert!(!day.contains("half typed"), "closing the dialog keeps an empty note");
    assert!(dir.join("logs").join("tasks").join("Essay.md").exists());
}

#[test]
fn test_wrap_up_reports_lost_entries_and_only_written_sessions() {
    let dir = setup_test_dir("app_wrap_up_lost");
    let blocked = dir.join("logs");
    fs::write(&blocked, "not a directory").expect("create blocker");
    let mut app = App::new(
        Config::default(),
        dir.join("pomomemo.conf"),
        Logbook::new(&blocked, "Pomodoro"),
        "",
    );

    let t0 = at(2025, 3, 10, 9, 0, 0);
    app.handle_key(key(KeyCode::Char(' ')), t0);
    app.tick(t0 + chrono::Duration::seconds(1));
    app.handle_key(key(KeyCode::Char('s')), t0 + chrono::Duration::seconds(1));

    assert_eq!(app.notice().map(|n| n.level), Some(NoticeLevel::Warning));
    assert_eq!(app.history().len(), 1);

    let report = wrap_up(&mut app);
    assert_eq!(report.sessions_logged, 0);
    assert_eq!(report.lost_entries, 1);
    assert_eq!(app.logbook().pending_count(), 0);

    let journal = read_journal(&dir.join("pomomemo.journal")).expect("journal");
    assert!(journal.iter().any(|e| e.message.contains("discarded on exit")));
}
