mod common;
use common::{at, setup_test_dir};
use pomomemo::core::logbook::{Logbook, render_entry};
use pomomemo::models::{Mode, SessionRecord};
use std::fs;

fn record(mode: Mode, start: (u32, u32), end: (u32, u32), task: &str, note: &str) -> SessionRecord {
    SessionRecord {
        mode,
        started_at: at(2025, 3, 10, start.0, start.1, 0),
        ended_at: at(2025, 3, 10, end.0, end.1, 0),
        duration_secs: u64::from((end.0 * 60 + end.1) - (start.0 * 60 + start.1)) * 60,
        task: task.to_string(),
        note: note.to_string(),
        skipped: false,
        cycle: 1,
    }
}

#[test]
fn test_two_sessions_land_in_day_and_task_logs_in_order() {
    let dir = setup_test_dir("logbook_two_sessions");
    let mut book = Logbook::new(&dir, "Pomodoro");

    let work = record(Mode::Work, (9, 0), (9, 25), "Thesis: ch.2", "outlined section 2.1");
    let brk = record(Mode::ShortBreak, (9, 25), (9, 30), "Thesis: ch.2", "walk outside");
    book.append(&work).expect("append work");
    book.append(&brk).expect("append break");

    let day = fs::read_to_string(dir.join("Pomodoro_2025-03-10.md")).expect("day log");
    assert!(day.starts_with("# Pomodoro Log - 2025-03-10"));
    assert_eq!(day.matches("# Pomodoro Log").count(), 1, "title written once");
    let w = day.find("outlined section 2.1").expect("work memo");
    let b = day.find("walk outside").expect("break memo");
    assert!(w < b);

    let task_path = book.task_file("Thesis: ch.2").expect("task file");
    assert_eq!(task_path, dir.join("tasks").join("Thesis- ch.2.md"));
    let task = fs::read_to_string(task_path).expect("task log");
    assert!(task.starts_with("# Task Log - Thesis: ch.2"));
    assert_eq!(task.matches("\n---\n").count(), 2);
    assert!(book.pending().is_empty());
}

#[test]
fn test_two_work_sessions_append_in_order() {
    let dir = setup_test_dir("logbook_two_work");
    let mut book = Logbook::new(&dir, "Pomodoro");

    let mut first = record(Mode::Work, (9, 0), (9, 25), "Essay", "first draft");
    first.cycle = 1;
    let mut second = record(Mode::Work, (9, 30), (9, 55), "Essay", "second draft");
    second.cycle = 2;
    book.append(&first).expect("append first");
    book.append(&second).expect("append second");

    for path in [dir.join("Pomodoro_2025-03-10.md"), dir.join("tasks").join("Essay.md")] {
        let content = fs::read_to_string(&path).expect("log file");
        assert_eq!(content.matches("## Work •").count(), 2, "{}", path.display());
        let a = content.find("- **Cycle**: 1").expect("cycle 1");
        let b = content.find("- **Cycle**: 2").expect("cycle 2");
        assert!(a < b);
        assert!(content.find("first draft") < content.find("second draft"));
    }
}

#[test]
fn test_unnamed_task_writes_day_log_only() {
    let dir = setup_test_dir("logbook_unnamed");
    let mut book = Logbook::new(&dir, "Pomodoro");

    book.append(&record(Mode::Work, (10, 0), (10, 25), "  ", "notes"))
        .expect("append");

    assert!(dir.join("Pomodoro_2025-03-10.md").exists());
    assert!(!dir.join("tasks").exists());
}

#[test]
fn test_entry_format() {
    let mut r = record(Mode::ShortBreak, (9, 25), (9, 30), "", "scrolled the phone");
    r.skipped = true;
    let block = render_entry(&r);

    assert!(block.starts_with(
        "## Short Break • 2025-03-10 09:25:00 → 2025-03-10 09:30:00 (5m 0s)"
    ));
    assert!(block.contains("- **Task**: (unnamed)"));
    assert!(block.contains("- **Skipped**: yes"));
    assert!(block.contains("#### Memo\n\nscrolled the phone"));
    assert!(block.contains("#### Don't"));
    assert!(block.trim_end().ends_with("---"));

    let work = render_entry(&record(Mode::Work, (9, 0), (9, 25), "x", ""));
    assert!(!work.contains("#### Memo"));
    assert!(!work.contains("#### Do"));
}

#[test]
fn test_failed_write_is_queued_and_retried() {
    let dir = setup_test_dir("logbook_retry");
    // a plain file where the log directory should be makes every write fail
    let blocked = dir.join("logs");
    fs::write(&blocked, "not a directory").expect("create blocker");
    let mut book = Logbook::new(&blocked, "Pomodoro");

    let err = book
        .append(&record(Mode::Work, (9, 0), (9, 25), "Essay", "intro"))
        .unwrap_err();
    assert!(err.to_string().contains("Cannot write log file"));
    assert_eq!(book.pending_count(), 2);

    assert!(book.retry_pending().is_err());
    assert_eq!(book.pending_count(), 2, "still queued while blocked");

    fs::remove_file(&blocked).expect("remove blocker");
    assert_eq!(book.retry_pending().expect("retry"), 2);
    assert_eq!(book.pending_count(), 0);

    let day = fs::read_to_string(blocked.join("Pomodoro_2025-03-10.md")).expect("day log");
    assert!(day.contains("intro"));
    assert!(blocked.join("tasks").join("Essay.md").exists());
}

#[test]
fn test_discard_pending_reports_lost_entries() {
    let dir = setup_test_dir("logbook_discard");
    let blocked = dir.join("logs");
    fs::write(&blocked, "x").expect("create blocker");
    let mut book = Logbook::new(&blocked, "Pomodoro");

    let _ = book.append(&record(Mode::Work, (9, 0), (9, 25), "", "memo"));
    assert_eq!(book.discard_pending(), 1);
    assert_eq!(book.pending_count(), 0);
}
