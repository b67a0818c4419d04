use predicates::str::contains;
use std::fs;

mod common;
use common::{pomo, setup_test_config, write_day_log};

fn setup_logs(name: &str) -> (std::path::PathBuf, String) {
    let (dir, config) = setup_test_config(name);
    let logs = dir.join("logs");
    write_day_log(&logs, "Pomodoro", "2025-09-15", "## Work • september\n\n---\n\n");
    write_day_log(&logs, "Pomodoro", "2025-08-31", "## Work • august\n\n---\n\n");
    write_day_log(&logs, "Pomodoro", "2025-10-01", "## Work • october\n\n---\n\n");
    fs::write(logs.join("notes.md"), "not a day log").expect("stray file");
    (dir, config)
}

#[test]
fn test_export_all_days_in_date_order() {
    let (dir, config) = setup_logs("export_all");
    let out = dir.join("out.md");

    pomo()
        .args(["--config", &config, "export", "--file", &out.to_string_lossy()])
        .assert()
        .success()
        .stdout(contains("3 file(s)"));

    let content = fs::read_to_string(&out).expect("read export");
    let a = content.find("august").expect("august");
    let s = content.find("september").expect("september");
    let o = content.find("october").expect("october");
    assert!(a < s && s < o);
    assert!(!content.contains("not a day log"));
}

#[test]
fn test_export_range_filters_days() {
    let (dir, config) = setup_logs("export_range");
    let out = dir.join("out.md");

    pomo()
        .args([
            "--config",
            &config,
            "export",
            "--file",
            &out.to_string_lossy(),
            "--range",
            "2025-09:2025-10",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(!content.contains("august"));
    assert!(content.contains("september"));
    assert!(content.contains("october"));
}

#[test]
fn test_export_task_log() {
    let (dir, config) = setup_logs("export_task");
    let tasks = dir.join("logs").join("tasks");
    fs::create_dir_all(&tasks).expect("tasks dir");
    fs::write(tasks.join("Essay.md"), "# Task Log - Essay\n\nessay body\n").expect("task log");
    let out = dir.join("essay.md");

    pomo()
        .args(["--config", &config, "export", "--file", &out.to_string_lossy(), "--task", "Essay"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read export");
    assert!(content.contains("essay body"));
}

#[test]
fn test_export_nothing_matches() {
    let (dir, config) = setup_logs("export_empty");
    let out = dir.join("none.md");

    pomo()
        .args(["--config", &config, "export", "--file", &out.to_string_lossy(), "--range", "2024"])
        .assert()
        .success()
        .stdout(contains("No log files found"));

    assert!(!out.exists());
}

#[test]
fn test_export_force_overwrites() {
    let (dir, config) = setup_logs("export_force");
    let out = dir.join("out.md");
    fs::write(&out, "old content").expect("existing file");

    pomo()
        .args(["--config", &config, "export", "--file", &out.to_string_lossy(), "--force"])
        .assert()
        .success();

    assert!(!fs::read_to_string(&out).expect("read export").contains("old content"));
}

#[test]
fn test_export_invalid_range() {
    let (dir, config) = setup_logs("export_bad_range");
    let out = dir.join("out.md");

    pomo()
        .args([
            "--config",
            &config,
            "export",
            "--file",
            &out.to_string_lossy(),
            "--range",
            "2025-13",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));
}
