use predicates::str::contains;

mod common;
use common::{rwd, tiny_schedule_config, write_config};

#[test]
fn test_schedule_prints_default_workday() {
    rwd()
        .arg("schedule")
        .assert()
        .success()
        .stdout(contains("Morning coffee & emails"))
        .stdout(contains("End-of-day emails"))
        .stdout(contains("28800"));
}

#[test]
fn test_schedule_uses_config_activities() {
    let cfg = tiny_schedule_config("schedule_custom");

    rwd()
        .args(["--config", &cfg, "schedule"])
        .assert()
        .success()
        .stdout(contains("Micro task A"))
        .stdout(contains("Micro task B"));
}

#[test]
fn test_run_tiny_workday_prints_summary() {
    let cfg = tiny_schedule_config("run_tiny");

    rwd()
        .args(["--config", &cfg, "--tick-ms", "0", "run"])
        .assert()
        .success()
        .stdout(contains("Workday Timer Starting"))
        .stdout(contains("Completed:"))
        .stdout(contains("Workday Summary"))
        .stdout(contains("Activities Completed"))
        .stdout(contains("Workday Complete!"));
}

#[test]
fn test_run_rejects_empty_schedule() {
    let cfg = write_config("run_empty", "activities: []\n");

    rwd()
        .args(["--config", &cfg, "--tick-ms", "0", "run"])
        .assert()
        .failure()
        .stderr(contains("schedule is empty"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    rwd()
        .args(["--config", "/nonexistent/rworkday.conf", "schedule"])
        .assert()
        .failure()
        .stderr(contains("config file not found"));
}

#[test]
fn test_invalid_window_times_rejected() {
    let cfg = write_config(
        "bad_windows",
        "start_time: \"07:00\"\nreset_time: \"08:00\"\n",
    );

    rwd()
        .args(["--config", &cfg, "schedule"])
        .assert()
        .failure()
        .stderr(contains("must be earlier than"));
}
