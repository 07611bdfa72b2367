#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwd() -> Command {
    cargo_bin_cmd!("rworkday")
}

/// Write a config file inside the system temp dir and return its path.
pub fn write_config(name: &str, yaml: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkday.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, yaml).expect("write test config");
    p
}

/// A miniature schedule: two activities of a few seconds each, so `run`
/// with --tick-ms 0 finishes instantly.
pub fn tiny_schedule_config(name: &str) -> String {
    write_config(
        name,
        "activities:\n  - name: \"Micro task A\"\n    hours: 0.001\n  - name: \"Micro task B\"\n    hours: 0.001\n",
    )
}
