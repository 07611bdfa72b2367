use chrono::{DateTime, Local, Timelike};

use crate::utils::time;

/// Snapshot of the wall-clock display fields shown by the watch header.
/// A single background thread rebuilds the whole snapshot once per second;
/// readers clone it, so a reader never sees a half-updated set of fields.
#[derive(Debug, Clone, Default)]
pub struct ClockState {
    pub time: String,
    pub date: String,
    pub greeting: String,
}

impl ClockState {
    pub fn at(now: &DateTime<Local>) -> Self {
        Self {
            time: now.format("%I:%M:%S %p").to_string(),
            date: now.format("%A, %d %B %Y").to_string(),
            greeting: time::greeting_for_hour(now.hour()).to_string(),
        }
    }
}
