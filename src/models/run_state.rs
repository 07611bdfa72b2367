use chrono::{DateTime, Duration, Local};

use crate::utils::time;

/// In-memory summary of one completed workday run.
/// Overwritten on the next run and cleared at the daily reset boundary;
/// never persisted.
#[derive(Debug, Clone)]
pub struct RunState {
    pub start_time: DateTime<Local>,
    pub end_time: DateTime<Local>,
    pub total_hours: f64,
    pub activity_count: usize,
    /// Wall-clock elapsed time. May exceed the nominal total when the
    /// process was delayed between ticks.
    pub elapsed: Duration,
}

impl RunState {
    pub fn start_str(&self) -> String {
        time::format_clock(&self.start_time)
    }

    pub fn end_str(&self) -> String {
        time::format_clock(&self.end_time)
    }

    pub fn elapsed_str(&self) -> String {
        time::format_seconds(self.elapsed.num_seconds().max(0) as u64)
    }
}
