//! Time utilities: parsing HH:MM, formatting durations and clock times.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_required_time(s: &str) -> AppResult<NaiveTime> {
    parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

/// 12-hour clock, e.g. "08:00 AM".
pub fn format_clock(dt: &DateTime<Local>) -> String {
    dt.format("%I:%M %p").to_string()
}

/// "HH:MM:SS" from a number of seconds.
pub fn format_seconds(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// "8 hours" for whole values, "7.5 hours" otherwise.
pub fn hours_label(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{} hours", hours as u64)
    } else {
        format!("{:.1} hours", hours)
    }
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}
