//! The fixed workday schedule: an ordered list of activities and its
//! precomputed totals. Built once at startup, never mutated.

use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;

#[derive(Debug, Clone)]
pub struct Schedule {
    activities: Vec<Activity>,
}

impl Schedule {
    /// The built-in eight-activity, eight-hour workday.
    pub fn default_workday() -> Self {
        Self {
            activities: vec![
                Activity::new("☕ Morning coffee & emails", 0.5),
                Activity::new("💼 Team standup meeting", 0.5),
                Activity::new("⌨️  Deep work session", 2.0),
                Activity::new("🍽️  Lunch break", 1.0),
                Activity::new("📞 Client call", 1.0),
                Activity::new("⌨️  Coding/Project work", 2.0),
                Activity::new("📊 Status report", 0.5),
                Activity::new("📧 End-of-day emails", 0.5),
            ],
        }
    }

    /// Build a schedule from a user-supplied activity list.
    pub fn from_activities(activities: Vec<Activity>) -> AppResult<Self> {
        if activities.is_empty() {
            return Err(AppError::InvalidSchedule("schedule is empty".to_string()));
        }
        for a in &activities {
            if a.duration_seconds() == 0 {
                return Err(AppError::InvalidSchedule(format!(
                    "activity '{}' has a non-positive duration",
                    a.name
                )));
            }
        }
        Ok(Self { activities })
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Grand total in seconds; sizes the whole-day progress bar.
    pub fn total_seconds(&self) -> u64 {
        self.activities.iter().map(|a| a.duration_seconds()).sum()
    }

    pub fn total_hours(&self) -> f64 {
        self.activities.iter().map(|a| a.hours).sum()
    }
}
