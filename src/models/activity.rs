use serde::{Deserialize, Serialize};

/// One named slot of the workday: a label and a duration in hours.
/// Immutable once the schedule is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub hours: f64,
}

impl Activity {
    pub fn new(name: &str, hours: f64) -> Self {
        Self {
            name: name.to_string(),
            hours,
        }
    }

    /// Allotted duration in whole seconds.
    pub fn duration_seconds(&self) -> u64 {
        (self.hours * 3600.0).round() as u64
    }
}
