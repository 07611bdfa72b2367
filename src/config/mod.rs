use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::core::day_loop::Windows;
use crate::core::schedule::Schedule;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::utils::time;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Workday start time, HH:MM (weekdays).
    #[serde(default = "default_start_time")]
    pub start_time: String,

    /// Daily reset time, HH:MM. Must be earlier than start_time.
    #[serde(default = "default_reset_time")]
    pub reset_time: String,

    /// Poll interval in seconds for the idle/waiting phases.
    #[serde(default = "default_poll_secs")]
    pub poll_secs: u64,

    /// Poll interval in seconds while idling on weekends.
    #[serde(default = "default_weekend_poll_secs")]
    pub weekend_poll_secs: u64,

    /// Optional replacement for the built-in activity list.
    #[serde(default)]
    pub activities: Option<Vec<Activity>>,
}

fn default_start_time() -> String {
    "08:00".to_string()
}
fn default_reset_time() -> String {
    "07:55".to_string()
}
fn default_poll_secs() -> u64 {
    30
}
fn default_weekend_poll_secs() -> u64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_time: default_start_time(),
            reset_time: default_reset_time(),
            poll_secs: default_poll_secs(),
            weekend_poll_secs: default_weekend_poll_secs(),
            activities: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkday")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkday.conf")
    }

    /// Load configuration from `custom` or the default location.
    /// A missing default file yields the built-in defaults; a missing
    /// explicitly-requested file is an error.
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = match custom {
            Some(p) => {
                let p = PathBuf::from(p);
                if !p.exists() {
                    return Err(AppError::Config(format!(
                        "config file not found: {}",
                        p.display()
                    )));
                }
                p
            }
            None => {
                let p = Self::config_file();
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        let reset = time::parse_required_time(&self.reset_time)?;
        let start = time::parse_required_time(&self.start_time)?;
        if reset >= start {
            return Err(AppError::Config(format!(
                "reset_time {} must be earlier than start_time {}",
                self.reset_time, self.start_time
            )));
        }
        if self.poll_secs == 0 || self.weekend_poll_secs == 0 {
            return Err(AppError::Config(
                "poll intervals must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }

    /// Reset/start window, parsed.
    pub fn windows(&self) -> AppResult<Windows> {
        Ok(Windows {
            reset: time::parse_required_time(&self.reset_time)?,
            start: time::parse_required_time(&self.start_time)?,
        })
    }

    /// The activity schedule: either the configured list or the built-in
    /// eight-activity workday.
    pub fn schedule(&self) -> AppResult<Schedule> {
        match &self.activities {
            Some(list) => Schedule::from_activities(list.clone()),
            None => Ok(Schedule::default_workday()),
        }
    }
}
