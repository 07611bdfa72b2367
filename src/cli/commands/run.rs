use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crate::config::Config;
use crate::core::runner::{self, SleepPacer};
use crate::errors::AppResult;
use crate::ui::style::{BOLD, RESET};

pub fn handle(cfg: &Config, tick: Duration, stop: &Arc<AtomicBool>) -> AppResult<()> {
    let schedule = cfg.schedule()?;

    println!("{BOLD}Press Ctrl+C to stop the timer at any time{RESET}\n");

    let pacer = SleepPacer::new(tick, Arc::clone(stop));
    runner::run_with_display(&schedule, &pacer)?;
    Ok(())
}
