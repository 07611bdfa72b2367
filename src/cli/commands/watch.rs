use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crate::config::Config;
use crate::core::day_loop::DayLoop;
use crate::errors::AppResult;
use crate::ui::style::{BOLD, RESET};

pub fn handle(cfg: &Config, tick: Duration, stop: &Arc<AtomicBool>) -> AppResult<()> {
    let schedule = cfg.schedule()?;
    let windows = cfg.windows()?;

    println!("{BOLD}Watching the clock. Press Ctrl+C to stop.{RESET}\n");

    DayLoop::new(
        &schedule,
        windows,
        cfg.poll_secs,
        cfg.weekend_poll_secs,
        tick,
        Arc::clone(stop),
    )
    .run()
}
