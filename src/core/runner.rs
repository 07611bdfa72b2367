//! Workday Runner: one pass over the activity list, advancing a
//! per-activity counter and a whole-day counter in lockstep, one
//! simulated second at a time.
//!
//! Pacing and presentation are both injected so the accounting can be
//! exercised without real sleeps or a terminal: `Pacer` decides how long
//! a simulated second takes, `RunObserver` receives every counter tick.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::schedule::Schedule;
use crate::errors::{AppError, AppResult};
use crate::models::activity::Activity;
use crate::models::run_state::RunState;
use crate::ui::progress::ProgressDisplay;
use crate::ui::{panel, summary};
use crate::utils::time;

/// Paces the runner. Returns false when the wait was cancelled and the
/// run should be abandoned.
pub trait Pacer {
    fn wait_second(&self) -> bool;
}

/// Real pacer: sleeps one tick (1000 ms, or the hidden --tick-ms value)
/// and checks the interrupt flag on both sides of the sleep.
pub struct SleepPacer {
    tick: Duration,
    stop: Arc<AtomicBool>,
}

impl SleepPacer {
    pub fn new(tick: Duration, stop: Arc<AtomicBool>) -> Self {
        Self { tick, stop }
    }
}

impl Pacer for SleepPacer {
    fn wait_second(&self) -> bool {
        if self.stop.load(Ordering::SeqCst) {
            return false;
        }
        thread::sleep(self.tick);
        !self.stop.load(Ordering::SeqCst)
    }
}

/// Receives progress callbacks from the runner. The CLI implementation
/// drives indicatif bars; tests record the counter trace.
pub trait RunObserver {
    fn activity_started(&mut self, activity: &Activity, expected_end: DateTime<Local>);

    /// One simulated second elapsed. `activity_elapsed` restarts at 1 for
    /// each activity; `day_elapsed` is monotonic across the whole run.
    fn second_elapsed(&mut self, activity_elapsed: u64, day_elapsed: u64);

    fn activity_finished(&mut self, activity: &Activity, at: DateTime<Local>);
}

pub struct WorkdayRunner<'a> {
    schedule: &'a Schedule,
}

impl<'a> WorkdayRunner<'a> {
    pub fn new(schedule: &'a Schedule) -> Self {
        Self { schedule }
    }

    /// Execute one workday. On cancellation the partial run is discarded
    /// and `AppError::Interrupted` is returned; no summary exists.
    pub fn execute(
        &self,
        pacer: &dyn Pacer,
        observer: &mut dyn RunObserver,
    ) -> AppResult<RunState> {
        let start_time = Local::now();
        let mut day_elapsed: u64 = 0;

        for activity in self.schedule.activities() {
            let duration = activity.duration_seconds();
            let expected_end = Local::now() + chrono::Duration::seconds(duration as i64);
            observer.activity_started(activity, expected_end);

            let mut elapsed: u64 = 0;
            while elapsed < duration {
                if !pacer.wait_second() {
                    return Err(AppError::Interrupted);
                }
                elapsed += 1;
                day_elapsed += 1;
                observer.second_elapsed(elapsed, day_elapsed);
            }

            observer.activity_finished(activity, Local::now());
        }

        let end_time = Local::now();
        Ok(RunState {
            start_time,
            end_time,
            total_hours: self.schedule.total_hours(),
            activity_count: self.schedule.len(),
            elapsed: end_time - start_time,
        })
    }
}

/// Run one workday with the full console presentation: start banner,
/// progress bars, summary table, completion banner.
pub fn run_with_display(schedule: &Schedule, pacer: &dyn Pacer) -> AppResult<RunState> {
    let start = Local::now();
    let banner = [
        "🏢 Workday Timer Starting".to_string(),
        format!("Start time: {}", time::format_clock(&start)),
        format!("Total duration: {}", time::hours_label(schedule.total_hours())),
    ];
    println!("{}", panel::boxed(&banner, panel::Accent::Cyan));
    println!();

    let mut display = ProgressDisplay::new(schedule.total_seconds());
    let run = WorkdayRunner::new(schedule).execute(pacer, &mut display)?;
    display.finish();

    println!();
    println!("{}", summary::render(&run));
    let outro = [
        "🎉 Workday Complete!".to_string(),
        "Great job staying on track!".to_string(),
    ];
    println!("{}", panel::boxed(&outro, panel::Accent::Green));
    Ok(run)
}
