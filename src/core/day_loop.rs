//! Day Loop: the outer polling state machine.
//!
//! Each tick inspects wall-clock time and weekday and decides whether to
//! idle, prompt (weekends), run the workday, or reset completion state.
//! The decision itself is a pure function over (weekday, time, latches) so
//! every transition can be tested without a clock.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::{Datelike, Local, NaiveTime, Weekday};

use crate::core::clock::ClockHandle;
use crate::core::runner::{self, Pacer, SleepPacer};
use crate::core::schedule::Schedule;
use crate::errors::{AppError, AppResult};
use crate::models::run_state::RunState;
use crate::ui::{messages, panel, summary};

/// Poll-time phases of the loop. `WeekendRunning` and `Running` describe
/// an in-progress run; `decide` returns the phase that leads into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    BeforeWindow,
    ResetWindow,
    PreStart,
    WeekendIdle,
    WeekendRunning,
    Running,
    PostComplete,
}

/// The two boundary times of the day, reset < start.
#[derive(Debug, Clone, Copy)]
pub struct Windows {
    pub reset: NaiveTime,
    pub start: NaiveTime,
}

/// Mutable loop state. `workday_complete` latches after a run and is only
/// cleared in the reset window; `reset_done` latches the reset itself so a
/// delayed tick neither skips nor repeats it.
#[derive(Debug, Default)]
pub struct LoopState {
    pub workday_complete: bool,
    pub reset_done: bool,
    pub summary: Option<RunState>,
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Weekend prompt normalization: y/Y means yes, everything else
/// (including EOF) means no.
pub fn answer_is_yes(answer: &str) -> bool {
    answer.trim().to_uppercase() == "Y"
}

/// One poll-tick decision.
///
/// Boundary conditions use range checks over [reset, start) rather than
/// the exact minute matches a naive implementation would use: a tick that
/// lands late in the window still takes the transition, and the latches in
/// `LoopState` keep it from firing twice in one day.
pub fn decide(weekday: Weekday, t: NaiveTime, win: &Windows, st: &LoopState) -> Phase {
    let in_reset_window = t >= win.reset && t < win.start;

    // The reset applies on weekends too, so a Saturday run's stats clear
    // before Sunday's prompt.
    if in_reset_window && !st.reset_done {
        return Phase::ResetWindow;
    }

    if is_weekend(weekday) {
        return if st.workday_complete {
            Phase::PostComplete
        } else {
            Phase::WeekendIdle
        };
    }

    if t < win.reset {
        return Phase::BeforeWindow;
    }
    if in_reset_window {
        return Phase::PreStart;
    }
    if st.workday_complete {
        Phase::PostComplete
    } else {
        Phase::Running
    }
}

pub struct DayLoop<'a> {
    schedule: &'a Schedule,
    windows: Windows,
    poll_secs: u64,
    weekend_poll_secs: u64,
    pacer: SleepPacer,
    stop: Arc<AtomicBool>,
}

impl<'a> DayLoop<'a> {
    pub fn new(
        schedule: &'a Schedule,
        windows: Windows,
        poll_secs: u64,
        weekend_poll_secs: u64,
        tick: Duration,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            schedule,
            windows,
            poll_secs,
            weekend_poll_secs,
            pacer: SleepPacer::new(tick, Arc::clone(&stop)),
            stop,
        }
    }

    /// Run until interrupted. No terminal state and nothing is persisted.
    pub fn run(&self) -> AppResult<()> {
        let clock = ClockHandle::spawn();
        let mut state = LoopState::default();

        loop {
            if self.stop.load(Ordering::SeqCst) {
                return Err(AppError::Interrupted);
            }

            let now = Local::now();
            if now.time() < self.windows.reset {
                // New day: arm the next reset window.
                state.reset_done = false;
            }

            println!("{}", panel::clock_header(&clock.snapshot()));

            match decide(now.weekday(), now.time(), &self.windows, &state) {
                Phase::BeforeWindow => {
                    match &state.summary {
                        Some(run) => println!("{}", summary::render(run)),
                        None => messages::info("Waiting for the workday window..."),
                    }
                    self.pause(self.poll_secs)?;
                }
                Phase::ResetWindow => {
                    state.workday_complete = false;
                    state.summary = None;
                    state.reset_done = true;
                    messages::info("Daily reset: completion state cleared");
                    // Reset and weekend idle both re-poll on the slow interval.
                    self.pause(self.weekend_poll_secs)?;
                }
                Phase::PreStart => {
                    messages::info("Workday starting soon...");
                    self.pause(self.poll_secs)?;
                }
                Phase::WeekendIdle => {
                    if self.confirm_weekend_run()? {
                        // Phase::WeekendRunning for the duration of the run.
                        messages::info("Weekend session confirmed, starting now");
                        let run = runner::run_with_display(self.schedule, &self.pacer)?;
                        state.workday_complete = true;
                        state.summary = Some(run);
                    } else {
                        messages::info("Staying idle, enjoy the weekend");
                        self.pause(self.weekend_poll_secs)?;
                    }
                }
                Phase::Running => {
                    messages::info("Start time reached, beginning the workday");
                    let run = runner::run_with_display(self.schedule, &self.pacer)?;
                    state.workday_complete = true;
                    state.summary = Some(run);
                }
                Phase::PostComplete => {
                    if let Some(run) = &state.summary {
                        println!("{}", summary::render(run));
                    } else {
                        messages::info("Workday window passed for today");
                    }
                    self.pause(self.poll_secs)?;
                }
                // decide() never yields this; the arms above cover the run.
                Phase::WeekendRunning => {}
            }
        }
    }

    /// Blocking Y/N prompt; anything but y/Y counts as no.
    fn confirm_weekend_run(&self) -> AppResult<bool> {
        let answer = messages::prompt("It's the weekend. Run the workday anyway? [y/N] ")?;
        Ok(answer_is_yes(&answer))
    }

    /// Sleep `secs` simulated seconds, observing the interrupt flag.
    fn pause(&self, secs: u64) -> AppResult<()> {
        for _ in 0..secs {
            if !self.pacer.wait_second() {
                return Err(AppError::Interrupted);
            }
        }
        Ok(())
    }
}
