use std::cell::Cell;

use chrono::{DateTime, Local};

use rworkday::core::runner::{Pacer, RunObserver, WorkdayRunner};
use rworkday::core::schedule::Schedule;
use rworkday::errors::AppError;
use rworkday::models::activity::Activity;

/// Never sleeps, never cancels.
struct InstantPacer;

impl Pacer for InstantPacer {
    fn wait_second(&self) -> bool {
        true
    }
}

/// Cancels after a fixed number of seconds.
struct CancellingPacer {
    remaining: Cell<u64>,
}

impl Pacer for CancellingPacer {
    fn wait_second(&self) -> bool {
        if self.remaining.get() == 0 {
            return false;
        }
        self.remaining.set(self.remaining.get() - 1);
        true
    }
}

/// Records the full counter trace the runner emits.
#[derive(Default)]
struct Recorder {
    started: Vec<String>,
    finished: Vec<String>,
    ticks: Vec<(u64, u64)>,
}

impl RunObserver for Recorder {
    fn activity_started(&mut self, activity: &Activity, _expected_end: DateTime<Local>) {
        self.started.push(activity.name.clone());
    }

    fn second_elapsed(&mut self, activity_elapsed: u64, day_elapsed: u64) {
        self.ticks.push((activity_elapsed, day_elapsed));
    }

    fn activity_finished(&mut self, activity: &Activity, _at: DateTime<Local>) {
        self.finished.push(activity.name.clone());
    }
}

fn two_hour_schedule() -> Schedule {
    Schedule::from_activities(vec![Activity::new("A", 1.0), Activity::new("B", 1.0)]).unwrap()
}

#[test]
fn test_counters_advance_in_lockstep() {
    let schedule = two_hour_schedule();
    let mut rec = Recorder::default();

    let run = WorkdayRunner::new(&schedule)
        .execute(&InstantPacer, &mut rec)
        .unwrap();

    assert_eq!(rec.ticks.len(), 7200);
    // Activity counter reaches A's full allotment, then restarts for B.
    assert_eq!(rec.ticks[3599], (3600, 3600));
    assert_eq!(rec.ticks[3600], (1, 3601));
    // Day counter ends at the grand total.
    assert_eq!(rec.ticks[7199], (3600, 7200));
    assert_eq!(run.activity_count, 2);
    assert_eq!(run.total_hours, 2.0);
}

#[test]
fn test_day_counter_is_monotonic() {
    let schedule = two_hour_schedule();
    let mut rec = Recorder::default();

    WorkdayRunner::new(&schedule)
        .execute(&InstantPacer, &mut rec)
        .unwrap();

    for pair in rec.ticks.windows(2) {
        assert_eq!(pair[1].1, pair[0].1 + 1);
    }
}

#[test]
fn test_activities_run_in_order() {
    let schedule = two_hour_schedule();
    let mut rec = Recorder::default();

    WorkdayRunner::new(&schedule)
        .execute(&InstantPacer, &mut rec)
        .unwrap();

    assert_eq!(rec.started, vec!["A", "B"]);
    assert_eq!(rec.finished, vec!["A", "B"]);
}

#[test]
fn test_cancellation_discards_partial_run() {
    let schedule = two_hour_schedule();
    let mut rec = Recorder::default();
    let pacer = CancellingPacer {
        remaining: Cell::new(10),
    };

    let err = WorkdayRunner::new(&schedule)
        .execute(&pacer, &mut rec)
        .unwrap_err();

    assert!(matches!(err, AppError::Interrupted));
    // The run stopped inside the first activity; nothing finished.
    assert_eq!(rec.ticks.len(), 10);
    assert!(rec.finished.is_empty());
}
