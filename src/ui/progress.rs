//! indicatif-backed presentation for the Workday Runner.
//!
//! Two bars: a whole-day bar sized to the schedule total and a
//! per-activity bar added when an activity starts and cleared when it
//! finishes, both advancing one second at a time.

use chrono::{DateTime, Local};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::core::runner::RunObserver;
use crate::models::activity::Activity;
use crate::ui::style::{BOLD, DIM, GREEN, RESET, YELLOW};
use crate::utils::time;

pub struct ProgressDisplay {
    multi: MultiProgress,
    day: ProgressBar,
    activity: Option<ProgressBar>,
}

impl ProgressDisplay {
    pub fn new(total_seconds: u64) -> Self {
        // Draw on stdout so the activity log and the bars share a stream.
        let multi = MultiProgress::with_draw_target(ProgressDrawTarget::stdout());
        let day = multi.add(ProgressBar::new(total_seconds));
        day.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {msg} [{bar:40.cyan/blue}] {percent:>3}% ({eta})")
                .unwrap()
                .progress_chars("=>-"),
        );
        day.set_message("📅 Total workday progress");

        Self {
            multi,
            day,
            activity: None,
        }
    }

    pub fn finish(&mut self) {
        self.day.finish_with_message("📅 Workday finished");
    }

    fn println(&self, msg: String) {
        // Hidden draw target (output piped): the bars are invisible and
        // MultiProgress would swallow the message, so print directly.
        if self.day.is_hidden() {
            println!("{msg}");
        } else {
            let _ = self.multi.println(msg);
        }
    }
}

impl RunObserver for ProgressDisplay {
    fn activity_started(&mut self, activity: &Activity, expected_end: DateTime<Local>) {
        self.println(format!(
            "\n{BOLD}{YELLOW}Starting:{RESET} {}",
            activity.name
        ));
        self.println(format!(
            "{DIM}Duration: {} | Expected completion: {}{RESET}\n",
            time::hours_label(activity.hours),
            time::format_clock(&expected_end)
        ));

        let bar = self.multi.add(ProgressBar::new(activity.duration_seconds()));
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.yellow} {msg} [{bar:40.yellow/blue}] {percent:>3}%")
                .unwrap()
                .progress_chars("=>-"),
        );
        bar.set_message(activity.name.clone());
        self.activity = Some(bar);
    }

    fn second_elapsed(&mut self, _activity_elapsed: u64, _day_elapsed: u64) {
        if let Some(bar) = &self.activity {
            bar.inc(1);
        }
        self.day.inc(1);
    }

    fn activity_finished(&mut self, activity: &Activity, at: DateTime<Local>) {
        if let Some(bar) = self.activity.take() {
            bar.finish_and_clear();
        }
        self.println(format!(
            "{GREEN}✓ Completed:{RESET} {} {DIM}at {}{RESET}",
            activity.name,
            time::format_clock(&at)
        ));
    }
}
