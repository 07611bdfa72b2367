use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::core::schedule::Schedule;
use crate::errors::AppResult;
use crate::ui::style::{BOLD, DIM, RESET};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let schedule = cfg.schedule()?;
    println!("{}", render(&schedule));
    Ok(())
}

fn render(schedule: &Schedule) -> String {
    let name_w = schedule
        .activities()
        .iter()
        .map(|a| UnicodeWidthStr::width(a.name.as_str()))
        .max()
        .unwrap_or(8)
        .max("Activity".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{BOLD}{}{}  {:>5}  {:>7}{RESET}\n",
        "Activity",
        " ".repeat(name_w - "Activity".len()),
        "Hours",
        "Seconds"
    ));

    for a in schedule.activities() {
        let pad = name_w - UnicodeWidthStr::width(a.name.as_str());
        out.push_str(&format!(
            "{}{}  {:>5}  {:>7}\n",
            a.name,
            " ".repeat(pad),
            a.hours,
            a.duration_seconds()
        ));
    }

    out.push_str(&format!(
        "{DIM}{}{RESET}\n",
        "-".repeat(name_w + 16)
    ));
    out.push_str(&format!(
        "{BOLD}{}{}  {:>5}  {:>7}{RESET}",
        "Total",
        " ".repeat(name_w - "Total".len()),
        schedule.total_hours(),
        schedule.total_seconds()
    ));
    out
}
