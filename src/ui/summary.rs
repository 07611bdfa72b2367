//! End-of-run summary table.

use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

use crate::models::run_state::RunState;
use crate::utils::time;

/// Two-column metric/value table for one completed run.
pub fn render(run: &RunState) -> String {
    let rows: Vec<(&str, String)> = vec![
        ("Start Time", run.start_str()),
        ("End Time", run.end_str()),
        ("Total Hours", time::hours_label(run.total_hours)),
        ("Activities Completed", run.activity_count.to_string()),
        ("Actual Duration", run.elapsed_str()),
    ];

    let label_w = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(*label))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        Colour::Cyan.bold().paint("📋 Workday Summary")
    ));
    for (label, value) in rows {
        let pad = label_w - UnicodeWidthStr::width(label);
        out.push_str(&format!(
            "  {}{}  {}\n",
            Colour::Cyan.paint(label),
            " ".repeat(pad),
            Colour::Green.paint(value)
        ));
    }
    out
}
