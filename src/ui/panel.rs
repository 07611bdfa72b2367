//! Boxed panels and the watch clock header.

use unicode_width::UnicodeWidthStr;

use crate::models::clock_state::ClockState;
use crate::ui::style::{BOLD, CYAN, DIM, GREEN, RESET};

#[derive(Debug, Clone, Copy)]
pub enum Accent {
    Cyan,
    Green,
}

impl Accent {
    fn code(self) -> &'static str {
        match self {
            Accent::Cyan => CYAN,
            Accent::Green => GREEN,
        }
    }
}

/// Render `lines` inside a rounded box sized to the widest line.
pub fn boxed(lines: &[String], accent: Accent) -> String {
    let c = accent.code();
    let inner = lines
        .iter()
        .map(|l| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{c}╭{}╮{RESET}\n", "─".repeat(inner + 2)));
    for line in lines {
        let pad = inner - UnicodeWidthStr::width(line.as_str());
        out.push_str(&format!(
            "{c}│{RESET} {}{} {c}│{RESET}\n",
            line,
            " ".repeat(pad)
        ));
    }
    out.push_str(&format!("{c}╰{}╯{RESET}", "─".repeat(inner + 2)));
    out
}

/// One-line clock/date/greeting header, redrawn each poll tick.
pub fn clock_header(clock: &ClockState) -> String {
    format!(
        "{BOLD}🕒 {}{RESET} {DIM}·{RESET} {} {DIM}·{RESET} {}",
        clock.time, clock.date, clock.greeting
    )
}
