pub mod clock;
pub mod day_loop;
pub mod runner;
pub mod schedule;
