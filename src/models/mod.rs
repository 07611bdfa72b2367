pub mod activity;
pub mod clock_state;
pub mod run_state;
