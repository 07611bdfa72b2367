use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkday
/// CLI application that simulates a workday schedule in real time
#[derive(Parser)]
#[command(
    name = "rworkday",
    version = env!("CARGO_PKG_VERSION"),
    about = "Simulate a workday schedule with real-time progress bars",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Milliseconds per simulated second (test hook, default 1000)
    #[arg(global = true, long = "tick-ms", hide = true)]
    pub tick_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one simulated workday now and print the summary
    Run,

    /// Watch the clock: start the workday at the configured time on
    /// weekdays, prompt on weekends, reset before the next start
    Watch,

    /// Print the activity schedule without running it
    Schedule,
}
