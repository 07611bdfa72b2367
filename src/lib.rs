//! rWorkday library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, stop: &Arc<AtomicBool>) -> AppResult<()> {
    let tick = Duration::from_millis(cli.tick_ms.unwrap_or(1000));

    match &cli.command {
        Commands::Schedule => cli::commands::schedule::handle(cfg),
        Commands::Run => cli::commands::run::handle(cfg, tick, stop),
        Commands::Watch => cli::commands::watch::handle(cfg, tick, stop),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once; --config overrides the default location.
    let cfg = Config::load(cli.config.as_deref())?;

    // A single shared flag is the only cancellation mechanism: Ctrl-C sets
    // it, and every sleep in the program observes it within one tick.
    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst))
            .map_err(|e| AppError::Other(format!("failed to install Ctrl-C handler: {e}")))?;
    }

    dispatch(&cli, &cfg, &stop)
}
